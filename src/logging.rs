use std::fs;
use std::io;
use std::time::Instant;

use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use tracing::{Instrument, error, info, info_span, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use gradebook_config::LogConfig;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Runs the request inside a span carrying a fresh request id, logs the
/// outcome with its latency, and echoes the id in `x-request-id`.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    // Outside routing: the raw path, not the route template.
    let path = req.uri().path().to_string();

    let request_id = Uuid::new_v4();
    let span = info_span!("request", %request_id, method = %req.method(), %path);

    let mut response = next.run(req).instrument(span.clone()).await;
    let status = response.status().as_u16();
    let latency_ms = start.elapsed().as_millis() as u64;

    span.in_scope(|| match status {
        500..=599 => error!(status, latency_ms, "request failed"),
        400..=499 => warn!(status, latency_ms, "request rejected"),
        _ => info!(status, latency_ms, "request completed"),
    });

    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

/// Installs the global subscriber: a console layer filtered by `RUST_LOG`
/// and, when a log directory is configured, a daily rolling JSON file.
///
/// The returned guard flushes the file writer on drop and must be held for
/// the lifetime of the process.
pub fn init_tracing(config: &LogConfig) -> io::Result<Option<WorkerGuard>> {
    let console_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}=info,gradebook_auth=info,gradebook_db=info,tower_http=warn,axum::rejection=trace",
            env!("CARGO_CRATE_NAME")
        ))
    });

    let console_layer = if config.json {
        fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .boxed()
    } else {
        fmt::layer()
            .with_target(false)
            .with_file(true)
            .with_line_number(true)
            .compact()
            .boxed()
    };

    let (file_layer, guard) = match &config.directory {
        Some(dir) => {
            fs::create_dir_all(dir)?;
            let appender = RollingFileAppender::new(Rotation::DAILY, dir, "gradebook.json");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .json()
                .with_writer(writer)
                .with_current_span(true)
                .with_span_list(true)
                .with_filter(EnvFilter::new("info"));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console_layer.with_filter(console_filter))
        .with(file_layer)
        .init();

    Ok(guard)
}
