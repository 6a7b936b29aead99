use anyhow::Context;
use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;

use gradebook_cli::admin::{NewAdmin, create_admin};
use gradebook_cli::seeder::{self, seed_sample_data};
use gradebook_config::DatabaseConfig;
use gradebook_db::{PgPool, init_db_pool, run_migrations};

#[derive(Parser)]
#[command(name = "gradebook-cli")]
#[command(about = "Gradebook CLI - Administrative tools for Gradebook", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an admin account
    CreateAdmin {
        /// Display name
        #[arg(short = 'n', long)]
        name: Option<String>,

        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Phone number
        #[arg(long)]
        phone: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Insert the sample admin, teacher, student, courses and exam
    Seed {
        /// Password given to every sample account
        #[arg(short = 'p', long, default_value = "password123")]
        password: String,
    },
    /// Apply pending database migrations
    Migrate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    let config = DatabaseConfig::from_env()?;
    let pool = init_db_pool(&config)
        .await
        .context("failed to connect to database")?;

    match cli.command {
        Commands::CreateAdmin {
            name,
            email,
            phone,
            password,
        } => handle_create_admin(&pool, name, email, phone, password).await,
        Commands::Seed { password } => handle_seed(&pool, &password).await,
        Commands::Migrate => {
            run_migrations(&pool).await?;
            println!("✅ Migrations applied");
            Ok(())
        }
    }
}

async fn handle_create_admin(
    pool: &PgPool,
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    password: Option<String>,
) -> anyhow::Result<()> {
    let name = match name {
        Some(name) => name,
        None => Input::new().with_prompt("Name").interact_text()?,
    };

    let email = match email {
        Some(email) => email,
        None => Input::new().with_prompt("Email address").interact_text()?,
    };

    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()?,
    };

    let admin = NewAdmin {
        name,
        email,
        phone,
        password,
    };

    create_admin(pool, &admin).await?;

    println!("\n✅ Admin created successfully!");
    println!("   Email: {}", admin.email);
    println!("   Name: {}", admin.name);
    Ok(())
}

async fn handle_seed(pool: &PgPool, password: &str) -> anyhow::Result<()> {
    let summary = seed_sample_data(pool, password).await?;

    println!("\n✅ Sample data ready");
    println!(
        "   Inserted {} people, {} courses, {} exams",
        summary.people, summary.courses, summary.exams
    );
    println!("   Admin:   {}", seeder::ADMIN.email);
    println!("   Teacher: {}", seeder::TEACHER.email);
    println!("   Student: {}", seeder::STUDENT.email);
    Ok(())
}
