//! A teacher may only record exam results for a course they lead.

use std::future::Future;

use thiserror::Error;

/// Lookup of the non-deleted courses a teacher leads.
pub trait CourseOwnership {
    type Error: std::error::Error + Send + Sync + 'static;

    fn owned_course_names(
        &self,
        teacher_email: &str,
    ) -> impl Future<Output = Result<Vec<String>, Self::Error>> + Send;
}

#[derive(Debug, Error)]
pub enum OwnershipError<E> {
    #[error("course not led by that teacher")]
    CourseNotOwned,
    #[error("course ownership lookup failed")]
    Store(#[source] E),
}

/// Succeeds only when `course_name` is, byte for byte, one of the teacher's
/// course names.
pub async fn authorize_exam_write<S>(
    store: &S,
    teacher_email: &str,
    course_name: &str,
) -> Result<(), OwnershipError<S::Error>>
where
    S: CourseOwnership + Sync,
{
    let owned = store
        .owned_course_names(teacher_email)
        .await
        .map_err(OwnershipError::Store)?;

    if owned.iter().any(|name| name == course_name) {
        Ok(())
    } else {
        Err(OwnershipError::CourseNotOwned)
    }
}
