pub mod course;
pub mod enrollment;
pub mod lab_exercise;

use labforge_core::error::CoreError;
use labforge_core::types::DbId;
use labforge_db::repositories::CourseRepo;
use labforge_db::DbPool;

use crate::error::{AppError, AppResult};

/// Verify that a course exists, returning 404 if not.
///
/// Every course-scoped child operation checks its parent first so a missing
/// course is reported before the body is considered.
pub(crate) async fn ensure_course_exists(pool: &DbPool, id: DbId) -> AppResult<()> {
    if CourseRepo::exists(pool, id).await? {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::course_not_found(id)))
    }
}
