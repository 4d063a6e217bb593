//! Handlers for enrollments nested under `/courses/{id}/enrollments`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use labforge_core::error::CoreError;
use labforge_db::models::enrollment::{CreateEnrollment, Enrollment};
use labforge_db::repositories::EnrollmentRepo;

use crate::error::{AppError, AppResult};
use crate::extractors::{CourseId, ValidatedJson};
use crate::handlers::ensure_course_exists;
use crate::state::AppState;

/// POST /courses/{id}/enrollments
///
/// The `(course_id, email)` unique index decides duplicates, so two racing
/// requests for the same learner cannot both succeed.
pub async fn create(
    State(state): State<AppState>,
    CourseId(course_id): CourseId,
    ValidatedJson(input): ValidatedJson<CreateEnrollment>,
) -> AppResult<(StatusCode, Json<Enrollment>)> {
    ensure_course_exists(&state.pool, course_id).await?;

    let enrollment = EnrollmentRepo::create(&state.pool, course_id, &input)
        .await
        .map_err(|err| match err {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                AppError::Core(CoreError::Conflict(format!(
                    "Learner {} is already enrolled in this course",
                    input.email
                )))
            }
            other => AppError::Database(other),
        })?;

    tracing::info!(
        course_id = %course_id,
        enrollment_id = %enrollment.id,
        "Learner enrolled"
    );

    Ok((StatusCode::CREATED, Json(enrollment)))
}

/// GET /courses/{id}/enrollments
pub async fn list_by_course(
    State(state): State<AppState>,
    CourseId(course_id): CourseId,
) -> AppResult<Json<Vec<Enrollment>>> {
    ensure_course_exists(&state.pool, course_id).await?;
    let enrollments = EnrollmentRepo::list_by_course(&state.pool, course_id).await?;
    Ok(Json(enrollments))
}
