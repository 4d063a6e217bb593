//! Handlers for the `/courses` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use labforge_core::error::CoreError;
use labforge_db::models::course::{CoursePublic, CreateCourse, UpdateCourse};
use labforge_db::repositories::CourseRepo;

use crate::error::{AppError, AppResult};
use crate::extractors::{CourseId, ValidatedJson};
use crate::state::AppState;

/// GET /courses
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<CoursePublic>>> {
    let courses = CourseRepo::list_public(&state.pool).await?;
    Ok(Json(courses))
}

/// POST /courses
///
/// A fresh course has no children, so the counts are known without a
/// second query.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateCourse>,
) -> AppResult<(StatusCode, Json<CoursePublic>)> {
    let course = CourseRepo::create(&state.pool, &input).await?;

    tracing::info!(
        course_id = %course.id,
        status = course.status.as_str(),
        "Course created"
    );

    Ok((
        StatusCode::CREATED,
        Json(CoursePublic {
            course,
            enrollment_count: 0,
            lab_count: 0,
        }),
    ))
}

/// GET /courses/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    CourseId(id): CourseId,
) -> AppResult<Json<CoursePublic>> {
    let course = CourseRepo::find_public_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::course_not_found(id)))?;
    Ok(Json(course))
}

/// PATCH /courses/{id}
pub async fn update(
    State(state): State<AppState>,
    CourseId(id): CourseId,
    ValidatedJson(input): ValidatedJson<UpdateCourse>,
) -> AppResult<Json<CoursePublic>> {
    CourseRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::course_not_found(id)))?;

    if !input.is_empty() {
        tracing::info!(course_id = %id, "Course updated");
    }

    let course = CourseRepo::find_public_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::course_not_found(id)))?;
    Ok(Json(course))
}

/// DELETE /courses/{id}
pub async fn delete(
    State(state): State<AppState>,
    CourseId(id): CourseId,
) -> AppResult<StatusCode> {
    if CourseRepo::delete(&state.pool, id).await? {
        tracing::info!(course_id = %id, "Course deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::course_not_found(id)))
    }
}
