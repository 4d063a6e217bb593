//! Handlers for lab exercises nested under `/courses/{id}/labs`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use labforge_db::models::lab_exercise::{CreateLabExercise, LabExercise};
use labforge_db::repositories::LabExerciseRepo;

use crate::error::AppResult;
use crate::extractors::{CourseId, ValidatedJson};
use crate::handlers::ensure_course_exists;
use crate::state::AppState;

/// POST /courses/{id}/labs
pub async fn create(
    State(state): State<AppState>,
    CourseId(course_id): CourseId,
    ValidatedJson(input): ValidatedJson<CreateLabExercise>,
) -> AppResult<(StatusCode, Json<LabExercise>)> {
    ensure_course_exists(&state.pool, course_id).await?;

    let lab = LabExerciseRepo::create(&state.pool, course_id, &input).await?;

    tracing::info!(
        course_id = %course_id,
        lab_id = %lab.id,
        resource_type = lab.resource_type.as_str(),
        "Lab exercise attached"
    );

    Ok((StatusCode::CREATED, Json(lab)))
}

/// GET /courses/{id}/labs
pub async fn list_by_course(
    State(state): State<AppState>,
    CourseId(course_id): CourseId,
) -> AppResult<Json<Vec<LabExercise>>> {
    ensure_course_exists(&state.pool, course_id).await?;
    let labs = LabExerciseRepo::list_by_course(&state.pool, course_id).await?;
    Ok(Json(labs))
}
