//! Route definitions for the `/courses` resource.
//!
//! Enrollments and labs are always addressed through their parent course.

use axum::routing::get;
use axum::Router;

use crate::handlers::{course, enrollment, lab_exercise};
use crate::state::AppState;

/// Routes mounted at `/courses`.
///
/// ```text
/// GET    /                    -> list
/// POST   /                    -> create
/// GET    /{id}                -> get_by_id
/// PATCH  /{id}                -> update
/// DELETE /{id}                -> delete
///
/// GET    /{id}/enrollments    -> list_by_course
/// POST   /{id}/enrollments    -> create
///
/// GET    /{id}/labs           -> list_by_course
/// POST   /{id}/labs           -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(course::list).post(course::create))
        .route(
            "/{id}",
            get(course::get_by_id)
                .patch(course::update)
                .delete(course::delete),
        )
        .route(
            "/{id}/enrollments",
            get(enrollment::list_by_course).post(enrollment::create),
        )
        .route(
            "/{id}/labs",
            get(lab_exercise::list_by_course).post(lab_exercise::create),
        )
}
