pub mod course;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /courses                                  list, create
/// /courses/{id}                             get, partial update, delete
/// /courses/{id}/enrollments                 list, enroll
/// /courses/{id}/labs                        list, attach
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/courses", course::router())
}
