//! Enrollment entity model and DTOs.

use labforge_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// An enrollment row from the `enrollments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Enrollment {
    pub id: DbId,
    pub course_id: DbId,
    pub name: String,
    pub email: String,
    pub notes: Option<String>,
    pub progress_percent: i32,
    pub created_at: Timestamp,
}

/// DTO for enrolling a learner. The course comes from the request path and
/// progress always starts at 0.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateEnrollment {
    #[validate(length(min = 2, max = 80, message = "must be between 2 and 80 characters"))]
    pub name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(max = 500, message = "must be at most 500 characters"))]
    pub notes: Option<String>,
}
