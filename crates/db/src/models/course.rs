//! Course entity model, lifecycle enums and DTOs.

use labforge_core::patch::{non_null, nullable};
use labforge_core::types::{DbId, Timestamp};
use labforge_core::validation::{validate_http_url, validate_http_urls};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Publication lifecycle of a course.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum CourseStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl CourseStatus {
    /// Return the stored string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Archived => "archived",
        }
    }
}

/// Target audience level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Return the stored string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

// ---------------------------------------------------------------------------
// Rows
// ---------------------------------------------------------------------------

/// A course row from the `courses` table.
///
/// List-valued columns are stored as JSON text and keep their order.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Course {
    pub id: DbId,
    pub title: String,
    pub overview: Option<String>,
    pub instructor: String,
    pub primary_video_url: String,
    pub supplemental_urls: Json<Vec<String>>,
    pub duration_minutes: i32,
    pub difficulty: Difficulty,
    pub tags: Json<Vec<String>>,
    pub prerequisites: Json<Vec<String>>,
    pub category: Option<String>,
    pub status: CourseStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Outbound course representation: the row plus child counts computed at
/// read time. Never stored.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CoursePublic {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub course: Course,
    pub enrollment_count: i64,
    pub lab_count: i64,
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// DTO for creating a new course.
///
/// Omitted optional fields default to: `difficulty = intermediate`,
/// `status = draft`, empty lists, no overview/category.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateCourse {
    #[validate(length(min = 3, max = 140, message = "must be between 3 and 140 characters"))]
    pub title: String,
    #[validate(length(max = 3000, message = "must be at most 3000 characters"))]
    pub overview: Option<String>,
    #[validate(length(min = 2, max = 80, message = "must be between 2 and 80 characters"))]
    pub instructor: String,
    #[validate(custom(function = "validate_http_url"))]
    pub primary_video_url: String,
    #[serde(default)]
    #[validate(custom(function = "validate_http_urls"))]
    pub supplemental_urls: Vec<String>,
    #[validate(range(min = 1, exclusive_max = 14400, message = "must be between 1 and 14399"))]
    pub duration_minutes: i32,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    #[validate(length(max = 80, message = "must be at most 80 characters"))]
    pub category: Option<String>,
    #[serde(default)]
    pub status: CourseStatus,
}

/// DTO for a partial course update. Only fields present in the body apply.
///
/// `overview` and `category` accept an explicit `null` to clear the value;
/// every other field rejects `null`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateCourse {
    #[serde(default, deserialize_with = "non_null")]
    #[validate(length(min = 3, max = 140, message = "must be between 3 and 140 characters"))]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[validate(length(max = 3000, message = "must be at most 3000 characters"))]
    pub overview: Option<Option<String>>,
    #[serde(default, deserialize_with = "non_null")]
    #[validate(length(min = 2, max = 80, message = "must be between 2 and 80 characters"))]
    pub instructor: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    #[validate(custom(function = "validate_http_url"))]
    pub primary_video_url: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    #[validate(custom(function = "validate_http_urls"))]
    pub supplemental_urls: Option<Vec<String>>,
    #[serde(default, deserialize_with = "non_null")]
    #[validate(range(min = 1, exclusive_max = 14400, message = "must be between 1 and 14399"))]
    pub duration_minutes: Option<i32>,
    #[serde(default, deserialize_with = "non_null")]
    pub difficulty: Option<Difficulty>,
    #[serde(default, deserialize_with = "non_null")]
    pub tags: Option<Vec<String>>,
    #[serde(default, deserialize_with = "non_null")]
    pub prerequisites: Option<Vec<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[validate(length(max = 80, message = "must be at most 80 characters"))]
    pub category: Option<Option<String>>,
    #[serde(default, deserialize_with = "non_null")]
    pub status: Option<CourseStatus>,
}

impl UpdateCourse {
    /// `true` when the request supplied no fields at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.overview.is_none()
            && self.instructor.is_none()
            && self.primary_video_url.is_none()
            && self.supplemental_urls.is_none()
            && self.duration_minutes.is_none()
            && self.difficulty.is_none()
            && self.tags.is_none()
            && self.prerequisites.is_none()
            && self.category.is_none()
            && self.status.is_none()
    }
}
