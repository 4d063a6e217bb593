//! Lab exercise entity model and DTOs.

use labforge_core::types::DbId;
use labforge_core::validation::validate_http_url;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Kind of resource a lab points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum LabResourceType {
    Yaml,
    Terraform,
    Kubernetes,
    DockerCompose,
    Walkthrough,
    Link,
    Other,
}

impl LabResourceType {
    /// Return the stored string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Terraform => "terraform",
            Self::Kubernetes => "kubernetes",
            Self::DockerCompose => "docker_compose",
            Self::Walkthrough => "walkthrough",
            Self::Link => "link",
            Self::Other => "other",
        }
    }
}

/// A lab exercise row from the `lab_exercises` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LabExercise {
    pub id: DbId,
    pub course_id: DbId,
    pub title: String,
    pub summary: Option<String>,
    pub resource_type: LabResourceType,
    pub resource_uri: String,
    pub estimated_minutes: Option<i32>,
}

/// DTO for attaching a lab exercise to the course in the request path.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateLabExercise {
    #[validate(length(min = 3, max = 140, message = "must be between 3 and 140 characters"))]
    pub title: String,
    #[validate(length(max = 1000, message = "must be at most 1000 characters"))]
    pub summary: Option<String>,
    pub resource_type: LabResourceType,
    #[validate(custom(function = "validate_http_url"))]
    pub resource_uri: String,
    #[validate(range(min = 1, exclusive_max = 480, message = "must be between 1 and 479"))]
    pub estimated_minutes: Option<i32>,
}
