use crate::validation::FieldViolation;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed on {} field(s)", .0.len())]
    InvalidFields(Vec<FieldViolation>),

    #[error("Conflict: {0}")]
    Conflict(String),
}

impl CoreError {
    /// Shorthand for a missing course, the parent of every scoped resource.
    pub fn course_not_found(id: impl ToString) -> Self {
        Self::NotFound {
            entity: "Course",
            id: id.to_string(),
        }
    }
}
