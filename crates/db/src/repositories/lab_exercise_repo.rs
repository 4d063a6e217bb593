//! Repository for the `lab_exercises` table.

use labforge_core::types::{new_id, DbId};

use crate::models::lab_exercise::{CreateLabExercise, LabExercise};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, course_id, title, summary, resource_type, resource_uri, estimated_minutes";

/// Provides create/list operations for lab exercises scoped to a course.
pub struct LabExerciseRepo;

impl LabExerciseRepo {
    /// Attach a new lab exercise to a course.
    pub async fn create(
        pool: &DbPool,
        course_id: DbId,
        input: &CreateLabExercise,
    ) -> Result<LabExercise, sqlx::Error> {
        let query = format!(
            "INSERT INTO lab_exercises
                 (id, course_id, title, summary, resource_type, resource_uri, estimated_minutes)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
             RETURNING {COLUMNS}"
        );
        let lab = sqlx::query_as::<_, LabExercise>(&query)
            .bind(new_id())
            .bind(course_id)
            .bind(&input.title)
            .bind(&input.summary)
            .bind(input.resource_type)
            .bind(&input.resource_uri)
            .bind(input.estimated_minutes)
            .fetch_one(pool)
            .await?;
        tracing::debug!(course_id = %course_id, lab_id = %lab.id, "Inserted lab exercise");
        Ok(lab)
    }

    /// List all lab exercises for a course in insertion order.
    pub async fn list_by_course(
        pool: &DbPool,
        course_id: DbId,
    ) -> Result<Vec<LabExercise>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM lab_exercises WHERE course_id = ?1 ORDER BY rowid");
        sqlx::query_as::<_, LabExercise>(&query)
            .bind(course_id)
            .fetch_all(pool)
            .await
    }
}
