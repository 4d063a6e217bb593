//! Repository for the `enrollments` table.

use labforge_core::types::{new_id, DbId};

use crate::models::enrollment::{CreateEnrollment, Enrollment};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, course_id, name, email, notes, progress_percent, created_at";

/// Provides create/list operations for enrollments scoped to a course.
pub struct EnrollmentRepo;

impl EnrollmentRepo {
    /// Insert a new enrollment with `progress_percent = 0`.
    ///
    /// A second enrollment for the same `(course_id, email)` fails with a
    /// unique violation on `uq_enrollment_course_email`; a missing course
    /// fails with a foreign-key violation.
    pub async fn create(
        pool: &DbPool,
        course_id: DbId,
        input: &CreateEnrollment,
    ) -> Result<Enrollment, sqlx::Error> {
        let query = format!(
            "INSERT INTO enrollments (id, course_id, name, email, notes)
             VALUES (?1, ?2, ?3, ?4, ?5)
             RETURNING {COLUMNS}"
        );
        let enrollment = sqlx::query_as::<_, Enrollment>(&query)
            .bind(new_id())
            .bind(course_id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.notes)
            .fetch_one(pool)
            .await?;
        tracing::debug!(
            course_id = %course_id,
            enrollment_id = %enrollment.id,
            "Inserted enrollment"
        );
        Ok(enrollment)
    }

    /// List all enrollments for a course in insertion order.
    pub async fn list_by_course(
        pool: &DbPool,
        course_id: DbId,
    ) -> Result<Vec<Enrollment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM enrollments WHERE course_id = ?1 ORDER BY created_at, rowid"
        );
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(course_id)
            .fetch_all(pool)
            .await
    }
}
