//! Repository for the `courses` table.

use labforge_core::types::{new_id, DbId};
use sqlx::types::Json;

use crate::models::course::{Course, CoursePublic, CreateCourse, UpdateCourse};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, overview, instructor, primary_video_url, supplemental_urls, \
     duration_minutes, difficulty, tags, prerequisites, category, status, created_at, updated_at";

/// Course columns plus live child counts.
///
/// Each child table is counted in its own grouped subquery, so a course row
/// is joined to at most one count per table. Callers append `WHERE` /
/// `ORDER BY`.
const PUBLIC_SELECT: &str = "SELECT
        c.id AS id, c.title AS title, c.overview AS overview, c.instructor AS instructor,
        c.primary_video_url AS primary_video_url, c.supplemental_urls AS supplemental_urls,
        c.duration_minutes AS duration_minutes, c.difficulty AS difficulty, c.tags AS tags,
        c.prerequisites AS prerequisites, c.category AS category, c.status AS status,
        c.created_at AS created_at, c.updated_at AS updated_at,
        COALESCE(e.n, 0) AS enrollment_count,
        COALESCE(l.n, 0) AS lab_count
     FROM courses c
     LEFT JOIN (SELECT course_id, COUNT(*) AS n FROM enrollments GROUP BY course_id) e
        ON e.course_id = c.id
     LEFT JOIN (SELECT course_id, COUNT(*) AS n FROM lab_exercises GROUP BY course_id) l
        ON l.course_id = c.id";

/// Provides CRUD operations for courses.
pub struct CourseRepo;

impl CourseRepo {
    /// Insert a new course, returning the created row.
    pub async fn create(pool: &DbPool, input: &CreateCourse) -> Result<Course, sqlx::Error> {
        let query = format!(
            "INSERT INTO courses (id, title, overview, instructor, primary_video_url,
                 supplemental_urls, duration_minutes, difficulty, tags, prerequisites,
                 category, status)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
             RETURNING {COLUMNS}"
        );
        let course = sqlx::query_as::<_, Course>(&query)
            .bind(new_id())
            .bind(&input.title)
            .bind(&input.overview)
            .bind(&input.instructor)
            .bind(&input.primary_video_url)
            .bind(Json(&input.supplemental_urls))
            .bind(input.duration_minutes)
            .bind(input.difficulty)
            .bind(Json(&input.tags))
            .bind(Json(&input.prerequisites))
            .bind(&input.category)
            .bind(input.status)
            .fetch_one(pool)
            .await?;
        tracing::debug!(course_id = %course.id, "Inserted course");
        Ok(course)
    }

    /// Find a course row by ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Course>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courses WHERE id = ?1");
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a course by ID together with its enrollment and lab counts.
    pub async fn find_public_by_id(
        pool: &DbPool,
        id: DbId,
    ) -> Result<Option<CoursePublic>, sqlx::Error> {
        let query = format!("{PUBLIC_SELECT} WHERE c.id = ?1");
        sqlx::query_as::<_, CoursePublic>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a course with the given ID exists.
    pub async fn exists(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM courses WHERE id = ?1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// List every course with its counts, oldest first, in a single query.
    pub async fn list_public(pool: &DbPool) -> Result<Vec<CoursePublic>, sqlx::Error> {
        let query = format!("{PUBLIC_SELECT} ORDER BY c.created_at, c.rowid");
        sqlx::query_as::<_, CoursePublic>(&query)
            .fetch_all(pool)
            .await
    }

    /// Apply the fields present in `input` and refresh `updated_at`.
    ///
    /// Runs as a single statement, so either every supplied field is written
    /// or none is. An empty `input` performs no write and returns the current
    /// row unchanged. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateCourse,
    ) -> Result<Option<Course>, sqlx::Error> {
        if input.is_empty() {
            return Self::find_by_id(pool, id).await;
        }

        let query = format!(
            "UPDATE courses SET
                title = COALESCE(?2, title),
                overview = CASE WHEN ?3 THEN ?4 ELSE overview END,
                instructor = COALESCE(?5, instructor),
                primary_video_url = COALESCE(?6, primary_video_url),
                supplemental_urls = COALESCE(?7, supplemental_urls),
                duration_minutes = COALESCE(?8, duration_minutes),
                difficulty = COALESCE(?9, difficulty),
                tags = COALESCE(?10, tags),
                prerequisites = COALESCE(?11, prerequisites),
                category = CASE WHEN ?12 THEN ?13 ELSE category END,
                status = COALESCE(?14, status),
                updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        let course = sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.overview.is_some())
            .bind(input.overview.clone().flatten())
            .bind(&input.instructor)
            .bind(&input.primary_video_url)
            .bind(input.supplemental_urls.as_ref().map(Json))
            .bind(input.duration_minutes)
            .bind(input.difficulty)
            .bind(input.tags.as_ref().map(Json))
            .bind(input.prerequisites.as_ref().map(Json))
            .bind(input.category.is_some())
            .bind(input.category.clone().flatten())
            .bind(input.status)
            .fetch_optional(pool)
            .await?;
        if let Some(course) = &course {
            tracing::debug!(course_id = %course.id, "Updated course");
        }
        Ok(course)
    }

    /// Delete a course and everything it owns. Returns `true` if the course
    /// existed.
    ///
    /// Children are removed with explicit statements inside the same
    /// transaction as the parent, so the cascade is all-or-nothing and does
    /// not depend on the connection's foreign-key setting.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let enrollments = sqlx::query("DELETE FROM enrollments WHERE course_id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        let labs = sqlx::query("DELETE FROM lab_exercises WHERE course_id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        let courses = sqlx::query("DELETE FROM courses WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;

        if courses > 0 {
            tracing::debug!(course_id = %id, enrollments, labs, "Deleted course with children");
        }
        Ok(courses > 0)
    }
}
