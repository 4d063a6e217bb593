//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&DbPool` as the first argument.

pub mod course_repo;
pub mod enrollment_repo;
pub mod lab_exercise_repo;

pub use course_repo::CourseRepo;
pub use enrollment_repo::EnrollmentRepo;
pub use lab_exercise_repo::LabExerciseRepo;
