//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - Where the entity can be patched, an update DTO with all-optional fields

pub mod course;
pub mod enrollment;
pub mod lab_exercise;
