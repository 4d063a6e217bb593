//! Domain primitives shared by the LabForge database and API crates.
//!
//! Holds the domain error type, id/timestamp aliases, reusable field
//! validation functions and the deserialization helpers used by partial
//! update payloads.

pub mod error;
pub mod patch;
pub mod types;
pub mod validation;
