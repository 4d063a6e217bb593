//! Deserialization helpers for partial-update (PATCH) payloads.
//!
//! A PATCH body distinguishes three states per field: absent, explicit
//! `null`, and a value. Plain `Option<T>` collapses the first two, so:
//!
//! - non-nullable columns use [`non_null`]: absent stays `None`, `null` is a
//!   decode error, a value becomes `Some(v)`;
//! - nullable columns use [`nullable`] on an `Option<Option<T>>`: absent stays
//!   `None`, `null` becomes `Some(None)` (clear), a value becomes `Some(Some(v))`.
//!
//! Both must be combined with `#[serde(default)]` so absent fields are `None`.

use serde::{Deserialize, Deserializer};

/// Reject explicit `null` for a field whose column cannot be cleared.
pub fn non_null<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Keep explicit `null` apart from an absent field.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
