//! Field-level validation helpers.
//!
//! Request DTOs declare their rules with the `validator` derive. This module
//! provides the custom checks those derives reference (http/https URLs) and
//! turns both rule failures and body decode failures into a flat list of
//! [`FieldViolation`]s, so every client error reports the offending fields
//! the same way.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Violation reporting
// ---------------------------------------------------------------------------

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub rule: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(
        field: impl Into<String>,
        rule: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            rule: rule.into(),
            message: message.into(),
        }
    }
}

/// Flatten `validator` errors into violations, one per failed rule, sorted by
/// field name so responses are deterministic.
pub fn violations_from(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut violations: Vec<FieldViolation> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = field.to_string();
            errs.iter().map(move |err| {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("failed '{}' check", err.code));
                FieldViolation::new(field.clone(), err.code.to_string(), message)
            })
        })
        .collect();
    violations.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.rule.cmp(&b.rule)));
    violations
}

/// Run the derived rules of `payload`, mapping failures to
/// [`CoreError::InvalidFields`].
pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), CoreError> {
    payload
        .validate()
        .map_err(|errors| CoreError::InvalidFields(violations_from(&errors)))
}

// ---------------------------------------------------------------------------
// Decode failures
// ---------------------------------------------------------------------------

/// Prefix axum puts in front of serde messages for JSON data errors.
const DECODE_PREFIX: &str = "Failed to deserialize the JSON body into the target type: ";

/// Build a violation from a JSON decode message.
///
/// Handles the shapes serde produces for typed payloads:
/// `missing field `x``, `unknown field `x`, ...` and `path: detail`
/// (path-qualified errors such as bad enum variants or wrong types).
/// Anything else is reported against the pseudo-field `body`.
pub fn violation_from_decode_error(message: &str) -> FieldViolation {
    let detail = message.strip_prefix(DECODE_PREFIX).unwrap_or(message).trim();
    let detail = strip_position(detail);

    if let Some(field) = backticked_after(detail, "missing field ") {
        return FieldViolation::new(field, "required", "field is required");
    }
    if let Some(field) = backticked_after(detail, "unknown field ") {
        return FieldViolation::new(field, "unknown_field", "field is not allowed");
    }
    if let Some((path, rest)) = detail.split_once(": ") {
        if is_field_path(path) {
            return FieldViolation::new(path, "type", rest);
        }
    }
    FieldViolation::new("body", "decode", detail)
}

/// Drop serde_json's trailing ` at line N column M`.
fn strip_position(detail: &str) -> &str {
    match detail.rfind(" at line ") {
        Some(idx) => &detail[..idx],
        None => detail,
    }
}

/// Return the backticked word following `marker`, if `detail` contains it.
fn backticked_after<'a>(detail: &'a str, marker: &str) -> Option<&'a str> {
    let rest = &detail[detail.find(marker)? + marker.len()..];
    let rest = rest.strip_prefix('`')?;
    let end = rest.find('`')?;
    Some(&rest[..end])
}

fn is_field_path(candidate: &str) -> bool {
    !candidate.is_empty()
        && candidate
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '[' | ']'))
}

// ---------------------------------------------------------------------------
// Custom rules
// ---------------------------------------------------------------------------

/// Require an absolute `http`/`https` URL with a host.
pub fn validate_http_url(value: &str) -> Result<(), ValidationError> {
    let valid = url::Url::parse(value)
        .map(|u| matches!(u.scheme(), "http" | "https") && u.host_str().is_some())
        .unwrap_or(false);
    if valid {
        Ok(())
    } else {
        Err(http_url_error())
    }
}

/// Apply [`validate_http_url`] to every entry of a URL list.
#[allow(clippy::ptr_arg)]
pub fn validate_http_urls(values: &Vec<String>) -> Result<(), ValidationError> {
    for (idx, value) in values.iter().enumerate() {
        if validate_http_url(value).is_err() {
            let mut err = http_url_error();
            err.message = Some(Cow::Owned(format!(
                "entry {idx} must be an absolute http(s) URL"
            )));
            return Err(err);
        }
    }
    Ok(())
}

fn http_url_error() -> ValidationError {
    let mut err = ValidationError::new("http_url");
    err.message = Some(Cow::Borrowed("must be an absolute http(s) URL"));
    err
}
