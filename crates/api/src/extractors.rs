//! Custom Axum extractors for validated bodies and course path ids.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use labforge_core::error::CoreError;
use labforge_core::types::DbId;
use labforge_core::validation::{validate_payload, violation_from_decode_error};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON body that has been decoded and then checked against its
/// `validator` rules.
///
/// Decode failures caused by the payload's content (missing fields, wrong
/// types, unknown enum values) are reported as 422 with one violation.
/// Syntax errors and a missing `Content-Type` are plain 400s. Body read
/// failures keep axum's status, so an oversized body is still a 413.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| match rejection {
                JsonRejection::JsonDataError(err) => AppError::Core(CoreError::InvalidFields(
                    vec![violation_from_decode_error(&err.body_text())],
                )),
                JsonRejection::BytesRejection(err) => {
                    AppError::Rejected(err.status(), err.body_text())
                }
                other => AppError::BadRequest(other.body_text()),
            })?;

        validate_payload(&value)?;
        Ok(Self(value))
    }
}

/// Course id taken from the `{id}` path segment.
///
/// A segment that is not a UUID cannot name any stored course, so it is
/// rejected as not found rather than as a bad request.
#[derive(Debug, Clone, Copy)]
pub struct CourseId(pub DbId);

impl<S> FromRequestParts<S> for CourseId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        let id = DbId::parse_str(&raw).map_err(|_| CoreError::course_not_found(&raw))?;
        Ok(Self(id))
    }
}
