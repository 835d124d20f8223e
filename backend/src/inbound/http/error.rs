//! HTTP adapter mapping for domain errors.
//!
//! Keeps the domain error type HTTP-agnostic while letting Actix handlers
//! turn domain failures into consistent JSON envelopes and status codes.
//! Internal errors are redacted so implementation details never reach
//! clients; the trace identifier survives for correlation.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::error;
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode};
use crate::middleware::{TRACE_ID_HEADER, TraceId};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// JSON envelope returned for every failed request.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    /// Stable machine-readable error code.
    #[schema(example = "not_found")]
    pub code: ErrorCode,
    /// Human-readable message.
    #[schema(example = "no posting with id 42")]
    pub message: String,
    /// Trace identifier for log correlation, when one is in scope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
    /// Field-level details for validation failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub details: Option<Value>,
}

impl ErrorBody {
    fn from_error(err: &Error) -> Self {
        Self {
            code: err.code(),
            message: err.message().to_owned(),
            trace_id: TraceId::current().map(|id| id.to_string()),
            details: err.details().cloned(),
        }
    }

    fn redacted_if_internal(err: &Error) -> Self {
        let mut body = Self::from_error(err);
        if matches!(err.code(), ErrorCode::InternalError) {
            body.message = "Internal server error".to_owned();
            body.details = None;
        }
        body
    }
}

const fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let body = ErrorBody::redacted_if_internal(self);
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = &body.trace_id {
            builder.insert_header((TRACE_ID_HEADER, id.clone()));
        }
        builder.json(body)
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        // Do not leak implementation details to clients.
        error!(error = %err, "actix error promoted to domain error");
        Self::internal("Internal server error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
    #[case(Error::unauthorized("who"), StatusCode::UNAUTHORIZED)]
    #[case(Error::forbidden("no"), StatusCode::FORBIDDEN)]
    #[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
    #[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
    fn codes_map_onto_status_codes(#[case] err: Error, #[case] expected: StatusCode) {
        assert_eq!(err.status_code(), expected);
    }

    #[test]
    fn internal_messages_are_redacted() {
        let err = Error::internal("connection string leaked").with_details(json!({"dsn": "x"}));
        let body = ErrorBody::redacted_if_internal(&err);
        assert_eq!(body.message, "Internal server error");
        assert!(body.details.is_none());
    }

    #[test]
    fn validation_details_survive_the_envelope() {
        let err = Error::invalid_request("title must not be empty")
            .with_details(json!({"field": "title"}));
        let body = ErrorBody::redacted_if_internal(&err);
        assert_eq!(body.details, Some(json!({"field": "title"})));
    }
}
