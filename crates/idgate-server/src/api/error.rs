//! API error types and responses
//!
//! The login path deliberately exposes a single uniform unauthorized error:
//! a remote caller must not be able to distinguish a bad signature from an
//! expired assertion or a policy rejection. The underlying cause is logged
//! before the error is constructed. Unimplemented operations get a distinct
//! signal since they carry no security sensitivity.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Caller-visible API error
#[derive(Error, Debug)]
pub enum ApiError {
    /// Uniform authorization failure; carries no cause by design
    #[error("unauthorized caller")]
    Unauthorized,

    /// Operation exists on the surface but has no implementation yet
    #[error("method {0} not implemented")]
    Unimplemented(&'static str),
}

/// API error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            ApiError::Unimplemented(_) => (StatusCode::NOT_IMPLEMENTED, "UNIMPLEMENTED"),
        };

        let body = ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_is_opaque() {
        // The rendered message must never name a cause
        assert_eq!(ApiError::Unauthorized.to_string(), "unauthorized caller");
    }

    #[test]
    fn test_status_codes_distinct() {
        let unauthorized = ApiError::Unauthorized.into_response();
        let unimplemented = ApiError::Unimplemented("Register").into_response();

        assert_eq!(unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(unimplemented.status(), StatusCode::NOT_IMPLEMENTED);
    }
}
