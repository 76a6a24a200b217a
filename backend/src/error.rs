use actix_web::{HttpResponse, ResponseError};
use shared::ErrorResponse;
use std::fmt;

/// The client-facing error taxonomy.
///
/// `UpstreamSchema` is indistinguishable from `UpstreamUnavailable` on
/// the wire; the two are kept apart so the logs can tell a dead upstream
/// from one that changed its payload shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    UpstreamUnavailable,
    UpstreamSchema,
}

impl ErrorKind {
    pub fn status_code(&self) -> u16 {
        match self {
            ErrorKind::InvalidArgument => 400,
            ErrorKind::NotFound => 404,
            ErrorKind::UpstreamUnavailable | ErrorKind::UpstreamSchema => 500,
        }
    }
}

#[derive(Debug)]
pub struct ApiError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ApiError {
    pub fn new(kind: ErrorKind, message: &str) -> Self {
        Self {
            kind,
            message: message.to_string(),
        }
    }

    pub fn invalid_argument(message: &str) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    pub fn not_found(message: &str) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Upstream failure with a generic client message; the cause stays in
    /// the server log only.
    pub fn upstream_unavailable(message: &str) -> Self {
        Self::new(ErrorKind::UpstreamUnavailable, message)
    }

    pub fn upstream_schema(message: &str) -> Self {
        Self::new(ErrorKind::UpstreamSchema, message)
    }

    /// Classifies an upstream adapter error under a generic public
    /// message, logging the original cause.
    pub fn from_upstream(err: crate::third_party::client::UpstreamError, message: &str) -> Self {
        use crate::third_party::client::UpstreamError;
        match err {
            UpstreamError::Schema(cause) => {
                log::error!("upstream schema mismatch: {} ({})", cause, message);
                Self::upstream_schema(message)
            }
            other => {
                log::error!("upstream unavailable: {} ({})", other, message);
                Self::upstream_unavailable(message)
            }
        }
    }
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        let status = match actix_web::http::StatusCode::from_u16(self.kind.status_code()) {
            Ok(status) => status,
            Err(_) => actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
        };

        HttpResponse::build(status).json(ErrorResponse::new(self.message.clone()))
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl From<shared::SharedError> for ApiError {
    fn from(err: shared::SharedError) -> Self {
        use shared::SharedError;
        match err {
            SharedError::NotFound(message) => Self::not_found(&message),
            SharedError::BadRequest(message) => Self::invalid_argument(&message),
            SharedError::Validation(message)
            | SharedError::Conversion(message)
            | SharedError::MissingField(message) => Self::invalid_argument(&message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_invalid_argument_maps_to_400() {
        let error = ApiError::invalid_argument("City parameter is required");
        assert_eq!(error.kind, ErrorKind::InvalidArgument);
        assert_eq!(error.kind.status_code(), 400);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let error = ApiError::not_found("Prayer not found");
        assert_eq!(error.kind.status_code(), 404);
    }

    #[test]
    fn test_upstream_errors_map_to_500() {
        assert_eq!(
            ApiError::upstream_unavailable("Failed to fetch surahs")
                .kind
                .status_code(),
            500
        );
        assert_eq!(
            ApiError::upstream_schema("Failed to fetch surahs")
                .kind
                .status_code(),
            500
        );
    }

    #[test]
    fn test_error_response_body_is_error_envelope() {
        let error = ApiError::invalid_argument("City parameter is required");
        let response = error.error_response();
        assert_eq!(response.status().as_u16(), 400);

        let body = actix_web::body::to_bytes(response.into_body());
        let bytes = tokio_test::block_on(body).unwrap();
        assert_eq!(&bytes[..], br#"{"error":"City parameter is required"}"#);
    }

    #[test]
    fn test_from_shared_bad_request() {
        let shared_err = shared::SharedError::BadRequest("City parameter is required".to_string());
        let api_err: ApiError = shared_err.into();
        assert_eq!(api_err.kind, ErrorKind::InvalidArgument);
        assert_eq!(api_err.message, "City parameter is required");
    }

    #[test]
    fn test_from_shared_not_found() {
        let shared_err = shared::SharedError::NotFound("Prayer not found".to_string());
        let api_err: ApiError = shared_err.into();
        assert_eq!(api_err.kind, ErrorKind::NotFound);
    }

    #[test]
    fn test_display_format() {
        let error = ApiError::not_found("Prayer not found");
        assert_eq!(format!("{}", error), "NotFound: Prayer not found");
    }
}
