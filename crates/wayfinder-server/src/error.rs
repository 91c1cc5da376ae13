use crate::template::TemplateError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use wayfinder_core::UriError;
use wayfinder_resolver::ResolverError;

pub type Result<T> = std::result::Result<T, AppError>;

/// Per-request failure, mapped onto an HTTP status.
///
/// Every step of the redirect pipeline converts into this at the `?`
/// seam; the first failure short-circuits the remaining steps.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Uri(#[from] UriError),
    #[error(transparent)]
    Resolver(#[from] ResolverError),
    #[error(transparent)]
    Template(#[from] TemplateError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Uri(UriError::MalformedIdentifier(_)) => StatusCode::BAD_REQUEST,
            AppError::Resolver(ResolverError::NotFound(_)) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Details were already logged with request context; the client
        // only sees the status phrase.
        let status = self.status();
        let phrase = status.canonical_reason().unwrap_or("error");
        (status, phrase).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfinder_core::RecordId;

    #[test]
    fn malformed_identifier_is_bad_request() {
        let err = AppError::from(UriError::MalformedIdentifier("/nope".to_string()));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unsupported_qualifier_is_internal_error() {
        let err = AppError::from(UriError::UnsupportedQualifier("display".to_string()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn missing_record_is_not_found() {
        let err = AppError::from(ResolverError::NotFound(RecordId::new(1)));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn backend_fault_is_internal_error() {
        let err = AppError::from(ResolverError::Backend("connection reset".to_string()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn template_fault_is_internal_error() {
        let err = AppError::from(TemplateError::Expansion("bad".to_string()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
