use thiserror::Error;
use wayfinder_core::RecordId;

/// Type alias for resolver results.
pub type Result<T> = std::result::Result<T, ResolverError>;

#[derive(Debug, Clone, Error)]
pub enum ResolverError {
    #[error("no record found for identifier {0}")]
    NotFound(RecordId),
    #[error("backend lookup failed: {0}")]
    Backend(String),
    #[error("resolver configuration is invalid: {0}")]
    Configuration(String),
    #[error("scheme '{0}' is already registered")]
    DuplicateScheme(String),
    #[error("no resolver registered for scheme '{0}'")]
    UnknownScheme(String),
}
