use thiserror::Error;

/// Type alias for results of identifier parsing and path derivation.
pub type Result<T> = std::result::Result<T, UriError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UriError {
    #[error("path does not contain a valid identifier: '{0}'")]
    MalformedIdentifier(String),
    #[error("no path-derivation rule for qualifier: '{0}'")]
    UnsupportedQualifier(String),
}
