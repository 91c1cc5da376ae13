//! Core types for the Wayfinder redirect service.
//!
//! This crate provides the identifier type, the request-path grammar,
//! and the relative-path derivation shared by the resolver backends and
//! the HTTP server.

pub mod error;
pub mod id;
pub mod uri;

pub use error::{Result, UriError};
pub use id::RecordId;
pub use uri::{parse_uri, relative_path, AltGeometry, Qualifier, UriArgs};
