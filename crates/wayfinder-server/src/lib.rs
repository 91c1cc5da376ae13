//! HTTP surface of the Wayfinder redirect service.
//!
//! One catch-all route: parse an identifier out of the request path,
//! resolve its owning repository, compose the canonical data URL from
//! the configured template, answer `303 See Other`.

pub mod app;
pub mod error;
pub mod handlers;
pub mod state;
pub mod template;

pub use app::App;
pub use error::{AppError, Result};
pub use state::AppState;
pub use template::{DataUriTemplate, TemplateError};
