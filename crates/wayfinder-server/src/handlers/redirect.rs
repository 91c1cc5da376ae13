use crate::error::Result;
use crate::state::AppState;
use axum::extract::State;
use axum::http::Uri;
use axum::response::{IntoResponse, Redirect, Response};
use tracing::{error, info};
use wayfinder_core::{parse_uri, relative_path};

/// Catch-all redirect handler.
///
/// Parse -> Resolve -> DeriveRelativePath -> Compose -> Respond. The
/// first failing step short-circuits into an error response; on
/// success the client gets a `303 See Other` at the composed URL.
pub async fn redirect_handler(State(state): State<AppState>, uri: Uri) -> Result<Response> {
    let path = uri.path();

    let (id, args) = parse_uri(path).map_err(|e| {
        error!(path = %path, error = %e, "failed to parse request path");
        e
    })?;

    let repo = state.resolver.get_repo(id).await.map_err(|e| {
        error!(path = %path, id = %id, error = %e, "failed to resolve repository");
        e
    })?;

    let rel_path = relative_path(id, &args).map_err(|e| {
        error!(path = %path, id = %id, error = %e, "failed to derive relative path");
        e
    })?;

    let location = state.template.compose(&repo, &rel_path).map_err(|e| {
        error!(path = %path, id = %id, repo = %repo, error = %e, "failed to compose data URL");
        e
    })?;

    info!(path = %path, id = %id, repo = %repo, url = %location, "redirect");

    Ok(Redirect::to(&location).into_response())
}
