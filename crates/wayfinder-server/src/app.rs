use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{favicon_handler, health_handler, redirect_handler};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route("/favicon.ico", get(favicon_handler))
            .fallback(get(redirect_handler))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
