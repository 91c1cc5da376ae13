mod health;
mod redirect;

pub use health::{favicon_handler, health_handler};
pub use redirect::redirect_handler;
