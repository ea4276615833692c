use crate::state::AppState;
use axum::{routing::post, Router};

pub mod claims;
pub mod dto;
pub(crate) mod extractors;
pub mod handlers;
pub mod jwt;

pub use claims::Claims;
pub use extractors::AuthUser;

pub fn router() -> Router<AppState> {
    Router::new().route("/Authentication", post(handlers::login))
}
