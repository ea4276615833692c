use crate::state::AppState;
use axum::{routing::post, Router};

pub mod dto;
pub mod handlers;
pub mod repo;
pub mod repo_types;
pub mod services;

pub use repo_types::{Employee, NewEmployee};

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/User",
        post(handlers::register)
            .put(handlers::update)
            .delete(handlers::remove),
    )
}
