use crate::state::AppState;
use axum::{routing::get, Router};

pub mod dto;
pub mod handlers;
pub mod repo;
pub mod repo_types;
pub mod services;

pub use repo_types::{Commute, CommuteMode, NewCommute};

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/Commute",
        get(handlers::list_for_employee)
            .post(handlers::add)
            .put(handlers::update)
            .delete(handlers::remove),
    )
}
