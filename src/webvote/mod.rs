mod dto;
pub mod handlers;
pub mod repo;
pub mod repo_types;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/vote/:id", get(handlers::ballot))
        .route("/vote/:id", post(handlers::cast_ballot))
}
