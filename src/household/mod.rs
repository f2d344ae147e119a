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
        .route("/household", post(handlers::create_household))
        .route("/household", get(handlers::get_household))
        .route("/household/join", post(handlers::join_household))
}
