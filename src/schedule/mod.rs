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
        .route("/plans/:id/schedule", post(handlers::schedule_meal))
        .route("/plans/:id/schedule", get(handlers::scheduled_meals))
}
