mod dto;
pub mod handlers;
pub mod repo;
pub mod repo_types;
pub mod transition;
pub mod week;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/plans/current", post(handlers::current_week))
        .route("/plans/:id", get(handlers::get_plan))
        .route("/plans/:id/recipes", post(handlers::propose_recipe))
        .route("/plans/:id/votes", post(handlers::cast_vote))
        .route("/plans/:id/finalize", post(handlers::finalize))
}
