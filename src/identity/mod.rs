pub mod handlers;
pub mod repo;
pub mod repo_types;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/me", get(handlers::me))
}
