mod dto;
pub mod handlers;
pub mod link;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/plans/:id/share-link", get(handlers::share_link))
        .route("/plans/:id/deep-link", get(handlers::deep_link))
}
