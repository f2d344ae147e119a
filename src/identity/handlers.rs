use axum::{extract::State, Json};
use tracing::instrument;

use crate::error::AppError;
use crate::state::AppState;

use super::repo;
use super::repo_types::DeviceUser;

#[instrument(skip(state))]
pub async fn me(State(state): State<AppState>) -> Result<Json<DeviceUser>, AppError> {
    let user = repo::get_or_create(state.store.as_ref()).await?;
    Ok(Json(user))
}
