use axum::{extract::State, http::StatusCode, Json};
use tracing::instrument;

use crate::error::AppError;
use crate::identity;
use crate::state::AppState;

use super::dto::{CreateHouseholdRequest, JoinHouseholdRequest};
use super::repo;
use super::repo_types::Household;

#[instrument(skip(state, body))]
pub async fn create_household(
    State(state): State<AppState>,
    Json(body): Json<CreateHouseholdRequest>,
) -> Result<(StatusCode, Json<Household>), AppError> {
    let user = identity::repo::get_or_create(state.store.as_ref()).await?;
    let household = repo::create(state.store.as_ref(), &body.name, &user).await?;
    Ok((StatusCode::CREATED, Json(household)))
}

#[instrument(skip(state, body))]
pub async fn join_household(
    State(state): State<AppState>,
    Json(body): Json<JoinHouseholdRequest>,
) -> Result<Json<Household>, AppError> {
    let user = identity::repo::get_or_create(state.store.as_ref()).await?;
    let household = repo::join(state.store.as_ref(), &body.invite_code, &user).await?;
    Ok(Json(household))
}

#[instrument(skip(state))]
pub async fn get_household(
    State(state): State<AppState>,
) -> Result<Json<Household>, AppError> {
    let household = repo::get(state.store.as_ref())
        .await
        .ok_or(AppError::NoHousehold)?;
    Ok(Json(household))
}
