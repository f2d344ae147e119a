use axum::{
    extract::{Path, State},
    Json,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::AppError;
use crate::identity;
use crate::state::AppState;

use super::dto::{CastVoteRequest, CurrentWeekResponse, ProposeRecipeRequest};
use super::repo;
use super::repo_types::WeeklyPlan;

#[instrument(skip(state))]
pub async fn current_week(
    State(state): State<AppState>,
) -> Result<Json<CurrentWeekResponse>, AppError> {
    let (household, plan) = repo::get_or_create_current_week(state.store.as_ref()).await?;
    Ok(Json(CurrentWeekResponse { household, plan }))
}

#[instrument(skip(state))]
pub async fn get_plan(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<WeeklyPlan>, AppError> {
    let plan = repo::get_weekly_plan(state.store.as_ref(), id).await?;
    Ok(Json(plan))
}

#[instrument(skip(state, body))]
pub async fn propose_recipe(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<ProposeRecipeRequest>,
) -> Result<Json<WeeklyPlan>, AppError> {
    let plan = repo::add_proposed_recipe(state.store.as_ref(), id, body.recipe).await?;
    Ok(Json(plan))
}

/// Votes cast through the app use the device user as the voter identity.
#[instrument(skip(state, body))]
pub async fn cast_vote(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<CastVoteRequest>,
) -> Result<Json<WeeklyPlan>, AppError> {
    let voter = identity::repo::get_or_create(state.store.as_ref()).await?;
    let plan = repo::record_vote(state.store.as_ref(), id, &body.recipe_id, voter.id).await?;
    Ok(Json(plan))
}

#[instrument(skip(state))]
pub async fn finalize(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<WeeklyPlan>, AppError> {
    let plan = repo::finalize_plan(state.store.as_ref(), id).await?;
    Ok(Json(plan))
}
