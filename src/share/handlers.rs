use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::AppError;
use crate::household;
use crate::plans;
use crate::state::AppState;

use super::dto::{LinkResponse, ShareLinkQuery};
use super::link;

#[instrument(skip(state))]
pub async fn share_link(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<ShareLinkQuery>,
) -> Result<Json<LinkResponse>, AppError> {
    let household = household::repo::get(state.store.as_ref())
        .await
        .ok_or(AppError::NoHousehold)?;
    let plan = plans::repo::get_weekly_plan(state.store.as_ref(), id).await?;

    let cook = query
        .from
        .as_deref()
        .or_else(|| household.cook_name())
        .unwrap_or("Chef");
    let url = link::build_share_link(&state.config.web_vote_host, &plan, cook, &household.name)?;
    Ok(Json(LinkResponse { url }))
}

#[instrument(skip(state))]
pub async fn deep_link(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<LinkResponse>, AppError> {
    let household = household::repo::get(state.store.as_ref())
        .await
        .ok_or(AppError::NoHousehold)?;
    let plan = plans::repo::get_weekly_plan(state.store.as_ref(), id).await?;
    let url = link::build_deep_link(
        &state.config.deep_link_scheme,
        plan.id,
        &household.invite_code,
    );
    Ok(Json(LinkResponse { url }))
}
