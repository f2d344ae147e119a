use axum::{
    extract::{Path, State},
    Json,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::AppError;
use crate::state::AppState;

use super::dto::ScheduleMealRequest;
use super::repo;
use super::repo_types::ScheduledMeal;

#[instrument(skip(state, body))]
pub async fn schedule_meal(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<ScheduleMealRequest>,
) -> Result<Json<Vec<ScheduledMeal>>, AppError> {
    let meal = ScheduledMeal {
        recipe_id: body.recipe_id,
        date: body.date,
        meal_type: body.meal_type,
    };
    let meals = repo::schedule_meal(state.store.as_ref(), id, meal).await?;
    Ok(Json(meals))
}

#[instrument(skip(state))]
pub async fn scheduled_meals(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<ScheduledMeal>>, AppError> {
    Ok(Json(repo::scheduled_meals(state.store.as_ref(), id).await))
}
