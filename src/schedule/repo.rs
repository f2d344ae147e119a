use std::collections::HashMap;

use tracing::debug;
use uuid::Uuid;

use crate::error::AppError;
use crate::plans;
use crate::storage::{self, keys, KvStore};

use super::repo_types::ScheduledMeal;

type ScheduleMap = HashMap<Uuid, Vec<ScheduledMeal>>;

async fn load_map(store: &dyn KvStore) -> ScheduleMap {
    storage::load(store, keys::SCHEDULED_MEALS)
        .await
        .unwrap_or_default()
}

/// Assign a recipe to a (date, meal slot). Last write wins: any existing
/// entry for the same slot is dropped before the new one is appended.
/// Returns the plan's full updated list.
pub async fn schedule_meal(
    store: &dyn KvStore,
    plan_id: Uuid,
    meal: ScheduledMeal,
) -> Result<Vec<ScheduledMeal>, AppError> {
    plans::repo::get_weekly_plan(store, plan_id).await?;

    let mut map = load_map(store).await;
    let list = map.entry(plan_id).or_default();
    list.retain(|m| !(m.date == meal.date && m.meal_type == meal.meal_type));
    list.push(meal);
    let updated = list.clone();
    storage::save(store, keys::SCHEDULED_MEALS, &map).await?;
    debug!(%plan_id, meals = updated.len(), "meal scheduled");
    Ok(updated)
}

pub async fn scheduled_meals(store: &dyn KvStore, plan_id: Uuid) -> Vec<ScheduledMeal> {
    load_map(store).await.remove(&plan_id).unwrap_or_default()
}
