use time::Date;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::AppError;
use crate::household;
use crate::household::repo_types::Household;
use crate::storage::{self, keys, KvStore};

use super::repo_types::{Recipe, WeeklyPlan};
use super::transition::{self, PlanEvent};
use super::week;

async fn load_plans(store: &dyn KvStore) -> Vec<WeeklyPlan> {
    storage::load(store, keys::WEEKLY_PLANS).await.unwrap_or_default()
}

async fn save_plans(store: &dyn KvStore, plans: &[WeeklyPlan]) -> Result<(), AppError> {
    storage::save(store, keys::WEEKLY_PLANS, &plans).await
}

/// Read-modify-write one plan inside the stored list.
async fn with_plan<F>(store: &dyn KvStore, plan_id: Uuid, f: F) -> Result<WeeklyPlan, AppError>
where
    F: FnOnce(&mut WeeklyPlan) -> Result<(), AppError>,
{
    let mut plans = load_plans(store).await;
    let plan = plans
        .iter_mut()
        .find(|p| p.id == plan_id)
        .ok_or(AppError::PlanNotFound)?;
    f(plan)?;
    let updated = plan.clone();
    save_plans(store, &plans).await?;
    Ok(updated)
}

/// Idempotent per (household, week start): returns the existing plan when one
/// is already stored, otherwise prepends a fresh `selecting` plan.
pub async fn create_weekly_plan(
    store: &dyn KvStore,
    household_id: Uuid,
    week_start: Date,
) -> Result<WeeklyPlan, AppError> {
    let mut plans = load_plans(store).await;
    if let Some(existing) = plans
        .iter()
        .find(|p| p.household_id == household_id && p.week_start == week_start)
    {
        return Ok(existing.clone());
    }
    let plan = WeeklyPlan::new(household_id, week_start);
    plans.insert(0, plan.clone());
    save_plans(store, &plans).await?;
    info!(plan_id = %plan.id, %week_start, "weekly plan created");
    Ok(plan)
}

pub async fn get_weekly_plan(store: &dyn KvStore, plan_id: Uuid) -> Result<WeeklyPlan, AppError> {
    load_plans(store)
        .await
        .into_iter()
        .find(|p| p.id == plan_id)
        .ok_or(AppError::PlanNotFound)
}

/// Household plus this week's plan. Returns `(None, None)` when no household
/// exists; never creates one implicitly.
pub async fn get_or_create_current_week(
    store: &dyn KvStore,
) -> Result<(Option<Household>, Option<WeeklyPlan>), AppError> {
    let Some(hh) = household::repo::get(store).await else {
        return Ok((None, None));
    };
    let plan = create_weekly_plan(store, hh.id, week::current_week_start()).await?;
    Ok((Some(hh), Some(plan)))
}

pub async fn add_proposed_recipe(
    store: &dyn KvStore,
    plan_id: Uuid,
    recipe: Recipe,
) -> Result<WeeklyPlan, AppError> {
    let plan = with_plan(store, plan_id, |plan| {
        transition::apply(plan, PlanEvent::RecipeProposed(recipe))
    })
    .await?;
    debug!(%plan_id, proposed = plan.proposed_recipes.len(), "recipe proposed");
    Ok(plan)
}

pub async fn record_vote(
    store: &dyn KvStore,
    plan_id: Uuid,
    recipe_id: &str,
    voter_id: Uuid,
) -> Result<WeeklyPlan, AppError> {
    with_plan(store, plan_id, |plan| {
        transition::apply(
            plan,
            PlanEvent::VoteCast {
                recipe_id: recipe_id.to_string(),
                voter_id,
            },
        )
    })
    .await
}

pub async fn finalize_plan(store: &dyn KvStore, plan_id: Uuid) -> Result<WeeklyPlan, AppError> {
    let plan = with_plan(store, plan_id, |plan| {
        transition::apply(plan, PlanEvent::PlanFinalized)
    })
    .await?;
    info!(%plan_id, "plan finalized");
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity;
    use crate::plans::repo_types::PlanStatus;
    use crate::storage::MemoryStore;
    use time::macros::date;

    fn recipe(id: &str) -> Recipe {
        Recipe {
            id: id.into(),
            title: format!("Recipe {id}"),
            image: None,
            ready_in_minutes: None,
            servings: None,
            source_url: None,
        }
    }

    #[tokio::test]
    async fn create_is_idempotent_per_household_and_week() {
        let store = MemoryStore::default();
        let hh = Uuid::new_v4();
        let week = date!(2024 - 01 - 08);
        let first = create_weekly_plan(&store, hh, week).await.expect("create");
        let second = create_weekly_plan(&store, hh, week).await.expect("create");
        assert_eq!(first.id, second.id);

        let other_week = create_weekly_plan(&store, hh, date!(2024 - 01 - 15))
            .await
            .expect("create");
        assert_ne!(first.id, other_week.id);
    }

    #[tokio::test]
    async fn new_plans_are_prepended() {
        let store = MemoryStore::default();
        let hh = Uuid::new_v4();
        create_weekly_plan(&store, hh, date!(2024 - 01 - 08))
            .await
            .expect("create");
        let newer = create_weekly_plan(&store, hh, date!(2024 - 01 - 15))
            .await
            .expect("create");
        let plans = load_plans(&store).await;
        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0].id, newer.id);
    }

    #[tokio::test]
    async fn unknown_plan_is_not_found() {
        let store = MemoryStore::default();
        let err = get_weekly_plan(&store, Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::PlanNotFound));
        let err = record_vote(&store, Uuid::new_v4(), "42", Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::PlanNotFound));
    }

    #[tokio::test]
    async fn current_week_without_household_is_none_pair() {
        let store = MemoryStore::default();
        let (hh, plan) = get_or_create_current_week(&store).await.expect("current");
        assert!(hh.is_none());
        assert!(plan.is_none());
        // No household slipped into storage as a side effect.
        assert!(household::repo::get(&store).await.is_none());
    }

    #[tokio::test]
    async fn current_week_creates_plan_for_existing_household() {
        let store = MemoryStore::default();
        let user = identity::repo::get_or_create(&store).await.expect("user");
        let hh = household::repo::create(&store, "Smiths", &user)
            .await
            .expect("household");
        let (found, plan) = get_or_create_current_week(&store).await.expect("current");
        let plan = plan.expect("plan");
        assert_eq!(found.expect("household").id, hh.id);
        assert_eq!(plan.household_id, hh.id);
        assert_eq!(plan.week_start, week::current_week_start());
        assert_eq!(plan.status, PlanStatus::Selecting);

        let (_, again) = get_or_create_current_week(&store).await.expect("current");
        assert_eq!(again.expect("plan").id, plan.id);
    }

    #[tokio::test]
    async fn proposals_persist_and_stay_idempotent() {
        let store = MemoryStore::default();
        let plan = create_weekly_plan(&store, Uuid::new_v4(), date!(2024 - 01 - 08))
            .await
            .expect("create");
        add_proposed_recipe(&store, plan.id, recipe("42"))
            .await
            .expect("propose");
        let updated = add_proposed_recipe(&store, plan.id, recipe("42"))
            .await
            .expect("repropose");
        assert_eq!(updated.proposed_recipes.len(), 1);

        let reloaded = get_weekly_plan(&store, plan.id).await.expect("reload");
        assert_eq!(reloaded.proposed_recipes.len(), 1);
        assert_eq!(reloaded.vote_tally("42"), 0);
    }

    #[tokio::test]
    async fn votes_are_a_set_and_flip_status_once() {
        let store = MemoryStore::default();
        let plan = create_weekly_plan(&store, Uuid::new_v4(), date!(2024 - 01 - 08))
            .await
            .expect("create");
        add_proposed_recipe(&store, plan.id, recipe("42"))
            .await
            .expect("propose");

        let voter = Uuid::new_v4();
        let after_first = record_vote(&store, plan.id, "42", voter)
            .await
            .expect("vote");
        assert_eq!(after_first.status, PlanStatus::Voting);

        let after_second = record_vote(&store, plan.id, "42", voter)
            .await
            .expect("revote");
        assert_eq!(after_second.status, PlanStatus::Voting);
        assert_eq!(after_second.vote_tally("42"), 1);
    }

    #[tokio::test]
    async fn finalize_persists_terminal_status() {
        let store = MemoryStore::default();
        let plan = create_weekly_plan(&store, Uuid::new_v4(), date!(2024 - 01 - 08))
            .await
            .expect("create");
        record_vote(&store, plan.id, "42", Uuid::new_v4())
            .await
            .expect("vote");
        finalize_plan(&store, plan.id).await.expect("finalize");
        let reloaded = get_weekly_plan(&store, plan.id).await.expect("reload");
        assert_eq!(reloaded.status, PlanStatus::Finalized);
    }
}
