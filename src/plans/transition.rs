use uuid::Uuid;

use crate::error::AppError;

use super::repo_types::{PlanStatus, Recipe, VotedRecipe, WeeklyPlan};

/// Everything that can happen to a weekly plan. Status only moves through
/// `apply`, so the `selecting -> voting -> finalized` machine lives in one
/// place instead of as side effects scattered across the repo.
#[derive(Debug, Clone)]
pub enum PlanEvent {
    RecipeProposed(Recipe),
    VoteCast { recipe_id: String, voter_id: Uuid },
    PlanFinalized,
}

pub fn apply(plan: &mut WeeklyPlan, event: PlanEvent) -> Result<(), AppError> {
    match event {
        PlanEvent::RecipeProposed(recipe) => {
            if plan.status == PlanStatus::Finalized {
                return Err(AppError::Validation(
                    "plan is finalized, proposals are closed".into(),
                ));
            }
            // Idempotent by recipe id: proposals are immutable snapshots.
            if !plan.proposed_recipes.iter().any(|r| r.id == recipe.id) {
                plan.proposed_recipes.push(recipe.clone());
            }
            if !plan.voted_recipes.iter().any(|v| v.recipe_id == recipe.id) {
                plan.voted_recipes.push(VotedRecipe {
                    recipe_id: recipe.id,
                    votes: Vec::new(),
                });
            }
            Ok(())
        }
        PlanEvent::VoteCast { recipe_id, voter_id } => {
            if plan.status == PlanStatus::Finalized {
                return Err(AppError::Validation(
                    "plan is finalized, voting is closed".into(),
                ));
            }
            match plan
                .voted_recipes
                .iter_mut()
                .find(|v| v.recipe_id == recipe_id)
            {
                Some(entry) => {
                    if !entry.votes.contains(&voter_id) {
                        entry.votes.push(voter_id);
                    }
                }
                None => plan.voted_recipes.push(VotedRecipe {
                    recipe_id,
                    votes: vec![voter_id],
                }),
            }
            if plan.status == PlanStatus::Selecting {
                plan.status = PlanStatus::Voting;
            }
            Ok(())
        }
        PlanEvent::PlanFinalized => match plan.status {
            PlanStatus::Selecting => Err(AppError::Validation(
                "plan has no votes yet, nothing to finalize".into(),
            )),
            PlanStatus::Voting => {
                plan.status = PlanStatus::Finalized;
                Ok(())
            }
            PlanStatus::Finalized => Ok(()),
        },
    }
}
