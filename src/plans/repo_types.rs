use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanStatus {
    Selecting,
    Voting,
    Finalized,
}

/// A denormalized recipe snapshot. Proposals copy the full payload at
/// proposal time so plans and share links stay self-contained; later edits
/// to the saved recipe do not propagate. Ids are strings because the recipe
/// API issues numeric ids while AI-generated recipes issue opaque ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ready_in_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

/// Per-recipe yes-vote tally. `votes` has set semantics: a voter id appears
/// at most once.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VotedRecipe {
    pub recipe_id: String,
    pub votes: Vec<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPlan {
    pub id: Uuid,
    pub household_id: Uuid,
    /// Monday of the plan's week, ISO calendar date.
    pub week_start: Date,
    pub status: PlanStatus,
    pub proposed_recipes: Vec<Recipe>,
    pub voted_recipes: Vec<VotedRecipe>,
}

impl WeeklyPlan {
    pub fn new(household_id: Uuid, week_start: Date) -> Self {
        Self {
            id: Uuid::new_v4(),
            household_id,
            week_start,
            status: PlanStatus::Selecting,
            proposed_recipes: Vec::new(),
            voted_recipes: Vec::new(),
        }
    }

    pub fn vote_tally(&self, recipe_id: &str) -> usize {
        self.voted_recipes
            .iter()
            .find(|v| v.recipe_id == recipe_id)
            .map(|v| v.votes.len())
            .unwrap_or(0)
    }
}
