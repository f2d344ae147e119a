use serde::{Deserialize, Serialize};

use crate::household::repo_types::Household;

use super::repo_types::{Recipe, WeeklyPlan};

#[derive(Debug, Deserialize)]
pub struct ProposeRecipeRequest {
    pub recipe: Recipe,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CastVoteRequest {
    pub recipe_id: String,
}

#[derive(Debug, Serialize)]
pub struct CurrentWeekResponse {
    pub household: Option<Household>,
    pub plan: Option<WeeklyPlan>,
}
