use serde::{Deserialize, Serialize};

use crate::plans::repo_types::Recipe;

use super::repo_types::BallotVote;

#[derive(Debug, Deserialize)]
pub struct BallotQuery {
    /// base64(JSON(Recipe[])) from the share link.
    pub recipes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BallotResponse {
    pub recipes: Vec<Recipe>,
    /// True when the share payload was absent or unreadable and the fixed
    /// demo ballot was served instead.
    pub demo: bool,
}

fn default_liked() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CastBallotRequest {
    pub recipe_id: String,
    pub voter_name: String,
    #[serde(default = "default_liked")]
    pub liked: bool,
}

#[derive(Debug, Serialize)]
pub struct BallotListResponse {
    pub votes: Vec<BallotVote>,
}
