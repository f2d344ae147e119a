use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// One swipe on the zero-install web ballot. Voters are identified by the
/// name they typed, not by a device user id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BallotVote {
    pub recipe_id: String,
    pub voter_name: String,
    pub liked: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub voted_at: OffsetDateTime,
}
