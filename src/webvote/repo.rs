use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use crate::error::AppError;
use crate::plans;
use crate::storage::{self, keys, KvStore};

use super::repo_types::BallotVote;

/// Where a ballot lands. The web client and the app both target this seam,
/// so swapping the disjoint browser-style store for the household tally is a
/// wiring change, not a rewrite.
#[async_trait]
pub trait VoteRepository: Send + Sync {
    async fn record(&self, plan_id: Uuid, vote: BallotVote) -> Result<(), AppError>;
    /// Yes-votes for one recipe within a plan.
    async fn yes_votes(&self, plan_id: Uuid, recipe_id: &str) -> usize;
}

type BallotMap = HashMap<Uuid, Vec<BallotVote>>;

/// The web client's own storage: a per-plan ballot list that is never folded
/// back into the household plan tally.
pub struct BallotStore {
    store: Arc<dyn KvStore>,
}

impl BallotStore {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    async fn load_map(&self) -> BallotMap {
        storage::load(self.store.as_ref(), keys::WEB_VOTES)
            .await
            .unwrap_or_default()
    }

    pub async fn votes_for(&self, plan_id: Uuid) -> Vec<BallotVote> {
        self.load_map().await.remove(&plan_id).unwrap_or_default()
    }
}

#[async_trait]
impl VoteRepository for BallotStore {
    async fn record(&self, plan_id: Uuid, vote: BallotVote) -> Result<(), AppError> {
        let mut map = self.load_map().await;
        map.entry(plan_id).or_default().push(vote);
        storage::save(self.store.as_ref(), keys::WEB_VOTES, &map).await?;
        debug!(%plan_id, "ballot recorded");
        Ok(())
    }

    async fn yes_votes(&self, plan_id: Uuid, recipe_id: &str) -> usize {
        self.votes_for(plan_id)
            .await
            .iter()
            .filter(|v| v.liked && v.recipe_id == recipe_id)
            .count()
    }
}

/// The reconciliation path: ballots feed the household plan's vote tally.
/// Web voters have no device user id, so each distinct voter name is pinned
/// to a stable generated id in its own blob.
pub struct PlanTally {
    store: Arc<dyn KvStore>,
}

impl PlanTally {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    async fn voter_id_for(&self, name: &str) -> Result<Uuid, AppError> {
        let mut voters: HashMap<String, Uuid> =
            storage::load(self.store.as_ref(), keys::WEB_VOTERS)
                .await
                .unwrap_or_default();
        if let Some(id) = voters.get(name) {
            return Ok(*id);
        }
        let id = Uuid::new_v4();
        voters.insert(name.to_string(), id);
        storage::save(self.store.as_ref(), keys::WEB_VOTERS, &voters).await?;
        Ok(id)
    }
}

#[async_trait]
impl VoteRepository for PlanTally {
    async fn record(&self, plan_id: Uuid, vote: BallotVote) -> Result<(), AppError> {
        // A "no" swipe is not a vote in the plan model.
        if !vote.liked {
            return Ok(());
        }
        let voter_id = self.voter_id_for(&vote.voter_name).await?;
        plans::repo::record_vote(self.store.as_ref(), plan_id, &vote.recipe_id, voter_id)
            .await?;
        Ok(())
    }

    async fn yes_votes(&self, plan_id: Uuid, recipe_id: &str) -> usize {
        match plans::repo::get_weekly_plan(self.store.as_ref(), plan_id).await {
            Ok(plan) => plan.vote_tally(recipe_id),
            Err(_) => 0,
        }
    }
}
