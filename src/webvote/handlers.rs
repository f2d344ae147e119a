use axum::{
    extract::{Path, Query, State},
    Json,
};
use time::OffsetDateTime;
use tracing::{instrument, warn};
use uuid::Uuid;

use crate::error::AppError;
use crate::plans::repo_types::Recipe;
use crate::share::link;
use crate::state::AppState;

use super::dto::{BallotListResponse, BallotQuery, BallotResponse, CastBallotRequest};
use super::repo::{BallotStore, PlanTally, VoteRepository};
use super::repo_types::BallotVote;

/// The fixed ballot served when the share payload is absent or corrupt,
/// mirroring the web client's demo recipes.
fn demo_recipes() -> Vec<Recipe> {
    let demo = |id: &str, title: &str, minutes: u32| Recipe {
        id: id.into(),
        title: title.into(),
        image: None,
        ready_in_minutes: Some(minutes),
        servings: Some(4),
        source_url: None,
    };
    vec![
        demo("demo-1", "One-Pan Lemon Chicken", 35),
        demo("demo-2", "Weeknight Veggie Stir-Fry", 20),
        demo("demo-3", "Creamy Tomato Rigatoni", 30),
    ]
}

/// Decode the ballot for a share payload. The demo list is served only when
/// the payload is absent or unreadable; a valid-but-empty list stays empty.
pub fn load_ballot(payload: Option<&str>) -> (Vec<Recipe>, bool) {
    match payload {
        None => (demo_recipes(), true),
        Some(raw) => match link::decode_recipes(raw) {
            Some(recipes) => (recipes, false),
            None => {
                warn!("share payload unreadable, serving demo ballot");
                (demo_recipes(), true)
            }
        },
    }
}

#[instrument(skip(query))]
pub async fn ballot(
    Path(_id): Path<Uuid>,
    Query(query): Query<BallotQuery>,
) -> Result<Json<BallotResponse>, AppError> {
    let (recipes, demo) = load_ballot(query.recipes.as_deref());
    Ok(Json(BallotResponse { recipes, demo }))
}

#[instrument(skip(state, body))]
pub async fn cast_ballot(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<CastBallotRequest>,
) -> Result<Json<BallotListResponse>, AppError> {
    let voter_name = body.voter_name.trim();
    if voter_name.is_empty() {
        return Err(AppError::Validation("voter name is required".into()));
    }
    let vote = BallotVote {
        recipe_id: body.recipe_id,
        voter_name: voter_name.to_string(),
        liked: body.liked,
        voted_at: OffsetDateTime::now_utc(),
    };
    // Ballots always land in the web store. They stay disjoint from the
    // household tally unless fold_web_votes routes them through PlanTally too.
    let ballots = BallotStore::new(state.store.clone());
    ballots.record(id, vote.clone()).await?;
    if state.config.fold_web_votes {
        // The ballot is already persisted, so folding is best-effort: an
        // unknown or finalized plan must not turn the cast into an error.
        let tally: Box<dyn VoteRepository> = Box::new(PlanTally::new(state.store.clone()));
        if let Err(e) = tally.record(id, vote).await {
            warn!(plan_id = %id, error = %e, "ballot not folded into plan tally");
        }
    }
    let votes = ballots.votes_for(id).await;
    Ok(Json(BallotListResponse { votes }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64ct::{Base64, Encoding};

    #[test]
    fn missing_payload_serves_the_demo_ballot() {
        let (recipes, demo) = load_ballot(None);
        assert!(demo);
        assert_eq!(recipes.len(), 3);
        assert!(recipes.iter().all(|r| r.id.starts_with("demo-")));
    }

    #[test]
    fn corrupt_payload_serves_the_demo_ballot() {
        let (_, demo) = load_ballot(Some("%%%"));
        assert!(demo);
        let not_a_list = Base64::encode_string(b"{\"nope\":true}");
        let (_, demo) = load_ballot(Some(&not_a_list));
        assert!(demo);
    }

    #[test]
    fn empty_but_valid_payload_stays_empty() {
        let empty = Base64::encode_string(b"[]");
        let (recipes, demo) = load_ballot(Some(&empty));
        assert!(!demo);
        assert!(recipes.is_empty());
    }

    #[test]
    fn valid_payload_serves_the_shared_recipes() {
        let recipes = vec![Recipe {
            id: "42".into(),
            title: "Pad Thai".into(),
            image: None,
            ready_in_minutes: None,
            servings: None,
            source_url: None,
        }];
        let payload = link::encode_recipes(&recipes).expect("encode");
        let (decoded, demo) = load_ballot(Some(&payload));
        assert!(!demo);
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].id, "42");
    }

    #[tokio::test]
    async fn cast_ballot_rejects_blank_names() {
        let state = AppState::fake();
        let err = cast_ballot(
            State(state),
            Path(Uuid::new_v4()),
            Json(CastBallotRequest {
                recipe_id: "42".into(),
                voter_name: "  ".into(),
                liked: true,
            }),
        )
        .await
        .map(|_| ())
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    fn folding_state() -> AppState {
        use crate::config::AppConfig;
        use crate::storage::MemoryStore;
        use std::sync::Arc;

        let config = Arc::new(AppConfig {
            data_dir: std::env::temp_dir(),
            web_vote_host: "https://vote.test".into(),
            deep_link_scheme: "mealswipe".into(),
            fold_web_votes: true,
        });
        let store = Arc::new(MemoryStore::default()) as Arc<dyn crate::storage::KvStore>;
        AppState::from_parts(store, config)
    }

    #[tokio::test]
    async fn fold_flag_routes_likes_into_the_plan_tally() {
        use crate::plans::repo::{create_weekly_plan, get_weekly_plan};
        use time::macros::date;

        let state = folding_state();
        let store = state.store.clone();
        let plan = create_weekly_plan(store.as_ref(), Uuid::new_v4(), date!(2024 - 01 - 08))
            .await
            .expect("plan");
        cast_ballot(
            State(state),
            Path(plan.id),
            Json(CastBallotRequest {
                recipe_id: "42".into(),
                voter_name: "Robin".into(),
                liked: true,
            }),
        )
        .await
        .expect("cast");

        let reloaded = get_weekly_plan(store.as_ref(), plan.id).await.expect("plan");
        assert_eq!(reloaded.vote_tally("42"), 1);
    }

    #[tokio::test]
    async fn fold_with_unknown_plan_still_records_the_ballot() {
        use crate::plans::repo::get_weekly_plan;

        let state = folding_state();
        let store = state.store.clone();
        let plan_id = Uuid::new_v4();
        // No plan exists: the fold leg cannot land, the ballot still must.
        let Json(resp) = cast_ballot(
            State(state),
            Path(plan_id),
            Json(CastBallotRequest {
                recipe_id: "42".into(),
                voter_name: "Robin".into(),
                liked: true,
            }),
        )
        .await
        .expect("cast");
        assert_eq!(resp.votes.len(), 1);

        let ballots = BallotStore::new(store.clone());
        assert_eq!(ballots.votes_for(plan_id).await.len(), 1);
        let err = get_weekly_plan(store.as_ref(), plan_id).await.unwrap_err();
        assert!(matches!(err, AppError::PlanNotFound));
    }

    #[tokio::test]
    async fn cast_ballot_returns_the_plan_ballot_list() {
        let state = AppState::fake();
        let plan_id = Uuid::new_v4();
        for (voter, liked) in [("Robin", true), ("Kim", false)] {
            cast_ballot(
                State(state.clone()),
                Path(plan_id),
                Json(CastBallotRequest {
                    recipe_id: "42".into(),
                    voter_name: voter.into(),
                    liked,
                }),
            )
            .await
            .expect("cast");
        }
        let Json(resp) = cast_ballot(
            State(state),
            Path(plan_id),
            Json(CastBallotRequest {
                recipe_id: "7".into(),
                voter_name: "Robin".into(),
                liked: true,
            }),
        )
        .await
        .expect("cast");
        assert_eq!(resp.votes.len(), 3);
        assert!(resp.votes.iter().any(|v| !v.liked));
    }
}
