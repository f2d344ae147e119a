use anyhow::Context;
use base64ct::{Base64, Encoding};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use uuid::Uuid;

use crate::error::AppError;
use crate::plans::repo_types::{Recipe, WeeklyPlan};

/// Proposals serialized as base64(JSON(Recipe[])). The payload is
/// self-contained by design: the web ballot has no recipe store to
/// dereference ids against. No signature, expiry, or size cap.
pub fn encode_recipes(recipes: &[Recipe]) -> Result<String, AppError> {
    let json = serde_json::to_vec(recipes).context("serialize proposals")?;
    Ok(Base64::encode_string(&json))
}

/// Inverse of `encode_recipes`. Corrupt payloads yield `None` so callers can
/// fall back to the demo ballot.
pub fn decode_recipes(payload: &str) -> Option<Vec<Recipe>> {
    let json = Base64::decode_vec(payload).ok()?;
    serde_json::from_slice(&json).ok()
}

/// `https://<host>/<planId>?recipes=<payload>&from=<cook>&household=<name>`
pub fn build_share_link(
    web_host: &str,
    plan: &WeeklyPlan,
    from: &str,
    household_name: &str,
) -> Result<String, AppError> {
    let payload = encode_recipes(&plan.proposed_recipes)?;
    Ok(format!(
        "{}/{}?recipes={}&from={}&household={}",
        web_host.trim_end_matches('/'),
        plan.id,
        utf8_percent_encode(&payload, NON_ALPHANUMERIC),
        utf8_percent_encode(from, NON_ALPHANUMERIC),
        utf8_percent_encode(household_name, NON_ALPHANUMERIC),
    ))
}

/// Legacy app-to-app handoff: `<scheme>://vote?planId=<id>&code=<invite>`.
pub fn build_deep_link(scheme: &str, plan_id: Uuid, invite_code: &str) -> String {
    format!("{scheme}://vote?planId={plan_id}&code={invite_code}")
}
