use lazy_static::lazy_static;
use rand::Rng;
use regex::Regex;
use time::OffsetDateTime;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::AppError;
use crate::identity::repo_types::DeviceUser;
use crate::storage::{self, keys, KvStore};

use super::repo_types::{Household, HouseholdMember};

// No 0/O or 1/I: codes get read aloud across the kitchen table.
const CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";
const CODE_LEN: usize = 6;

pub(crate) fn is_valid_code(code: &str) -> bool {
    lazy_static! {
        static ref CODE_RE: Regex = Regex::new(r"^[A-Z0-9]{6}$").unwrap();
    }
    CODE_RE.is_match(code)
}

fn generate_invite_code() -> String {
    let mut rng = rand::thread_rng();
    (0..CODE_LEN)
        .map(|_| CODE_ALPHABET[rng.gen_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}

/// Create a household with the device user as cook and sole member.
/// Overwrites any existing slot: one household per device.
pub async fn create(
    store: &dyn KvStore,
    name: &str,
    user: &DeviceUser,
) -> Result<Household, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("household name is required".into()));
    }
    let household = Household {
        id: Uuid::new_v4(),
        name: name.to_string(),
        cook_user_id: user.id,
        invite_code: generate_invite_code(),
        members: vec![HouseholdMember {
            id: user.id,
            name: user.name.clone(),
            joined_at: OffsetDateTime::now_utc(),
        }],
    };
    storage::save(store, keys::HOUSEHOLD, &household).await?;
    info!(household_id = %household.id, "household created");
    Ok(household)
}

/// Join the household in this device's slot by invite code. Member add is
/// idempotent by user id.
pub async fn join(
    store: &dyn KvStore,
    code: &str,
    user: &DeviceUser,
) -> Result<Household, AppError> {
    let code = code.trim().to_ascii_uppercase();
    if !is_valid_code(&code) {
        return Err(AppError::InvalidInviteCode);
    }
    let mut household = get(store).await.ok_or(AppError::NoHousehold)?;
    if household.invite_code != code {
        return Err(AppError::InvalidInviteCode);
    }
    if !household.members.iter().any(|m| m.id == user.id) {
        household.members.push(HouseholdMember {
            id: user.id,
            name: user.name.clone(),
            joined_at: OffsetDateTime::now_utc(),
        });
        storage::save(store, keys::HOUSEHOLD, &household).await?;
        debug!(household_id = %household.id, user_id = %user.id, "member joined");
    }
    Ok(household)
}

pub async fn get(store: &dyn KvStore) -> Option<Household> {
    storage::load(store, keys::HOUSEHOLD).await
}
