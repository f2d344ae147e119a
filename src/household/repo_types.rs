use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseholdMember {
    pub id: Uuid,
    pub name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub joined_at: OffsetDateTime,
}

/// One household per device: stored in a single slot, overwritten on create,
/// never deleted through any exposed operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Household {
    pub id: Uuid,
    pub name: String,
    pub cook_user_id: Uuid,
    pub invite_code: String,
    pub members: Vec<HouseholdMember>,
}

impl Household {
    pub fn cook_name(&self) -> Option<&str> {
        self.members
            .iter()
            .find(|m| m.id == self.cook_user_id)
            .map(|m| m.name.as_str())
    }
}
