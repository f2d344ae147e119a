use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The pseudo-identity for "this installation". Created once, immutable,
/// and used as the cook/voter identity when no network account exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceUser {
    pub id: Uuid,
    pub name: String,
}
