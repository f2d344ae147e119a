use tracing::debug;
use uuid::Uuid;

use crate::error::AppError;
use crate::storage::{self, keys, KvStore};

use super::repo_types::DeviceUser;

const DEFAULT_NAME: &str = "Chef";

/// Return the stored device user, creating and persisting one on first call.
pub async fn get_or_create(store: &dyn KvStore) -> Result<DeviceUser, AppError> {
    if let Some(user) = storage::load::<DeviceUser>(store, keys::DEVICE_USER).await {
        return Ok(user);
    }
    let user = DeviceUser {
        id: Uuid::new_v4(),
        name: DEFAULT_NAME.to_string(),
    };
    storage::save(store, keys::DEVICE_USER, &user).await?;
    debug!(user_id = %user.id, "device user created");
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[tokio::test]
    async fn creates_once_and_returns_same_user() {
        let store = MemoryStore::default();
        let first = get_or_create(&store).await.expect("create");
        let second = get_or_create(&store).await.expect("reload");
        assert_eq!(first.id, second.id);
        assert_eq!(second.name, "Chef");
    }
}
