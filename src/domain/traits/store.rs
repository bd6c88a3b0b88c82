use async_trait::async_trait;

use crate::application::errors::StorageError;
use crate::domain::entities::User;

/// UserStore trait - abstraction for user persistence
///
/// Takes the user by shared reference, so saving can never mutate the
/// entity. The entity itself knows nothing about any of this.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn save_user(&self, user: &User) -> Result<(), StorageError>;
}
