//! Console-backed user persistence
//!
//! Stands in for a database: "saving" a user writes one record line to
//! stdout. The `User` entity never learns this module exists.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::mpsc;

use crate::application::errors::StorageError;
use crate::domain::entities::User;
use crate::domain::traits::UserStore;

/// Record store logging each saved user
pub struct UserRecordStore {
    target: String,
    mirror: Option<mpsc::Sender<String>>,
}

impl UserRecordStore {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            mirror: None,
        }
    }

    /// Mirror every emitted line into a channel, for tests
    pub fn with_mirror(mut self, mirror: mpsc::Sender<String>) -> Self {
        self.mirror = Some(mirror);
        self
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    async fn emit(&self, line: String) {
        println!("{}", line);
        if let Some(ref mirror) = self.mirror {
            let _ = mirror.send(line).await;
        }
    }
}

impl Default for UserRecordStore {
    fn default() -> Self {
        Self::new("database")
    }
}

#[async_trait]
impl UserStore for UserRecordStore {
    async fn save_user(&self, user: &User) -> Result<(), StorageError> {
        self.emit(format!(
            "[{}] Saving user {} (age {}) to the {}",
            Utc::now().format("%Y-%m-%d %H:%M:%S"),
            user.name(),
            user.age(),
            self.target,
        ))
        .await;
        Ok(())
    }
}
