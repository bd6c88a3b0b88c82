use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::application::errors::DeliveryError;
use crate::domain::traits::MessageSender;

/// Push-notification channel: a templated two-line banner per message
pub struct NotificationSender {
    mirror: Option<mpsc::Sender<String>>,
}

impl NotificationSender {
    pub fn new() -> Self {
        Self { mirror: None }
    }

    /// Mirror every emitted line into a channel, for tests
    pub fn with_mirror(mut self, mirror: mpsc::Sender<String>) -> Self {
        self.mirror = Some(mirror);
        self
    }

    async fn emit(&self, line: String) {
        println!("{}", line);
        if let Some(ref mirror) = self.mirror {
            let _ = mirror.send(line).await;
        }
    }
}

impl Default for NotificationSender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageSender for NotificationSender {
    async fn send(&self, message: &str) -> Result<(), DeliveryError> {
        self.emit("You have a new message!".to_string()).await;
        self.emit(format!("  Message text: {}", message)).await;
        Ok(())
    }

    fn channel(&self) -> &str {
        "notification"
    }
}
