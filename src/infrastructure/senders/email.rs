use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::application::errors::DeliveryError;
use crate::domain::traits::MessageSender;

/// Email channel: one plain line per message
pub struct EmailSender {
    mirror: Option<mpsc::Sender<String>>,
}

impl EmailSender {
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

impl Default for EmailSender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageSender for EmailSender {
    async fn send(&self, message: &str) -> Result<(), DeliveryError> {
        self.emit(format!("[email] New message: {}", message)).await;
        Ok(())
    }

    fn channel(&self) -> &str {
        "email"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_send_mirrors_line_with_message() {
        let (tx, mut rx) = mpsc::channel(4);
        let sender = EmailSender::new().with_mirror(tx);

        sender.send("Hello").await.unwrap();

        let line = rx.recv().await.unwrap();
        assert!(!line.is_empty());
        assert!(line.contains("Hello"));
    }

    #[tokio::test]
    async fn test_send_accepts_empty_message() {
        let sender = EmailSender::new();
        sender.send("").await.unwrap();
    }
}
