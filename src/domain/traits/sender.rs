use async_trait::async_trait;

use crate::application::errors::DeliveryError;

/// MessageSender trait - abstraction for message delivery channels
///
/// Components that need to notify someone depend on this capability, never
/// on a concrete channel. Both built-in channels only write to the console
/// and always succeed; the `Result` is the seam a real transport would
/// report failures through.
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// Deliver a message. `message` may be empty.
    async fn send(&self, message: &str) -> Result<(), DeliveryError>;

    /// Short name of the delivery channel, for logs
    fn channel(&self) -> &str;
}
