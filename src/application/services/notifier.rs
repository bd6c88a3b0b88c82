use crate::application::errors::DeliveryError;
use crate::domain::traits::MessageSender;

/// Service for sending notifications over a pluggable channel
///
/// Depends on the `MessageSender` capability, not on any concrete channel.
/// Swapping email for push notifications (or anything else) touches only
/// the construction site.
pub struct Notifier<S: MessageSender> {
    sender: S,
}

impl<S: MessageSender> Notifier<S> {
    pub fn new(sender: S) -> Self {
        Self { sender }
    }

    pub fn sender(&self) -> &S {
        &self.sender
    }

    /// Deliver a notification through the held channel
    ///
    /// Delegates to the sender exactly once, without duplicating or
    /// rewriting the payload.
    pub async fn notify(&self, message: &str) -> Result<(), DeliveryError> {
        tracing::debug!("Notifying via {}: {:?}", self.sender.channel(), message);
        self.sender.send(message).await
    }
}
