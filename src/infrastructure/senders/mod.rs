//! Console-backed delivery channels
//!
//! Both channels write to stdout and always succeed. They exist to show
//! that `Notifier` works against any `MessageSender`, not to deliver
//! anything for real.

pub mod email;
pub mod notification;

pub use email::EmailSender;
pub use notification::NotificationSender;
