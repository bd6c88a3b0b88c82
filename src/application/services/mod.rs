//! Application services - Business logic orchestration

pub mod notifier;

pub use notifier::Notifier;
