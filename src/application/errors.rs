//! Application layer errors

use thiserror::Error;

/// Top-level errors for the binary
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Delivery error: {0}")]
    Delivery(#[from] DeliveryError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Message delivery errors
///
/// The built-in console channels never produce one of these; a real
/// transport substituted behind `MessageSender` would.
#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("Channel unavailable: {0}")]
    ChannelUnavailable(String),

    #[error("Rejected by channel: {0}")]
    Rejected(String),
}

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Record rejected: {0}")]
    Rejected(String),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown channel: {0}")]
    UnknownChannel(String),

    #[error("Parse error: {0}")]
    Parse(String),
}
