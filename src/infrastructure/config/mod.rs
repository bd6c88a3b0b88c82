//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

use crate::application::errors::ConfigError;

/// Which delivery channel the notifier runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Channel {
    Email,
    Notification,
}

impl FromStr for Channel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(Channel::Email),
            "notification" => Ok(Channel::Notification),
            other => Err(ConfigError::UnknownChannel(other.to_string())),
        }
    }
}

/// Demo configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub notifier: NotifierConfig,
    pub storage: StorageConfig,
    pub demo: DemoConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct NotifierConfig {
    pub channel: Channel,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct StorageConfig {
    pub target: String,
}

/// Inputs for the `run` command's straight-line walkthrough
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct DemoConfig {
    pub message: String,
    pub user_name: String,
    pub user_age: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            notifier: NotifierConfig {
                channel: Channel::Email,
            },
            storage: StorageConfig {
                target: "database".to_string(),
            },
            demo: DemoConfig {
                message: "Important message".to_string(),
                user_name: "Alex".to_string(),
                user_age: 30,
            },
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))
    }

    pub fn load_env() -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Ok(channel) = std::env::var("NOTIFY_CHANNEL") {
            config.notifier.channel = channel.parse()?;
        }

        if let Ok(message) = std::env::var("NOTIFY_MESSAGE") {
            config.demo.message = message;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_round_trips_through_yaml() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.notifier.channel, config.notifier.channel);
        assert_eq!(parsed.demo.user_name, config.demo.user_name);
    }

    #[test]
    fn test_unknown_channel_is_rejected() {
        let err = "pigeon".parse::<Channel>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownChannel(_)));
    }

    #[test]
    fn test_load_missing_file_is_a_parse_error() {
        let err = Config::load("does/not/exist.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
