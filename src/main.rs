use clap::{Parser, Subcommand};
use std::fs;

use solid_kata::application::errors::{AppError, ConfigError};
use solid_kata::application::services::Notifier;
use solid_kata::domain::entities::{Duck, Penguin, User};
use solid_kata::domain::traits::{MessageSender, Movable, UserStore};
use solid_kata::infrastructure::config::{Channel, Config};
use solid_kata::infrastructure::senders::{EmailSender, NotificationSender};
use solid_kata::infrastructure::storage::UserRecordStore;

#[derive(Parser)]
#[command(name = "solid-kata")]
#[command(about = "SOLID principle exercises: three capability-based examples", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk through all three examples
    Run,
    /// Example A: send one notification through the configured channel
    Notify {
        /// Message text
        message: String,
    },
    /// Example B: advance every movable bird variant
    Parade,
    /// Example C: save a user through the record store
    Save {
        name: String,
        age: u32,
    },
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let rt = tokio::runtime::Runtime::new().unwrap();

    let result = match cli.command {
        Commands::Run => {
            let config = load_config(&cli.config);
            rt.block_on(run_all(&config))
        }
        Commands::Notify { message } => {
            let config = load_config(&cli.config);
            rt.block_on(notify(config.notifier.channel, &message))
        }
        Commands::Parade => {
            parade();
            Ok(())
        }
        Commands::Save { name, age } => {
            let config = load_config(&cli.config);
            rt.block_on(save(&config, User::new(name, age)))
        }
        Commands::Version => {
            println!("solid-kata v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::InitConfig => init_config(&cli.config),
    };

    if let Err(e) = result {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn load_config(path: &str) -> Config {
    if std::path::Path::new(path).exists() {
        Config::load(path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config: {}, using defaults", e);
            Config::default()
        })
    } else {
        Config::load_env().unwrap_or_else(|e| {
            tracing::warn!("Bad environment override: {}, using defaults", e);
            Config::default()
        })
    }
}

/// Straight-line walkthrough of the three examples
async fn run_all(config: &Config) -> Result<(), AppError> {
    tracing::info!("Example A: messaging abstraction");
    notify(config.notifier.channel, &config.demo.message).await?;

    tracing::info!("Example B: movable capability");
    parade();

    tracing::info!("Example C: entity/persistence separation");
    let user = User::new(&config.demo.user_name, config.demo.user_age);
    save(config, user).await?;

    Ok(())
}

async fn notify(channel: Channel, message: &str) -> Result<(), AppError> {
    match channel {
        Channel::Email => deliver(Notifier::new(EmailSender::new()), message).await,
        Channel::Notification => {
            deliver(Notifier::new(NotificationSender::new()), message).await
        }
    }
}

async fn deliver<S: MessageSender>(
    notifier: Notifier<S>,
    message: &str,
) -> Result<(), AppError> {
    tracing::info!("Delivering via {}", notifier.sender().channel());
    notifier.notify(message).await?;
    Ok(())
}

fn parade() {
    let birds: Vec<Box<dyn Movable>> = vec![Box::new(Duck), Box::new(Penguin)];
    for bird in &birds {
        tracing::debug!("Advancing {}", bird.species());
        bird.advance();
    }
}

async fn save(config: &Config, user: User) -> Result<(), AppError> {
    let store = UserRecordStore::new(&config.storage.target);
    store.save_user(&user).await?;
    Ok(())
}

fn init_config(path: &str) -> Result<(), AppError> {
    let config = Config::default();
    let yaml =
        serde_yaml::to_string(&config).map_err(|e| ConfigError::Parse(e.to_string()))?;
    fs::write(path, yaml)
        .map_err(|e| ConfigError::Parse(format!("Failed to write config: {}", e)))?;
    println!("Wrote default config to {}", path);
    Ok(())
}
