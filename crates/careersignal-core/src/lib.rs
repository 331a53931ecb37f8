mod app_config;
mod config;
mod preferences;
mod record;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env, DEFAULT_FEED_URL};
pub use preferences::{Preferences, PreferencesError};
pub use record::Record;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
