use crate::app_config::AppConfig;
use crate::ConfigError;

/// Feed polled when `CAREERSIGNAL_FEED_URL` is unset.
pub const DEFAULT_FEED_URL: &str =
    "https://raw.githubusercontent.com/vanshb03/Summer2026-Internships/main/README.md";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a usable
/// config. Durations must be strictly positive.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_secs = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        let secs = raw
            .trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })?;
        if secs == 0 {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(secs)
    };

    let feed_url = or_default("CAREERSIGNAL_FEED_URL", DEFAULT_FEED_URL);
    if !(feed_url.starts_with("http://") || feed_url.starts_with("https://")) {
        return Err(ConfigError::InvalidEnvVar {
            var: "CAREERSIGNAL_FEED_URL".to_string(),
            reason: format!("\"{feed_url}\" is not an http(s) URL"),
        });
    }

    let poll_interval_secs = parse_secs("CAREERSIGNAL_POLL_INTERVAL_SECS", "300")?;
    let fetch_timeout_secs = parse_secs("CAREERSIGNAL_FETCH_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("CAREERSIGNAL_USER_AGENT", "careersignal/0.1 (posting-watch)");
    let log_level = or_default("CAREERSIGNAL_LOG_LEVEL", "info");
    let preferences_path = PathBuf::from(or_default(
        "CAREERSIGNAL_PREFERENCES_PATH",
        "./config/preferences.yaml",
    ));
    let snapshot_path = lookup("CAREERSIGNAL_SNAPSHOT_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    Ok(AppConfig {
        feed_url,
        poll_interval_secs,
        fetch_timeout_secs,
        user_agent,
        log_level,
        preferences_path,
        snapshot_path,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
