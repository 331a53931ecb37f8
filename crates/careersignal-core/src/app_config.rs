use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub feed_url: String,
    pub poll_interval_secs: u64,
    pub fetch_timeout_secs: u64,
    pub user_agent: String,
    pub log_level: String,
    pub preferences_path: PathBuf,
    /// When set, the presenter mirrors each snapshot to this JSON file.
    pub snapshot_path: Option<PathBuf>,
}

impl AppConfig {
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }
}
