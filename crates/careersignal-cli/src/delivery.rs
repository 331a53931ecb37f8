//! Terminal-side collaborators for the watcher: alert output, the persisted
//! alert toggle, and snapshot display.

use std::path::PathBuf;

use careersignal_core::{Preferences, Record};
use careersignal_feed::{AlertToggle, Notifier, Presenter};

/// Emits alerts as log events and stdout lines.
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, title: &str, body: &str) {
        tracing::info!(title, body, "alert: new posting");
        println!("{}", alert_line(title, body));
    }
}

pub(crate) fn alert_line(title: &str, body: &str) -> String {
    format!("{title} {body}")
}

/// Reads the alert preference from disk on every check so that
/// `careersignal alerts off` takes effect on the next cycle.
pub struct PreferencesToggle {
    path: PathBuf,
}

impl PreferencesToggle {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl AlertToggle for PreferencesToggle {
    fn alerts_enabled(&self) -> bool {
        match Preferences::load(&self.path) {
            Ok(prefs) => prefs.alerts_enabled,
            Err(e) => {
                tracing::warn!(error = %e, "alerts: unreadable preferences; using defaults");
                Preferences::default().alerts_enabled
            }
        }
    }
}

/// Prints the current snapshot and optionally mirrors it to a JSON file.
pub struct SnapshotPresenter {
    snapshot_path: Option<PathBuf>,
}

impl SnapshotPresenter {
    pub fn new(snapshot_path: Option<PathBuf>) -> Self {
        Self { snapshot_path }
    }

    fn write_snapshot(&self, snapshot: &[Record]) {
        let Some(path) = &self.snapshot_path else {
            return;
        };

        let json = match serde_json::to_string_pretty(snapshot) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(error = %e, "presenter: failed to serialize snapshot");
                return;
            }
        };

        if let Err(e) = std::fs::write(path, json) {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "presenter: failed to write snapshot file"
            );
        }
    }
}

impl Presenter for SnapshotPresenter {
    fn replace(&self, snapshot: &[Record]) {
        println!("{}", render_snapshot(snapshot));
        self.write_snapshot(snapshot);
    }
}

pub(crate) fn render_snapshot(snapshot: &[Record]) -> String {
    if snapshot.is_empty() {
        return "No postings found.".to_string();
    }

    let mut out = format!("{} postings\n", snapshot.len());
    for record in snapshot {
        out.push('\n');
        out.push_str(&render_record(record));
    }
    out
}

pub(crate) fn render_record(record: &Record) -> String {
    let apply = if record.has_link() {
        format!("Apply: {}", record.link)
    } else {
        "No apply link available".to_string()
    };
    format!(
        "{}\n  {}\n  {}\n  {apply}\n  Posted: {}\n",
        record.company, record.role, record.location, record.date_posted
    )
}
