//! One fetch → parse → detect → deliver cycle.
//!
//! [`Watcher`] owns the session state and the collaborators it delivers to.
//! The scheduler calls [`Watcher::run_cycle`] on every tick; nothing here
//! knows about timers.

use careersignal_core::Record;
use chrono::{DateTime, Utc};

use crate::client::FeedSource;
use crate::detect::{detect_changes, SessionState};
use crate::error::FeedError;
use crate::parse::parse_snapshot;

/// Alert title for every new posting.
pub const ALERT_TITLE: &str = "New Internship Posted!";

/// Receives one alert per newly detected record.
pub trait Notifier {
    fn notify(&self, title: &str, body: &str);
}

/// Reports whether alerts should currently be dispatched.
pub trait AlertToggle {
    fn alerts_enabled(&self) -> bool;
}

/// Receives the full snapshot after every successful cycle, replacing
/// whatever it displayed before.
pub trait Presenter {
    fn replace(&self, snapshot: &[Record]);
}

/// Alert body for `record`: `"{company} - {role}"`.
#[must_use]
pub fn alert_body(record: &Record) -> String {
    format!("{} - {}", record.company, record.role)
}

#[derive(Debug)]
pub enum CycleOutcome {
    /// The feed could not be fetched; state and collaborators were not touched.
    FetchFailed(FeedError),
    Completed(CycleReport),
}

#[derive(Debug, Clone)]
pub struct CycleReport {
    pub fetched_at: DateTime<Utc>,
    pub snapshot_len: usize,
    pub new_records: Vec<Record>,
    /// `true` when this cycle only seeded the session state.
    pub seeded: bool,
    pub alerts_enabled: bool,
    pub alerts_sent: usize,
}

pub struct Watcher<S, N, T, P> {
    source: S,
    notifier: N,
    toggle: T,
    presenter: P,
    state: SessionState,
}

impl<S, N, T, P> Watcher<S, N, T, P>
where
    S: FeedSource,
    N: Notifier,
    T: AlertToggle,
    P: Presenter,
{
    pub fn new(source: S, notifier: N, toggle: T, presenter: P) -> Self {
        Self {
            source,
            notifier,
            toggle,
            presenter,
            state: SessionState::new(),
        }
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Runs one cycle.
    ///
    /// On fetch failure the cycle is a no-op. Otherwise the snapshot is
    /// diffed against the session state, new records are alerted in
    /// document order (if the toggle allows), and the full snapshot is
    /// handed to the presenter.
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        let document = match self.source.fetch().await {
            Ok(document) => document,
            Err(e) => {
                tracing::warn!(error = %e, "watcher: fetch failed; keeping previous state");
                return CycleOutcome::FetchFailed(e);
            }
        };
        let fetched_at = Utc::now();

        let snapshot = parse_snapshot(&document);
        let detection = detect_changes(&mut self.state, &snapshot);

        let alerts_enabled = self.toggle.alerts_enabled();
        let mut alerts_sent = 0;
        if alerts_enabled {
            for record in &detection.new_records {
                self.notifier.notify(ALERT_TITLE, &alert_body(record));
                alerts_sent += 1;
            }
        } else if !detection.new_records.is_empty() {
            tracing::info!(
                new = detection.new_records.len(),
                "watcher: alerts disabled; suppressing notifications"
            );
        }

        self.presenter.replace(&snapshot);

        tracing::info!(
            records = snapshot.len(),
            new = detection.new_records.len(),
            seeded = detection.seeded,
            "watcher: cycle complete"
        );

        CycleOutcome::Completed(CycleReport {
            fetched_at,
            snapshot_len: snapshot.len(),
            new_records: detection.new_records,
            seeded: detection.seeded,
            alerts_enabled,
            alerts_sent,
        })
    }
}

#[cfg(test)]
#[path = "watch_test.rs"]
mod tests;
