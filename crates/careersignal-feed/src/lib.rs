pub mod client;
pub mod detect;
pub mod error;
pub mod link;
pub mod parse;
pub mod watch;

pub use client::{FeedClient, FeedSource};
pub use detect::{detect_changes, Detection, SessionState};
pub use error::FeedError;
pub use link::extract_link;
pub use parse::parse_snapshot;
pub use watch::{
    alert_body, AlertToggle, CycleOutcome, CycleReport, Notifier, Presenter, Watcher, ALERT_TITLE,
};
