//! New-posting detection between consecutive snapshots.

use std::collections::HashSet;

use careersignal_core::Record;

/// Identities seen in the most recent successful parse.
///
/// Lives for one process; nothing is persisted.
#[derive(Debug, Default, Clone)]
pub struct SessionState {
    last_known_identities: HashSet<String>,
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` once a non-empty snapshot has been observed and not since
    /// replaced by an empty one.
    #[must_use]
    pub fn is_seeded(&self) -> bool {
        !self.last_known_identities.is_empty()
    }

    #[must_use]
    pub fn known_count(&self) -> usize {
        self.last_known_identities.len()
    }

    #[must_use]
    pub fn knows(&self, identity: &str) -> bool {
        self.last_known_identities.contains(identity)
    }
}

/// Result of comparing one snapshot against the session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    /// Records whose identity was not previously known, in snapshot order.
    /// Duplicate identities within the snapshot are each reported.
    pub new_records: Vec<Record>,
    /// `true` when the prior state was empty, so nothing was reported and
    /// the snapshot only seeded the state.
    pub seeded: bool,
}

/// Diffs `snapshot` against `state`, then replaces `state` with the
/// snapshot's identities.
///
/// With an empty prior state nothing is reported. The replacement is
/// unconditional, so an empty snapshot clears the state and the following
/// non-empty snapshot seeds it again silently.
pub fn detect_changes(state: &mut SessionState, snapshot: &[Record]) -> Detection {
    let seeded = !state.is_seeded();

    let new_records = if seeded {
        Vec::new()
    } else {
        snapshot
            .iter()
            .filter(|record| !state.knows(&record.identity()))
            .cloned()
            .collect()
    };

    state.last_known_identities = snapshot.iter().map(Record::identity).collect();

    Detection {
        new_records,
        seeded,
    }
}
