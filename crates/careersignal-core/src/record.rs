use serde::{Deserialize, Serialize};

/// One posting row parsed out of the feed table.
///
/// Field values are the trimmed cell contents; nothing is validated beyond
/// that. `date_posted` is an opaque display string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub company: String,
    pub role: String,
    pub location: String,
    /// Apply URL, or empty when the link cell held nothing usable.
    pub link: String,
    pub date_posted: String,
}

impl Record {
    /// Deduplication key: `company + role + location`, concatenated as-is.
    ///
    /// `link` and `date_posted` do not participate, so a re-dated or re-linked
    /// row is still the same posting.
    #[must_use]
    pub fn identity(&self) -> String {
        let mut key =
            String::with_capacity(self.company.len() + self.role.len() + self.location.len());
        key.push_str(&self.company);
        key.push_str(&self.role);
        key.push_str(&self.location);
        key
    }

    /// Whether an apply link was recovered for this row.
    #[must_use]
    pub fn has_link(&self) -> bool {
        !self.link.is_empty()
    }
}
