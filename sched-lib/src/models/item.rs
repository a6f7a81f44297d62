use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::fmt;

use crate::common::common::Common;

/// A single assignment with a due date.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduledItem {
    name: String,
    due: DateTime<Utc>,
}

impl ScheduledItem {
    pub fn new(name: impl Into<String>, due: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            due,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn due(&self) -> DateTime<Utc> {
        self.due
    }

    pub fn is_past_due_at(&self, now: DateTime<Utc>) -> bool {
        self.due < now
    }

    pub fn is_past_due(&self) -> bool {
        self.is_past_due_at(Utc::now())
    }

    /// Orders items by due date only; names never break ties.
    pub fn cmp_due(&self, other: &Self) -> Ordering {
        self.due.cmp(&other.due)
    }
}

impl fmt::Display for ScheduledItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", Common::format_date(&self.due), self.name)
    }
}
