use chrono::{DateTime, Utc};

use crate::models::item::ScheduledItem;

/// The schedule for a single course.
///
/// Items keep their insertion order and are addressed by index only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Course {
    name: String,
    items: Vec<ScheduledItem>,
}

impl Course {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append an item. Duplicate names are allowed.
    pub fn add_item(&mut self, name: impl Into<String>, due: DateTime<Utc>) {
        self.items.push(ScheduledItem::new(name, due));
    }

    /// Remove the item at `index`, shifting later items down by one.
    /// Returns false and leaves the course untouched when out of range.
    pub fn remove_item(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }
        self.items.remove(index);
        true
    }

    pub fn get_item(&self, index: usize) -> Option<&ScheduledItem> {
        self.items.get(index)
    }

    /// Items in insertion order, past and future alike.
    pub fn items(&self) -> &[ScheduledItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn past_due_at(&self, now: DateTime<Utc>) -> Vec<&ScheduledItem> {
        self.items
            .iter()
            .filter(|item| item.is_past_due_at(now))
            .collect()
    }

    pub fn future_due_at(&self, now: DateTime<Utc>) -> Vec<&ScheduledItem> {
        self.items
            .iter()
            .filter(|item| !item.is_past_due_at(now))
            .collect()
    }

    /// Items due before now. Recomputed on every call.
    pub fn past_due(&self) -> Vec<&ScheduledItem> {
        self.past_due_at(Utc::now())
    }

    /// Items due now or later. Recomputed on every call.
    pub fn future_due(&self) -> Vec<&ScheduledItem> {
        self.future_due_at(Utc::now())
    }
}
