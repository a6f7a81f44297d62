use log::debug;
use std::collections::HashMap;

use crate::models::course::Course;

/// In-memory owner of every course and of the current selection.
///
/// The selection is kept as a course name and resolved against `courses` each
/// time it is read, so a name that no longer resolves reads as "nothing
/// selected".
#[derive(Debug, Default)]
pub struct ScheduleStore {
    courses: HashMap<String, Course>,
    selected: Option<String>,
}

impl ScheduleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty course. Returns false if the name is already taken.
    pub fn add_course(&mut self, name: &str) -> bool {
        if self.courses.contains_key(name) {
            return false;
        }
        debug!("creating course '{}'", name);
        self.courses.insert(name.to_string(), Course::new(name));
        true
    }

    /// Remove a course by name, clearing the selection if it pointed there.
    pub fn remove_course(&mut self, name: &str) -> bool {
        if self.courses.remove(name).is_none() {
            return false;
        }
        if self.selected.as_deref() == Some(name) {
            debug!("removed course '{}' was selected, clearing selection", name);
            self.selected = None;
        }
        true
    }

    /// Select a course by name, or deselect with `None`.
    ///
    /// Selecting an unknown name fails and leaves the selection unchanged.
    pub fn select_course(&mut self, name: Option<&str>) -> bool {
        match name {
            Some(name) => {
                if !self.courses.contains_key(name) {
                    return false;
                }
                self.selected = Some(name.to_string());
            }
            None => self.selected = None,
        }
        true
    }

    pub fn selected_course(&self) -> Option<&Course> {
        self.selected
            .as_deref()
            .and_then(|name| self.courses.get(name))
    }

    pub fn selected_course_mut(&mut self) -> Option<&mut Course> {
        match self.selected.as_deref() {
            Some(name) => self.courses.get_mut(name),
            None => None,
        }
    }

    pub fn has_selection(&self) -> bool {
        self.selected_course().is_some()
    }

    /// Every course, in no particular order.
    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.courses.values()
    }

    pub fn course_count(&self) -> usize {
        self.courses.len()
    }
}
