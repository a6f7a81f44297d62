use std::error::Error;
use std::fmt;

/// Every failure a single command can run into.
///
/// None of these are fatal: they are reported where the command finished and
/// the read loop carries on with the next line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    UnknownCommand(String),
    ArgCountMismatch { usage: String },
    DuplicateCourseName(String),
    CourseNotFound(String),
    InvalidDateFormat(String),
    InvalidIndex { input: String, len: usize },
    IndexOutOfRange { index: i64, len: usize },
    /// A course command ran while nothing was selected. Dispatch never routes
    /// there without a selection, so seeing this means the routing is broken.
    InternalRoutingDefect(String),
}

impl ScheduleError {
    pub fn is_internal(&self) -> bool {
        matches!(self, ScheduleError::InternalRoutingDefect(_))
    }
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleError::UnknownCommand(name) => write!(f, "Unknown command: {}", name),
            ScheduleError::ArgCountMismatch { usage } => write!(f, "Usage: {}", usage),
            ScheduleError::DuplicateCourseName(name) => {
                write!(f, "Course by name of \"{}\" already exists.", name)
            }
            ScheduleError::CourseNotFound(name) => write!(f, "No course by name \"{}\".", name),
            ScheduleError::InvalidDateFormat(msg) => write!(f, "Invalid date format ({})", msg),
            ScheduleError::InvalidIndex { input, len } => match len {
                0 => write!(f, "Invalid ID \"{}\" (the course has no items)", input),
                _ => write!(
                    f,
                    "Invalid ID \"{}\" (must be a number 0-{}, use list-item to see item IDs)",
                    input,
                    len - 1
                ),
            },
            ScheduleError::IndexOutOfRange { index, len } => write!(
                f,
                "Provided ID {} is out of range ({} item(s))",
                index, len
            ),
            ScheduleError::InternalRoutingDefect(name) => write!(
                f,
                "Internal error: course command \"{}\" ran without a selected course",
                name
            ),
        }
    }
}

impl Error for ScheduleError {}

impl From<chrono::ParseError> for ScheduleError {
    fn from(e: chrono::ParseError) -> Self {
        ScheduleError::InvalidDateFormat(e.to_string())
    }
}
