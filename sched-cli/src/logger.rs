use colored::Colorize;
#[cfg(test)]
use std::sync::{Arc, Mutex};

/// Where a console message ends up.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Channel {
    /// Results of successful operations (stdout).
    Out,
    /// Validation and error messages (stderr).
    Err,
}

/// Sink for everything a command prints to the user.
pub trait Logger {
    fn log(&self, channel: Channel, message: String);
}

/// Standard output logger for the interactive session
pub struct StdoutLogger;

impl Logger for StdoutLogger {
    fn log(&self, channel: Channel, message: String) {
        match channel {
            Channel::Out => println!("{}", message),
            Channel::Err => eprintln!("{}", message.red()),
        }
    }
}

/// Collecting logger for tests - stores messages in memory
#[cfg(test)]
#[derive(Default)]
pub struct CollectingLogger {
    messages: Arc<Mutex<Vec<(Channel, String)>>>,
}

#[cfg(test)]
impl CollectingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stdout(&self) -> Vec<String> {
        self.on(Channel::Out)
    }

    pub fn stderr(&self) -> Vec<String> {
        self.on(Channel::Err)
    }

    pub fn stdout_text(&self) -> String {
        self.stdout().join("\n")
    }

    pub fn clear(&self) {
        self.messages.lock().unwrap().clear();
    }

    fn on(&self, channel: Channel) -> Vec<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter(|(c, _)| *c == channel)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

#[cfg(test)]
impl Logger for CollectingLogger {
    fn log(&self, channel: Channel, message: String) {
        self.messages.lock().unwrap().push((channel, message));
    }
}

/// Log an info message
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)*) => {
        {
            use $crate::logger::Logger as _;
            $logger.log($crate::logger::Channel::Out, format!($($arg)*))
        }
    };
}

/// Log a success message
#[macro_export]
macro_rules! success {
    ($logger:expr, $($arg:tt)*) => {
        {
            use $crate::logger::Logger as _;
            $logger.log($crate::logger::Channel::Out, format!($($arg)*))
        }
    };
}

/// Log a warning message
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)*) => {
        {
            use $crate::logger::Logger as _;
            $logger.log($crate::logger::Channel::Err, format!($($arg)*))
        }
    };
}

/// Log an error message
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)*) => {
        {
            use $crate::logger::Logger as _;
            $logger.log($crate::logger::Channel::Err, format!($($arg)*))
        }
    };
}

/// Turn ANSI colors off for everything printed from here on.
///
/// Enabling leaves the decision to `colored`, which honors `NO_COLOR` and
/// non-terminal output.
pub fn set_color(enabled: bool) {
    if enabled {
        colored::control::unset_override();
    } else {
        colored::control::set_override(false);
    }
}
