//! Centralized logger for game events
//!
//! The engine narrates turns, resolved actions and the outcome through this
//! logger instead of printing directly, so hosts can silence it or capture
//! entries in memory for assertions.

use serde::{Deserialize, Serialize};
use std::cell::{Ref, RefCell};

/// Verbosity level for game output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum VerbosityLevel {
    /// Silent - no output during game
    Silent = 0,
    /// Minimal - only game outcome
    Minimal = 1,
    /// Normal - turns and key actions (default)
    #[default]
    Normal = 2,
    /// Verbose - all actions and AI scoring detail
    Verbose = 3,
}

/// Output destination for log messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OutputMode {
    /// Output only to stdout (default)
    #[default]
    Stdout,
    /// Capture only to in-memory buffer (no stdout)
    Memory,
    /// Both stdout and in-memory buffer
    Both,
}

/// A captured log entry
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: VerbosityLevel,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct GameLogger {
    verbosity: VerbosityLevel,
    output_mode: OutputMode,
    buffer: RefCell<Vec<LogEntry>>,
}

impl GameLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_verbosity(verbosity: VerbosityLevel) -> Self {
        GameLogger {
            verbosity,
            ..Self::default()
        }
    }

    pub fn set_verbosity(&mut self, verbosity: VerbosityLevel) {
        self.verbosity = verbosity;
    }

    pub fn set_output_mode(&mut self, mode: OutputMode) {
        self.output_mode = mode;
    }

    pub fn verbosity(&self) -> VerbosityLevel {
        self.verbosity
    }

    /// Log a message at the given level; dropped when below the configured
    /// verbosity.
    pub fn log(&self, level: VerbosityLevel, message: impl Into<String>) {
        if level > self.verbosity || self.verbosity == VerbosityLevel::Silent {
            return;
        }
        let message = message.into();
        if matches!(self.output_mode, OutputMode::Stdout | OutputMode::Both) {
            println!("{message}");
        }
        if matches!(self.output_mode, OutputMode::Memory | OutputMode::Both) {
            self.buffer.borrow_mut().push(LogEntry { level, message });
        }
    }

    pub fn minimal(&self, message: impl Into<String>) {
        self.log(VerbosityLevel::Minimal, message);
    }

    pub fn normal(&self, message: impl Into<String>) {
        self.log(VerbosityLevel::Normal, message);
    }

    pub fn verbose(&self, message: impl Into<String>) {
        self.log(VerbosityLevel::Verbose, message);
    }

    /// Read access to the captured entries (Memory or Both modes).
    pub fn entries(&self) -> Ref<'_, Vec<LogEntry>> {
        self.buffer.borrow()
    }

    pub fn clear(&self) {
        self.buffer.borrow_mut().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_filtering() {
        let mut logger = GameLogger::with_verbosity(VerbosityLevel::Minimal);
        logger.set_output_mode(OutputMode::Memory);

        logger.minimal("outcome");
        logger.normal("turn detail");
        logger.verbose("scoring detail");

        let entries = logger.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message, "outcome");
    }

    #[test]
    fn test_silent_drops_everything() {
        let mut logger = GameLogger::with_verbosity(VerbosityLevel::Silent);
        logger.set_output_mode(OutputMode::Memory);
        logger.minimal("outcome");
        assert!(logger.entries().is_empty());
    }
}
