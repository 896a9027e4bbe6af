//! Event System
//!
//! Activity events emitted by the food store, shown in the activity log.

use crate::logging::{LogLevel, get_rust_log_level, should_log};
use chrono::Local;
use std::fmt::Display;

/// The store operation an event belongs to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Operation {
    /// Initial fetch of the whole collection.
    Load,
    /// Creation of a food from a draft.
    Create,
    /// Replacement of the food being edited.
    Update,
    /// Deletion by id.
    Delete,
    /// Edit selection and modal visibility changes.
    Selection,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    /// A request was sent to the backend.
    Request,
    Success,
    Error,
    /// Local UI state changed without a network call.
    StateChange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub operation: Operation,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(operation: Operation, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            operation,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn request(operation: Operation, msg: String) -> Self {
        Self::new(operation, msg, EventType::Request, LogLevel::Debug)
    }

    pub fn success(operation: Operation, msg: String) -> Self {
        Self::new(operation, msg, EventType::Success, LogLevel::Info)
    }

    pub fn error(operation: Operation, msg: String, log_level: LogLevel) -> Self {
        Self::new(operation, msg, EventType::Error, log_level)
    }

    pub fn state_change(msg: String) -> Self {
        Self::new(
            Operation::Selection,
            msg,
            EventType::StateChange,
            LogLevel::Debug,
        )
    }

    /// Whether the event passes the `RUST_LOG` threshold.
    pub fn should_display(&self) -> bool {
        self.should_display_at(get_rust_log_level())
    }

    /// Success and Info events always show; everything else must reach `threshold`.
    pub fn should_display_at(&self, threshold: LogLevel) -> bool {
        if self.event_type == EventType::Success || self.log_level == LogLevel::Info {
            return true;
        }
        should_log(self.log_level, threshold)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.event_type, self.timestamp, self.operation, self.msg
        )
    }
}
