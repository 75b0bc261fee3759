//! Status line state

use chrono::{DateTime, Local};

/// Kind of status message (determines icon and color)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Work started and still in progress
    Running,
    /// Work completed successfully
    Success,
    /// Work failed
    Error,
    /// Request refused or ignored
    Warning,
    /// Informational message
    Info,
}

impl StatusKind {
    /// Get the emoji for this status kind
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Running => "⏳",
            Self::Success => "✅",
            Self::Error => "🚨",
            Self::Warning => "⚠️",
            Self::Info => "ℹ️",
        }
    }
}

/// The human-readable status line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    /// When the message was created
    pub timestamp: DateTime<Local>,
    pub kind: StatusKind,
    pub message: String,
}

impl StatusMessage {
    /// Create a new status message with current timestamp
    pub fn new(kind: StatusKind, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            kind,
            message: message.into(),
        }
    }

    pub fn running(message: impl Into<String>) -> Self {
        Self::new(StatusKind::Running, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(StatusKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(StatusKind::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(StatusKind::Warning, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(StatusKind::Info, message)
    }
}

impl Default for StatusMessage {
    fn default() -> Self {
        Self::info("Press ? for help")
    }
}
