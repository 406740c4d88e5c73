//! Ephemeral notifications

use std::time::{Duration, Instant};

/// What a notification is reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Success => "\u{2714}",
            Self::Error => "\u{2716}",
            Self::Info => "\u{2139}",
        }
    }
}

/// A short message that dismisses itself
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    created_at: Instant,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self::at(message, kind, Instant::now())
    }

    pub fn at(message: impl Into<String>, kind: NotificationKind, created_at: Instant) -> Self {
        Self { message: message.into(), kind, created_at }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Error)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Info)
    }

    pub fn is_expired(&self, now: Instant, lifetime: Duration) -> bool {
        now.saturating_duration_since(self.created_at) >= lifetime
    }
}
