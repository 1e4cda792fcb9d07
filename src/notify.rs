// src/notify.rs
//! User-facing notifications: blocking alerts and toasts

use std::fmt;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Alert(String),
    Toast { level: Level, message: String },
}

impl Notification {
    pub fn alert(message: impl Into<String>) -> Self {
        Self::Alert(message.into())
    }

    pub fn toast_success(message: impl Into<String>) -> Self {
        Self::Toast {
            level: Level::Success,
            message: message.into(),
        }
    }

    pub fn toast_error(message: impl Into<String>) -> Self {
        Self::Toast {
            level: Level::Error,
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Alert(message) | Self::Toast { message, .. } => message,
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alert(message) => write!(f, "[alert] {}", message),
            Self::Toast {
                level: Level::Success,
                message,
            } => write!(f, "✅ {}", message),
            Self::Toast {
                level: Level::Error,
                message,
            } => write!(f, "❌ {}", message),
        }
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Prints notifications to the terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        match &notification {
            Notification::Toast {
                level: Level::Error,
                ..
            } => eprintln!("{}", notification),
            _ => println!("{}", notification),
        }
    }
}

/// Keeps every notification in memory; clones share the same log
#[derive(Debug, Default, Clone)]
pub struct MemoryNotifier {
    seen: Arc<Mutex<Vec<Notification>>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.seen
            .lock()
            .map(|seen| seen.clone())
            .unwrap_or_default()
    }

    pub fn last(&self) -> Option<Notification> {
        self.notifications().pop()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, notification: Notification) {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(notification);
        }
    }
}
