// src/error.rs
use thiserror::Error;

/// Why a form submission did not produce its happy-path result.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// Required input missing; nothing was sent
    #[error("Validation error: {0}")]
    Validation(String),

    /// The exchange failed; only `message` is shown to the user
    #[error("{message}")]
    Transport {
        message: String,
        #[source]
        source: anyhow::Error,
    },

    /// Well-formed response carrying an `error` field
    #[error("Application error: {0}")]
    Application(String),
}

impl WorkflowError {
    pub fn validation(message: &str) -> Self {
        Self::Validation(message.to_string())
    }

    pub fn transport(message: &str, source: anyhow::Error) -> Self {
        Self::Transport {
            message: message.to_string(),
            source,
        }
    }

    /// Text the notifier shows for this error
    pub fn user_message(&self) -> &str {
        match self {
            Self::Validation(message) | Self::Application(message) => message,
            Self::Transport { message, .. } => message,
        }
    }
}
