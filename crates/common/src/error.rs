use thiserror::Error;

/// Failures surfaced by the notification hook. None are retried.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Telegram botToken or chatId missing")]
    MissingCredentials,

    #[error("Telegram API {status}: {body}")]
    DeliveryFailed { status: u16, body: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl NotifyError {
    /// HTTP status returned by the Bot API, if the request got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            NotifyError::DeliveryFailed { status, .. } => Some(*status),
            NotifyError::Transport(e) => e.status().map(|s| s.as_u16()),
            NotifyError::MissingCredentials => None,
        }
    }
}

/// Invalid process configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} is not a valid URL: {value}")]
    InvalidUrl { name: &'static str, value: String },
}
