use thiserror::Error;

/// Pre-flight rejection. The message is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Invalid email address!")]
    InvalidEmail,

    #[error("Your message should contain at least {min} characters!")]
    MessageTooShort { min: usize },
}

/// Failure reported by the delivery transport. Timeouts are not part of this
/// enum: the pipeline detects them by racing the transport against a timer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("transport is not configured: {0} is missing")]
    MissingConfig(&'static str),

    #[error("request rejected with status {status}: {text}")]
    Rejected { status: u16, text: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("payload encoding failed: {0}")]
    Encoding(String),
}
