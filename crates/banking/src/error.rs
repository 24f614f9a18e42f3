//! Banking domain error model.

use thiserror::Error;

/// Result type used across the banking domain.
pub type ProcessResult<T> = Result<T, ProcessError>;

/// Error raised while applying an event to an account.
///
/// All variants terminate the current operation: there is no retry and no
/// partial application. A failed event leaves the account exactly as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProcessError {
    /// A withdrawal amount exceeded the current balance.
    #[error("insufficient funds: requested {requested}, balance {balance}")]
    InsufficientFunds { requested: i64, balance: i64 },

    /// An envelope carried an event-type name the dispatcher does not know.
    #[error("unknown event: {0}")]
    UnknownEvent(String),

    /// An envelope payload did not match the shape of its declared event type.
    #[error("invalid payload for {event_type}: {message}")]
    InvalidPayload { event_type: String, message: String },
}

impl ProcessError {
    pub fn insufficient_funds(requested: i64, balance: i64) -> Self {
        Self::InsufficientFunds { requested, balance }
    }

    pub fn unknown_event(name: impl Into<String>) -> Self {
        Self::UnknownEvent(name.into())
    }

    pub fn invalid_payload(event_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPayload {
            event_type: event_type.into(),
            message: message.into(),
        }
    }
}
