//! Error types for the gather client.

use thiserror::Error;

/// Errors that can occur in gather operations.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GatherError {
    #[error("Rating must be between 1 and 5")]
    RatingOutOfRange,

    #[error("Comment text must not be empty")]
    EmptyComment,

    #[error("Another request for this event is still in flight")]
    ActionInFlight,

    #[error("Cannot {action} while the event is in the {state} state")]
    IllegalAction {
        action: &'static str,
        state: &'static str,
    },

    #[error("Invalid session transition: {0}")]
    InvalidSessionTransition(&'static str),
}

/// Result type alias for gather operations.
pub type GatherResult<T> = Result<T, GatherError>;
