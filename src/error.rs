//! Input validation errors
//!
//! Raised at the session boundary before malformed input can reach the
//! cursor, judgement pipeline, or kiai state machine. Those components
//! assume well-formed input and never fail themselves.

use thiserror::Error;

/// Rejected input from one of the host's event streams
#[derive(Debug, Error)]
pub enum InputError {
    /// Hit window closes before it opens
    #[error("Invalid hit window: end {end} is before start {start}")]
    InvalidHitWindow { start: f64, end: f64 },

    /// A numeric field is NaN or infinite
    #[error("Non-finite value in {field}")]
    NonFiniteValue { field: &'static str },

    /// Beat length must be strictly positive
    #[error("Invalid beat length: {beat_length}")]
    InvalidBeatLength { beat_length: f64 },

    /// Session config value outside its usable range
    #[error("Invalid session config: {field} = {value}")]
    InvalidConfig { field: &'static str, value: f64 },

    /// Frame time earlier than the previous frame
    #[error("Frame time went backwards: {now} after {previous}")]
    TimeWentBackwards { previous: f64, now: f64 },

    /// Hit objects must arrive ordered by window start
    #[error("Hit object out of order: window start {next} after {previous}")]
    HitObjectOutOfOrder { previous: f64, next: f64 },

    /// Event delivered after the session ended
    #[error("Session has ended")]
    SessionEnded,

    /// Settings or session script could not be parsed
    #[error("Config parse failed: {0}")]
    Config(#[from] serde_json::Error),
}

/// Reject NaN/inf for a named field
pub(crate) fn ensure_finite(value: f64, field: &'static str) -> Result<(), InputError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(InputError::NonFiniteValue { field })
    }
}
