//! Defines the error types used throughout the crossword synthesis core.
//! This module provides a structured way to handle the error kinds the
//! core surfaces to its callers: a failed synthesis, an unknown puzzle id,
//! a malformed request, or an opaque failure from the persistence backend.

use std::fmt;

/// `CoreError` is the single error type returned by every public operation
/// in this crate: the synthesizer, the numbering/export helpers, and the
/// generation driver and query interface built on top of them.
#[derive(Debug)]
pub enum CoreError {
    /// The requested grid size fell outside `5..15`.
    ///
    /// The producer interface (`driver::generate`) never returns this
    /// variant itself — it clamps silently per spec — but the lower-level
    /// `synth::synthesize` entry point surfaces it to callers that bypass
    /// the driver.
    InvalidSize { requested: usize },
    /// After normalization and filtering, too few candidates remained, or
    /// every attempt placed zero words.
    InsufficientWords { available: usize },
    /// `get`, `check`, `hint`, or `delete` referenced an unknown puzzle id.
    NotFound { id: String },
    /// `hint` referenced a `(number, orientation)` pair with no stored
    /// answer.
    UnknownClue { number: u32, orientation: String },
    /// `check`/`hint` were called without the fields they require.
    BadRequest { message: String },
    /// The persistence backend failed in a way this core does not
    /// interpret further.
    Internal { message: String },
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CoreError::InvalidSize { requested } => {
                write!(f, "requested size {requested} is outside the supported 5..15 range")
            }
            CoreError::InsufficientWords { available } => {
                write!(
                    f,
                    "insufficient candidate words to synthesize a puzzle ({available} usable)"
                )
            }
            CoreError::NotFound { id } => write!(f, "no puzzle found for id \"{id}\""),
            CoreError::UnknownClue { number, orientation } => {
                write!(f, "no clue {number}-{orientation} exists on this puzzle")
            }
            CoreError::BadRequest { message } => write!(f, "bad request: {message}"),
            CoreError::Internal { message } => write!(f, "internal error: {message}"),
        }
    }
}

impl std::error::Error for CoreError {}
