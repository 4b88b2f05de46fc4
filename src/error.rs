// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for note conversion and position handling.

use thiserror::Error;

/// Errors raised by note-name and note-number conversions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoteError {
    /// A parsed note name computes to a number outside 0-127
    #[error("The note {name} is not in the range of a midi note number (0-127), number is {number}")]
    OutOfRange { name: String, number: i64 },

    /// A note number outside 0-127
    #[error("The number {0} is not in the range of a midi note number (0-127)")]
    NumberOutOfRange(i32),

    /// Unknown letter, stray characters or a non-numeric octave
    #[error("Malformed note name: {0:?}")]
    Malformed(String),
}

/// Errors raised by position construction and transformation
#[derive(Debug, Error)]
pub enum PositionError {
    /// Operation needs at least one note
    #[error("Cannot {0} an empty position")]
    EmptyCollection(&'static str),

    /// Parallel sequences disagree in length
    #[error("Length mismatch: {left_name} has {left} entries, {right_name} has {right}")]
    LengthMismatch {
        left_name: &'static str,
        left: usize,
        right_name: &'static str,
        right: usize,
    },

    /// JSON export could not be read back
    #[error("Invalid position JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl PositionError {
    pub(crate) fn check_lengths(
        left_name: &'static str,
        left: usize,
        right_name: &'static str,
        right: usize,
    ) -> Result<(), PositionError> {
        if left != right {
            return Err(PositionError::LengthMismatch {
                left_name,
                left,
                right_name,
                right,
            });
        }
        Ok(())
    }
}
