//! Runtime error types for the tape interpreter
//!
//! This module defines [`RuntimeError`], which represents all errors that can occur
//! while loading or executing a tape program.
//!
//! All runtime errors are fatal: they halt execution and no partial output is returned.

use std::fmt;

/// Which way a bracket structure is unbalanced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketFault {
    /// A `]` appeared with no outstanding `[`
    UnmatchedClose,
    /// A `[` was still open when the program ended
    UnclosedOpen,
}

/// Runtime errors that can occur during loading or execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// Unbalanced loop brackets in the filtered instruction stream
    MalformedProgram {
        fault: BracketFault,
        position: usize,
    },

    /// Cursor moved left of cell 0
    TapeUnderflow { position: usize },

    /// A `,` received a character whose code point does not fit in a cell
    InputOutOfRange { ch: char, position: usize },

    /// The input source could not supply a character
    InputUnavailable { message: String },

    /// `provide_input` was called while no `,` was pending
    InputNotExpected { position: usize },

    /// Snapshot history limit exceeded
    SnapshotLimitExceeded { current: usize, limit: usize },

    /// History/snapshot navigation failed
    HistoryOperationFailed { message: String },
}

impl RuntimeError {
    /// Instruction position the error refers to, when there is one
    pub fn position(&self) -> Option<usize> {
        match self {
            RuntimeError::MalformedProgram { position, .. } => Some(*position),
            RuntimeError::TapeUnderflow { position } => Some(*position),
            RuntimeError::InputOutOfRange { position, .. } => Some(*position),
            RuntimeError::InputNotExpected { position } => Some(*position),
            RuntimeError::InputUnavailable { .. } => None,
            RuntimeError::SnapshotLimitExceeded { .. } => None,
            RuntimeError::HistoryOperationFailed { .. } => None,
        }
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::MalformedProgram { fault, position } => match fault {
                BracketFault::UnmatchedClose => write!(
                    f,
                    "Malformed program: ']' at instruction {} has no matching '['",
                    position
                ),
                BracketFault::UnclosedOpen => write!(
                    f,
                    "Malformed program: '[' at instruction {} is never closed",
                    position
                ),
            },
            RuntimeError::TapeUnderflow { position } => {
                write!(
                    f,
                    "Tape underflow: cursor moved left of cell 0 at instruction {}",
                    position
                )
            }
            RuntimeError::InputOutOfRange { ch, position } => {
                write!(
                    f,
                    "Input '{}' (U+{:04X}) does not fit in a cell at instruction {}",
                    ch, *ch as u32, position
                )
            }
            RuntimeError::InputUnavailable { message } => {
                write!(f, "Input unavailable: {}", message)
            }
            RuntimeError::InputNotExpected { position } => {
                write!(
                    f,
                    "Input supplied but instruction {} is not waiting for input",
                    position
                )
            }
            RuntimeError::SnapshotLimitExceeded { current, limit } => {
                write!(
                    f,
                    "Snapshot memory limit exceeded: {} bytes used, limit is {}",
                    current, limit
                )
            }
            RuntimeError::HistoryOperationFailed { message } => {
                write!(f, "History operation failed: {}", message)
            }
        }
    }
}

impl std::error::Error for RuntimeError {}
