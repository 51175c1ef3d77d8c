//! Error types for dispatch and table construction.
//!
//! The hierarchy is small because the failure surface is small:
//!
//! - [`DispatchError`] - a command could not be dispatched
//! - [`TableBuildError`] - a dispatch table could not be assembled
//!
//! A missing table entry is a programming error, not a recoverable
//! condition; it is surfaced eagerly rather than swallowed.

use thiserror::Error;

/// Errors that can occur while dispatching a command.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The dispatch table holds no handler for this command.
    ///
    /// Structurally impossible for the match-based strategies; a real
    /// runtime failure mode for the table-based one.
    #[error("no handler registered for command: {label}")]
    UnroutedCommand {
        /// Label of the command that missed the table.
        label: &'static str,
    },

    /// A handler failed to write its line to the output sink.
    #[error("handler failed to write to output sink")]
    Sink(#[from] std::io::Error),
}

/// Errors that can occur while building a dispatch table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableBuildError {
    /// A handler was registered twice for the same command.
    #[error("handler already registered for command: {label}")]
    DuplicateEntry {
        /// Label of the doubly-registered command.
        label: &'static str,
    },
}
