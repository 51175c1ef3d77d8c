//! # visita-std
//!
//! Standard dispatch strategy implementations for the visita demonstration.
//!
//! This crate provides three interchangeable implementations of the
//! [`Dispatcher`](visita_core::Dispatcher) contract:
//!
//! - **Classic**: [`ClassicDispatcher`] - the value routes itself through
//!   [`Command::accept`](visita_core::Command::accept)
//! - **Inline**: [`InlineDispatcher`] - an exhaustive `match` at the point
//!   of use
//! - **Table**: [`TableDispatcher`] - a variant-keyed map of closure-bound
//!   handler actions
//!
//! All three emit byte-identical output for the same input sequence; they
//! exist side by side to contrast where each one's exhaustiveness check
//! lives.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core contracts
pub use visita_core;

// Modules
pub mod classic;
pub mod inline;
pub mod table;
pub mod testing;

pub use classic::ClassicDispatcher;
pub use inline::InlineDispatcher;
pub use table::{TableDispatcher, TableDispatcherBuilder, TableHandler};
