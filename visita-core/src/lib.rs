//! # visita-core
//!
//! Core types and contracts for the visita dispatch demonstration.
//!
//! This crate has minimal dependencies and defines the three pieces every
//! dispatch strategy shares:
//!
//! - [`Command`] - the closed sum type of four payload-free variants
//! - [`CommandVisitor`] - the capability set a handler must cover, one
//!   `visit_*` method per variant
//! - [`Dispatcher`] - the strategy contract: one output line per command,
//!   in sequence order
//!
//! Strategy implementations live in `visita-std`; this crate only fixes the
//! vocabulary they agree on.
//!
//! # Error Types
//!
//! - [`DispatchError`] - Failures while dispatching a command
//! - [`TableBuildError`] - Failures while assembling a dispatch table

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub mod command;
pub mod dispatcher;
pub mod error;
pub mod visitor;

pub use command::Command;
pub use dispatcher::Dispatcher;
pub use error::{DispatchError, TableBuildError};
pub use visitor::CommandVisitor;
