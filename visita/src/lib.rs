//! # visita: one dispatch contract, three strategies
//!
//! `visita` demonstrates the Visitor pattern over a closed set of four
//! command variants, dispatched three different ways:
//!
//! - **Classic double dispatch**: the value routes itself through
//!   [`Command::accept`] into a [`CommandVisitor`] capability set.
//!   Exhaustiveness is checked when the visitor is compiled.
//! - **Inline dispatch**: the dispatcher matches on the variant at the
//!   point of use. Exhaustiveness is checked when the `match` is compiled.
//! - **Table dispatch**: a variant-keyed map of closure-bound handlers,
//!   built once and immutable afterwards. Exhaustiveness is never checked;
//!   a missing entry surfaces as a lookup error at dispatch time.
//!
//! All three implement the same [`Dispatcher`] contract and emit
//! byte-identical output for the same input sequence.
//!
//! ## Quick Start
//!
//! ```rust
//! use visita::prelude::*;
//!
//! let mut dispatcher = InlineDispatcher::new(Vec::new());
//! dispatcher.dispatch_all(&[Command::GetStatus, Command::Start])?;
//!
//! let output = String::from_utf8(dispatcher.into_inner()).unwrap();
//! assert_eq!(output, "GetStatusCommand\nStartCommand\n");
//! # Ok::<(), visita::DispatchError>(())
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use visita_core::{Command, CommandVisitor, DispatchError, Dispatcher, TableBuildError};

pub use visita_std::{
    ClassicDispatcher, InlineDispatcher, TableDispatcher, TableDispatcherBuilder, TableHandler,
};

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use visita_std::testing::*;
}

/// Prelude module - common imports for visita.
///
/// # Usage
///
/// ```rust,ignore
/// use visita::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        ClassicDispatcher,
        Command,
        CommandVisitor,
        DispatchError,
        Dispatcher,
        InlineDispatcher,
        TableBuildError,
        TableDispatcher,
        TableDispatcherBuilder,
    };
}
