//! Table-based dispatch strategy.

use std::collections::HashMap;
use std::io::{self, Write};
use visita_core::{Command, DispatchError, Dispatcher, TableBuildError};

/// A closure-bound handler action stored in the dispatch table.
///
/// The closure captures everything variant-specific (the label); the sink
/// is passed in at dispatch time because the dispatcher owns it.
pub type TableHandler<W> = Box<dyn Fn(&mut W) -> io::Result<()> + Send + Sync>;

/// Dispatcher backed by a variant-keyed table of handler closures.
///
/// The table is built once at construction and never mutated afterwards.
/// Unlike the match-based strategies, nothing forces the table to cover the
/// closed variant set: a lookup miss is a real runtime failure,
/// [`DispatchError::UnroutedCommand`], surfaced immediately rather than
/// swallowed. That deferred exhaustiveness check is the price this strategy
/// pays for being assembled from values instead of from code.
pub struct TableDispatcher<W> {
    handlers: HashMap<Command, TableHandler<W>>,
    writer: W,
}

impl<W: Write> TableDispatcher<W> {
    /// Build the total table: one label-printing handler per variant.
    ///
    /// Iterating [`Command::ALL`] cannot produce a duplicate key, so this
    /// constructor is infallible.
    pub fn new(writer: W) -> Self {
        let mut handlers: HashMap<Command, TableHandler<W>> =
            HashMap::with_capacity(Command::ALL.len());
        for command in Command::ALL {
            let label = command.label();
            handlers.insert(command, Box::new(move |w: &mut W| writeln!(w, "{label}")));
        }
        Self { handlers, writer }
    }

    /// Consume the dispatcher, returning its sink.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Whether the table holds a handler for `command`.
    pub fn is_routed(&self, command: Command) -> bool {
        self.handlers.contains_key(&command)
    }
}

impl<W: Write> Dispatcher for TableDispatcher<W> {
    type Error = DispatchError;

    fn dispatch(&mut self, command: Command) -> Result<(), DispatchError> {
        tracing::trace!(command = %command, strategy = "table", "dispatching");
        let handler = self
            .handlers
            .get(&command)
            .ok_or(DispatchError::UnroutedCommand {
                label: command.label(),
            })?;
        handler(&mut self.writer)?;
        Ok(())
    }
}

/// Builder for [`TableDispatcher`], for assembling the table entry by
/// entry.
///
/// [`TableDispatcher::new`] is the common path; the builder exists so a
/// caller (usually a test) can construct a deliberately partial table and
/// observe the lookup-failure mode, or register non-standard handlers.
pub struct TableDispatcherBuilder<W> {
    handlers: HashMap<Command, TableHandler<W>>,
}

impl<W> Default for TableDispatcherBuilder<W> {
    fn default() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }
}

impl<W: Write> TableDispatcherBuilder<W> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `command`.
    ///
    /// Registering the same variant twice is a build error.
    pub fn insert(
        &mut self,
        command: Command,
        handler: TableHandler<W>,
    ) -> Result<(), TableBuildError> {
        if self.handlers.contains_key(&command) {
            return Err(TableBuildError::DuplicateEntry {
                label: command.label(),
            });
        }
        self.handlers.insert(command, handler);
        Ok(())
    }

    /// Register the standard label-printing handler for `command`.
    pub fn insert_label(&mut self, command: Command) -> Result<(), TableBuildError> {
        let label = command.label();
        self.insert(command, Box::new(move |w: &mut W| writeln!(w, "{label}")))
    }

    /// Freeze the table and attach the output sink.
    pub fn build(self, writer: W) -> TableDispatcher<W> {
        TableDispatcher {
            handlers: self.handlers,
            writer,
        }
    }
}
