//! Classic double-dispatch strategy.

use std::io::Write;
use visita_core::{Command, CommandVisitor, DispatchError, Dispatcher};

/// Dispatcher backed by classic double dispatch.
///
/// The command routes itself: [`Command::accept`] selects the matching
/// `visit_*` capability on this type, and each capability writes one label
/// line to the sink. Because [`CommandVisitor`] has one required method per
/// variant, a new variant cannot appear without this type failing to
/// compile.
///
/// # Example
///
/// ```rust
/// use visita_core::Dispatcher;
/// use visita_std::ClassicDispatcher;
/// use visita_core::Command;
///
/// let mut dispatcher = ClassicDispatcher::new(Vec::new());
/// dispatcher.dispatch_all(&[Command::Start, Command::Stop]).unwrap();
/// let output = String::from_utf8(dispatcher.into_inner()).unwrap();
/// assert_eq!(output, "StartCommand\nStopCommand\n");
/// ```
pub struct ClassicDispatcher<W> {
    writer: W,
}

impl<W: Write> ClassicDispatcher<W> {
    /// Create a dispatcher writing label lines to `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the dispatcher, returning its sink.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn emit(&mut self, label: &'static str) -> Result<(), DispatchError> {
        writeln!(self.writer, "{label}")?;
        Ok(())
    }
}

impl<W: Write> CommandVisitor for ClassicDispatcher<W> {
    type Error = DispatchError;

    fn visit_start(&mut self) -> Result<(), DispatchError> {
        self.emit(Command::Start.label())
    }

    fn visit_stop(&mut self) -> Result<(), DispatchError> {
        self.emit(Command::Stop.label())
    }

    fn visit_get_status(&mut self) -> Result<(), DispatchError> {
        self.emit(Command::GetStatus.label())
    }

    fn visit_get_targets(&mut self) -> Result<(), DispatchError> {
        self.emit(Command::GetTargets.label())
    }
}

impl<W: Write> Dispatcher for ClassicDispatcher<W> {
    type Error = DispatchError;

    fn dispatch(&mut self, command: Command) -> Result<(), DispatchError> {
        tracing::trace!(command = %command, strategy = "classic", "dispatching");
        command.accept(self)
    }
}
