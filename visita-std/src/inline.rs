//! Inline match-based dispatch strategy.

use std::io::Write;
use visita_core::{Command, DispatchError, Dispatcher};

/// Dispatcher that selects the handler with an exhaustive `match` at the
/// point of use.
///
/// This is the tag-match rendering of runtime type inspection: instead of
/// asking the value to route itself, the dispatcher inspects the variant
/// where the command arrives and invokes the matching handler method.
/// Matching on a closed enum recovers at compile time the exhaustiveness
/// that genuine runtime inspection only checks when the code path runs.
pub struct InlineDispatcher<W> {
    writer: W,
}

impl<W: Write> InlineDispatcher<W> {
    /// Create a dispatcher writing label lines to `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the dispatcher, returning its sink.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn handle_start(&mut self) -> Result<(), DispatchError> {
        writeln!(self.writer, "{}", Command::Start.label())?;
        Ok(())
    }

    fn handle_stop(&mut self) -> Result<(), DispatchError> {
        writeln!(self.writer, "{}", Command::Stop.label())?;
        Ok(())
    }

    fn handle_get_status(&mut self) -> Result<(), DispatchError> {
        writeln!(self.writer, "{}", Command::GetStatus.label())?;
        Ok(())
    }

    fn handle_get_targets(&mut self) -> Result<(), DispatchError> {
        writeln!(self.writer, "{}", Command::GetTargets.label())?;
        Ok(())
    }
}

impl<W: Write> Dispatcher for InlineDispatcher<W> {
    type Error = DispatchError;

    fn dispatch(&mut self, command: Command) -> Result<(), DispatchError> {
        tracing::trace!(command = %command, strategy = "inline", "dispatching");
        match command {
            Command::Start => self.handle_start(),
            Command::Stop => self.handle_stop(),
            Command::GetStatus => self.handle_get_status(),
            Command::GetTargets => self.handle_get_targets(),
        }
    }
}
