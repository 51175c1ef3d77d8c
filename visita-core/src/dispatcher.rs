//! Dispatcher contract shared by every strategy.

use crate::command::Command;

/// A dispatcher that routes each command to its variant-specific handler.
///
/// Implementations differ only in *how* the handler is selected: via the
/// value's own [`accept`](Command::accept), via a `match` at the point of
/// use, or via a table lookup. The observable contract is identical: one
/// label line per command, in sequence order, with nothing remembered
/// between calls.
pub trait Dispatcher {
    /// The error type returned by dispatch operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Dispatch a single command to its handler.
    fn dispatch(&mut self, command: Command) -> Result<(), Self::Error>;

    /// Dispatch an entire sequence in order, stopping at the first error.
    fn dispatch_all(&mut self, commands: &[Command]) -> Result<(), Self::Error> {
        for &command in commands {
            self.dispatch(command)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Command, Dispatcher};
    use std::convert::Infallible;

    /// Minimal dispatcher that records what it saw.
    #[derive(Default)]
    struct Recorder {
        seen: Vec<Command>,
    }

    impl Dispatcher for Recorder {
        type Error = Infallible;

        fn dispatch(&mut self, command: Command) -> Result<(), Infallible> {
            self.seen.push(command);
            Ok(())
        }
    }

    #[test]
    fn dispatch_all_preserves_sequence_order() {
        let sequence = [Command::Stop, Command::Start, Command::Stop];
        let mut recorder = Recorder::default();
        recorder.dispatch_all(&sequence).unwrap();
        assert_eq!(recorder.seen, sequence);
    }

    #[test]
    fn dispatch_all_of_empty_sequence_is_a_no_op() {
        let mut recorder = Recorder::default();
        recorder.dispatch_all(&[]).unwrap();
        assert!(recorder.seen.is_empty());
    }
}
