//! The capability-set visitor trait.

/// The full capability set a handler must provide to cover every
/// [`Command`](crate::Command) variant.
///
/// There are no default method bodies: a visitor that misses a capability
/// does not compile. That refusal is the whole point of the classic
/// double-dispatch strategy: exhaustiveness is checked at build time, not
/// discovered at dispatch time.
pub trait CommandVisitor {
    /// The error a capability may produce while handling its variant.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Handle [`Command::Start`](crate::Command::Start).
    fn visit_start(&mut self) -> Result<(), Self::Error>;

    /// Handle [`Command::Stop`](crate::Command::Stop).
    fn visit_stop(&mut self) -> Result<(), Self::Error>;

    /// Handle [`Command::GetStatus`](crate::Command::GetStatus).
    fn visit_get_status(&mut self) -> Result<(), Self::Error>;

    /// Handle [`Command::GetTargets`](crate::Command::GetTargets).
    fn visit_get_targets(&mut self) -> Result<(), Self::Error>;
}
