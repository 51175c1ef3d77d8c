//! The closed command variant set.

use crate::visitor::CommandVisitor;

/// A control command, one of four closed variants.
///
/// Variants carry no payload; each is a pure tag identifying which
/// operation is requested. The interesting part of this crate is not what
/// the commands *do* but how they are routed to their handlers, so the
/// type is deliberately as small as possible: `Copy`, `Eq`, `Hash`, and
/// nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Begin operating.
    Start,
    /// Cease operating.
    Stop,
    /// Report current status.
    GetStatus,
    /// Report the known targets.
    GetTargets,
}

impl Command {
    /// Every variant, in declaration order.
    ///
    /// Table-based dispatchers iterate this to register a handler per
    /// variant; tests iterate it to prove coverage.
    pub const ALL: [Command; 4] = [
        Command::Start,
        Command::Stop,
        Command::GetStatus,
        Command::GetTargets,
    ];

    /// The stable label identifying this variant.
    ///
    /// This is the observable output of a dispatch: every strategy emits
    /// exactly this string, once, for each command it processes.
    pub const fn label(self) -> &'static str {
        match self {
            Command::Start => "StartCommand",
            Command::Stop => "StopCommand",
            Command::GetStatus => "GetStatusCommand",
            Command::GetTargets => "GetTargetsCommand",
        }
    }

    /// Classic double dispatch: route `self` to the matching capability on
    /// `visitor`.
    ///
    /// The match is exhaustive over the closed set, so a fifth variant
    /// cannot be added without extending [`CommandVisitor`]. That is the
    /// compile-time guarantee distinguishing this strategy from the
    /// table-based one.
    pub fn accept<V: CommandVisitor>(self, visitor: &mut V) -> Result<(), V::Error> {
        match self {
            Command::Start => visitor.visit_start(),
            Command::Stop => visitor.visit_stop(),
            Command::GetStatus => visitor.visit_get_status(),
            Command::GetTargets => visitor.visit_get_targets(),
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
