//! Demonstration entry point: the same fixed command sequence pushed
//! through all three dispatch strategies.
//!
//! Each run emits one label line per command; the three runs are separated
//! by a single blank line. Diagnostics go to stderr via `tracing` so the
//! contractual stdout stream stays clean.

use std::io::{self, IsTerminal, Read, Write};

use anyhow::Context;
use tracing_subscriber::EnvFilter;
use visita::prelude::*;

/// The hard-coded input sequence, in dispatch order.
const SEQUENCE: [Command; 4] = [
    Command::GetStatus,
    Command::GetTargets,
    Command::Start,
    Command::Stop,
];

fn main() -> anyhow::Result<()> {
    init_telemetry()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    run_strategies(&mut out)?;
    out.flush().context("flushing stdout")?;

    wait_for_keypress().context("waiting for keypress")?;
    Ok(())
}

/// Run classic, inline, and table dispatch over [`SEQUENCE`], writing one
/// blank separator line between consecutive runs.
fn run_strategies(out: &mut dyn Write) -> Result<(), DispatchError> {
    tracing::debug!(strategy = "classic", "running");
    ClassicDispatcher::new(&mut *out).dispatch_all(&SEQUENCE)?;
    writeln!(out)?;

    tracing::debug!(strategy = "inline", "running");
    InlineDispatcher::new(&mut *out).dispatch_all(&SEQUENCE)?;
    writeln!(out)?;

    tracing::debug!(strategy = "table", "running");
    TableDispatcher::new(&mut *out).dispatch_all(&SEQUENCE)?;
    Ok(())
}

/// Install the global tracing subscriber, writing to stderr.
///
/// The filter comes from `RUST_LOG` and defaults to `warn`, so a plain run
/// prints nothing but the dispatch output.
fn init_telemetry() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install telemetry subscriber: {err}"))
}

/// Mirror the interactive-console behaviour: block for one byte when a
/// human is attached, fall through when stdin is piped or closed.
fn wait_for_keypress() -> io::Result<()> {
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        return Ok(());
    }
    let mut byte = [0u8; 1];
    stdin.lock().read(&mut byte)?;
    Ok(())
}
