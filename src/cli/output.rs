/// Output formatting: passage block, usage, errors. Logging setup.
use std::io::{self, IsTerminal, Write};

use tracing::debug;
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::API_KEY_VAR;
use crate::esv::{EsvError, Passage};

/// Width of the rule printed above and below a passage.
pub const DIVIDER_WIDTH: usize = 60;

/// Install the stderr log subscriber.
///
/// Defaults to `warn`; `debug` raises this crate to `debug`. `RUST_LOG`
/// directives are applied on top.
pub fn init_logging(debug: bool) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    let filter = match (debug, concat!(env!("CARGO_CRATE_NAME"), "=debug").parse::<Directive>()) {
        (true, Ok(directive)) => filter.add_directive(directive),
        _ => filter,
    };

    // A subscriber may already be installed (tests); keep it.
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal())
                .with_target(false),
        )
        .with(filter)
        .try_init();
}

// --- Passage ---

/// Write the passage block: divider, "<canonical> (ESV)", blank line, text, divider.
///
/// # Errors
///
/// Propagates write failures.
pub fn write_passage<W: Write>(out: &mut W, passage: &Passage) -> io::Result<()> {
    let divider = "=".repeat(DIVIDER_WIDTH);
    writeln!(out, "{divider}")?;
    writeln!(out, "{} (ESV)", passage.canonical)?;
    writeln!(out)?;
    writeln!(out, "{}", passage.text)?;
    writeln!(out, "{divider}")?;
    out.flush()
}

// --- Usage ---

/// Write usage and an example invocation. Goes to stdout.
pub fn write_usage<W: Write>(out: &mut W) {
    let bin = env!("CARGO_PKG_NAME");
    let _ = writeln!(out, "Usage: {bin} \"<reference>\"");
    let _ = writeln!(out, "Example: {bin} \"John 3:16\"");
    let _ = writeln!(out);
    let _ = writeln!(out, "The API token is read from {API_KEY_VAR}.");
}

// --- Error output ---

/// Write an error to stderr-style output, plus the API detail if there is one.
pub fn write_error<W: Write>(out: &mut W, err: &EsvError) {
    let _ = writeln!(out, "Error: {err}");
    if let EsvError::NotFound {
        detail: Some(detail),
        ..
    } = err
    {
        let _ = writeln!(out, "API Detail: {detail}");
    }
}

// --- Debug timer ---

/// A RAII timer that logs elapsed milliseconds at debug level on drop.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
}

impl DebugTimer {
    #[must_use]
    pub fn start(label: &'static str) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        let ms = self.start.elapsed().as_secs_f64() * 1000.0;
        debug!(stage = self.label, "{ms:.2}ms");
    }
}
