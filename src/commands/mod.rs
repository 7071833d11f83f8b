/// Command dispatch: resolve inputs, then run the passage lookup.
pub mod passage;

use std::io::Write;

use crate::cli::Cli;
use crate::cli::output::DebugTimer;
use crate::config::Config;
use crate::esv::{EsvError, HttpTransport};

/// Validate the argument, then the key, then perform the lookup.
///
/// A blank reference counts as missing.
///
/// No network I/O happens until both inputs are present.
///
/// # Errors
///
/// `MissingReference` without an argument, `MissingApiKey` without a token,
/// otherwise whatever the lookup reports.
pub fn dispatch<W: Write>(cli: &Cli, out: &mut W) -> Result<(), EsvError> {
    let reference = cli
        .reference
        .as_deref()
        .filter(|r| !r.trim().is_empty())
        .ok_or(EsvError::MissingReference)?;
    let config = Config::from_env()?;

    let t_client = DebugTimer::start("build_client");
    let transport = HttpTransport::new(config.timeout)?;
    drop(t_client);

    passage::run(reference, &config, &transport, out)
}
