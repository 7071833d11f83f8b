#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! esvcli: print a Bible passage from the ESV API.

mod cli;
mod commands;
mod config;
mod esv;

use clap::Parser;

use cli::{Cli, init_logging, write_error, write_usage};
use esv::EsvError;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let result = commands::dispatch(&cli, &mut std::io::stdout().lock());
    match result {
        Ok(()) => {}
        Err(err @ EsvError::MissingReference) => {
            write_usage(&mut std::io::stdout().lock());
            std::process::exit(err.exit_code());
        }
        Err(err) => {
            write_error(&mut std::io::stderr().lock(), &err);
            std::process::exit(err.exit_code());
        }
    }
}
