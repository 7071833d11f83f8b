/// CLI layer: argument parsing, logging setup and output formatting.
pub mod args;
pub mod output;

pub use args::Cli;
pub use output::{init_logging, write_error, write_usage};
