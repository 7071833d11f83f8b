/// CLI argument definitions via clap derive.
use clap::Parser;

/// esvcli: print a Bible passage from the ESV API.
#[derive(Debug, Parser)]
#[command(
    name = "esvcli",
    about = "Print a Bible passage from the ESV API",
    version,
    after_help = "Reads the API token from ESV_API_KEY."
)]
pub struct Cli {
    /// Passage reference, e.g. "John 3:16" or "Romans 8:28-39".
    /// Quote it when it contains spaces.
    #[arg(value_name = "REFERENCE")]
    pub reference: Option<String>,

    /// Print request timing and response status to stderr.
    #[arg(long)]
    pub debug: bool,
}
