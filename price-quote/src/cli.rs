use clap::Parser;
use std::path::PathBuf;

/// Price catalog lines from JSON.
///
/// Reads one request object or an array of them and writes the priced
/// results as JSON to stdout.
#[derive(Debug, Parser)]
#[command(name = "price-quote", version)]
pub struct Args {
    /// Input file (reads stdin when omitted)
    #[arg(short, long, env = "QUOTE_INPUT")]
    pub input: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long, env = "QUOTE_PRETTY")]
    pub pretty: bool,

    /// Reject invalid requests instead of coercing them
    #[arg(long, env = "QUOTE_STRICT")]
    pub strict: bool,
}
