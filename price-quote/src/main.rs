//! price-quote — price catalog lines from JSON
//!
//! Thin driver around `wholesale-pricing`: reads raw requests, coerces and
//! optionally validates them, prints priced results.

mod cli;
mod config;
mod logger;
mod quote;

use anyhow::Result;
use clap::Parser;
use cli::Args;
use config::Config;

fn main() -> Result<()> {
    // Load .env file
    let _ = dotenv::dotenv();

    let config = Config::from_env();
    logger::init_logger(&config.log_level, config.log_dir.as_deref());

    let args = Args::parse();
    let strict = args.strict;

    tracing::debug!(env = %config.environment, strict, "Starting price-quote");

    let text = quote::read_input(args.input.as_deref())?;
    let input = quote::parse_input(&text)?;

    let value = match quote::quote(input, strict) {
        Ok(value) => value,
        Err(e) => {
            tracing::error!("Quote failed: {:#}", e);
            return Err(e);
        }
    };

    println!("{}", quote::render(&value, args.pretty)?);
    Ok(())
}
