//! Quote pipeline: raw JSON in, priced JSON out

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use serde_json::Value;
use std::io::Read;
use std::path::Path;
use wholesale_pricing::{PriceRequest, RawPriceRequest, price_batch, validate_request};

/// Input document: a single request or a listing
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum QuoteInput {
    // Must come first: a struct would also accept a JSON array positionally
    Many(Vec<RawPriceRequest>),
    One(RawPriceRequest),
}

/// Read the input document from a file, or stdin when no path is given
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

pub fn parse_input(text: &str) -> Result<QuoteInput> {
    serde_json::from_str(text).context("Input is neither a request object nor an array of requests")
}

/// Price every request in the document.
///
/// In strict mode the first invalid request aborts the quote. Otherwise
/// invalid requests are logged and priced with coerced values.
pub fn quote(input: QuoteInput, strict: bool) -> Result<Value> {
    let (raws, single) = match input {
        QuoteInput::One(raw) => (vec![raw], true),
        QuoteInput::Many(raws) => (raws, false),
    };

    let requests: Vec<PriceRequest> = raws.iter().map(PriceRequest::from_raw).collect();

    for (index, request) in requests.iter().enumerate() {
        if let Err(e) = validate_request(request) {
            if strict {
                bail!("Request #{index} rejected: {e}");
            }
            tracing::warn!(index, error = %e, "Pricing request with coerced values");
        }
    }

    let results = price_batch(&requests);
    tracing::info!(count = results.len(), "Priced quote");

    let value = if single {
        serde_json::to_value(&results[0])
    } else {
        serde_json::to_value(&results)
    }
    .context("Failed to serialize results")?;

    Ok(value)
}

pub fn render(value: &Value, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("Failed to render output")?;
    Ok(text)
}
