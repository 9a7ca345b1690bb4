//! # wholesale-pricing
//!
//! Deterministic price calculator for a wholesale-distribution catalog.
//!
//! ## Scope
//!
//! Given a supplier list price and the commercial parameters of an item, this
//! crate computes:
//! - the taxed base price
//! - the unit sale price (list and cash)
//! - the pack totals (list and cash), with the pack discount when it applies
//!
//! Everything is exact `Decimal` arithmetic with half-up rounding to 2
//! decimals at the very end. The calculator holds no state and performs no
//! I/O; persistence, HTTP and spreadsheet ingestion live with the callers.
//!
//! ## Example
//!
//! ```
//! use rust_decimal::Decimal;
//! use wholesale_pricing::{PriceRequest, price};
//!
//! let request = PriceRequest {
//!     list_price: Decimal::ONE_HUNDRED,
//!     tax_rate: Decimal::new(12, 2),
//!     pack_size: Decimal::from(6),
//!     ..Default::default()
//! };
//!
//! let result = price(&request);
//! assert_eq!(result.unit.to_string(), "112.00");
//! assert_eq!(result.pack_total.to_string(), "672.00");
//! ```

pub mod coerce;
mod calculator;
mod error;
pub mod money;
mod request;
mod result;
mod sources;
mod validation;

// Re-exports
pub use calculator::{price, price_batch};
pub use error::{PricingError, PricingResult};
pub use money::quantize;
pub use request::{PriceRequest, RawPriceRequest};
pub use result::{PriceDiagnostics, PriceResult};
pub use sources::{DiscountPolicy, ListPriceEntry, PurchaseContext, SupplierTerms};
pub use validation::validate_request;
