//! Price Result
//!
//! Monetary fields are quantized to 2 decimals. Diagnostics are kept exact
//! for audit and UI display.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Output of [`price`](crate::price)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceResult {
    /// Taxed, commercially discounted per-unit price before markup
    pub base: Decimal,
    /// Per-unit sale price (list)
    pub unit: Decimal,
    /// Per-unit sale price (cash)
    pub unit_cash: Decimal,
    /// Pack value at base, before markup and discounts
    pub pack: Decimal,
    /// Pack sale total (list), pack discount included when it applies
    pub pack_total: Decimal,
    /// Pack sale total (cash), pack discount included when it applies
    pub pack_total_cash: Decimal,
    pub diagnostics: PriceDiagnostics,
}

/// How the pack discount was decided
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceDiagnostics {
    /// Pack discount percentage actually used (0 when not applied)
    pub effective_bulk_percent: Decimal,
    /// Multiplier applied to pack totals (1 when not applied)
    pub bulk_factor: Decimal,
    /// Threshold considered (0 when none was configured)
    pub threshold_used: i64,
    /// Integer pack size used for pack totals
    pub pack_size_used: i64,
    /// Quantity used in the applicability check
    pub quantity_applied: Decimal,
    pub pack_discount_applied: bool,
}
