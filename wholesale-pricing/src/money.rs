//! Monetary rounding
//!
//! Intermediate stages keep full `Decimal` precision. Rounding happens once,
//! at the end of the pipeline.

use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
pub const DECIMAL_PLACES: u32 = 2;

/// Round a monetary amount to 2 decimal places, ties away from zero.
///
/// The result always carries scale 2, so `112` comes back as `112.00`.
pub fn quantize(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    // Only ever widens the scale here; no further rounding takes place.
    rounded.rescale(DECIMAL_PLACES);
    rounded
}
