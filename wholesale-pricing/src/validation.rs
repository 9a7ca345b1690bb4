//! Upstream Validation
//!
//! Optional strict checks for callers that want to reject bad data before
//! pricing. [`price`](crate::price) never calls this and accepts anything.

use crate::error::{PricingError, PricingResult};
use rust_decimal::Decimal;

/// Maximum allowed list price (1,000,000)
const MAX_LIST_PRICE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);
/// Maximum allowed purchase quantity
const MAX_QUANTITY: Decimal = Decimal::from_parts(9999, 0, 0, false, 0);

#[inline]
fn require_non_negative(value: Decimal, field: &'static str) -> PricingResult<()> {
    if value < Decimal::ZERO {
        return Err(PricingError::Negative { field, value });
    }
    Ok(())
}

#[inline]
fn require_at_most(value: Decimal, max: Decimal, field: &'static str) -> PricingResult<()> {
    if value > max {
        return Err(PricingError::AboveMaximum { field, max, value });
    }
    Ok(())
}

/// Validate a request before pricing
pub fn validate_request(request: &crate::PriceRequest) -> PricingResult<()> {
    require_non_negative(request.list_price, "list_price")?;
    require_at_most(request.list_price, MAX_LIST_PRICE, "list_price")?;

    require_non_negative(request.supplier_markup, "supplier_markup")?;
    require_non_negative(request.supplier_cash_markup, "supplier_cash_markup")?;

    if request.bulk_discount_percent < Decimal::ZERO
        || request.bulk_discount_percent > Decimal::ONE_HUNDRED
    {
        return Err(PricingError::BulkPercentOutOfRange(
            request.bulk_discount_percent,
        ));
    }

    require_non_negative(request.pack_size, "pack_size")?;

    require_non_negative(request.quantity, "quantity")?;
    require_at_most(request.quantity, MAX_QUANTITY, "quantity")?;

    Ok(())
}
