//! Price Calculator
//!
//! Turns a [`PriceRequest`] into the six monetary outputs of a catalog line.
//! Uses rust_decimal throughout; rounding happens only at the last stage.
//!
//! Pipeline (order is normative, rounding makes it observable):
//! 1. base = list price (per unit) + tax - commercial discount
//! 2. unit = base * markup
//! 3. pack = base * pack size
//! 4. pack discount applicability (threshold on quantity or pack size)
//! 5. general discount on unit
//! 6. pack totals from the discounted unit
//! 7. cash unit
//! 8. half-up rounding to 2 decimals

use crate::coerce::{to_factor, truncate_int};
use crate::money::quantize;
use crate::request::PriceRequest;
use crate::result::{PriceDiagnostics, PriceResult};
use rust_decimal::prelude::*;

/// Outcome of the pack-discount policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BulkDecision {
    applied: bool,
    /// Percentage in effect (0 when not applied)
    percent: Decimal,
    /// Multiplier for pack totals
    factor: Decimal,
}

/// Decide whether the pack discount applies.
///
/// Without a threshold (none or ≤ 1) any positive percentage applies. With a
/// threshold, either the purchase quantity or a single pack must reach it.
fn decide_bulk(
    percent: Decimal,
    threshold: Option<i64>,
    quantity: Decimal,
    pack_qty: Decimal,
) -> BulkDecision {
    let has_bulk = percent > Decimal::ZERO;

    let applied = match threshold {
        Some(t) if t > 1 => {
            let t = Decimal::from(t);
            has_bulk && (quantity >= t || pack_qty >= t)
        }
        _ => has_bulk,
    };

    if applied {
        BulkDecision {
            applied,
            percent,
            factor: Decimal::ONE - percent / Decimal::ONE_HUNDRED,
        }
    } else {
        BulkDecision {
            applied,
            percent: Decimal::ZERO,
            factor: Decimal::ONE,
        }
    }
}

/// Bound for a result that does not fit in a `Decimal`, by the sign of the operands
fn saturated(lhs: Decimal, rhs: Decimal) -> Decimal {
    if lhs.is_sign_negative() != rhs.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    }
}

/// Multiplication that saturates at `Decimal::MAX`/`MIN` instead of panicking
fn mul(lhs: Decimal, rhs: Decimal) -> Decimal {
    lhs.checked_mul(rhs).unwrap_or_else(|| {
        tracing::debug!(%lhs, %rhs, "Multiplication overflowed, saturating");
        saturated(lhs, rhs)
    })
}

/// Division that saturates at `Decimal::MAX`/`MIN` instead of panicking
fn div(lhs: Decimal, rhs: Decimal) -> Decimal {
    lhs.checked_div(rhs).unwrap_or_else(|| {
        tracing::debug!(%lhs, %rhs, "Division overflowed, saturating");
        saturated(lhs, rhs)
    })
}

/// Price a single catalog line.
///
/// Total and pure: every request yields a fully populated result, identical
/// requests yield identical results. Stages that overflow `Decimal` saturate
/// at its bounds.
pub fn price(request: &PriceRequest) -> PriceResult {
    let list_price = request.list_price;
    let tax = to_factor(request.tax_rate);
    let commercial = to_factor(request.supplier_commercial_discount);
    let markup = request.supplier_markup;
    let cash_markup = request.supplier_cash_markup;

    // Pack size 0 means "no pack": a single unit
    let pack_size = if request.pack_size.is_zero() {
        Decimal::ONE
    } else {
        request.pack_size
    };
    let pack_qty = pack_size.trunc();

    // Stage 1: base
    let per_unit = if request.divide && pack_size > Decimal::ZERO {
        div(list_price, pack_size)
    } else {
        list_price
    };
    let base = mul(mul(per_unit, Decimal::ONE + tax), Decimal::ONE - commercial);

    // Stage 2: markup
    let unit_raw = mul(base, markup);

    // Stage 4: pack discount applicability
    let bulk = decide_bulk(
        request.bulk_discount_percent,
        request.bulk_threshold,
        request.quantity,
        pack_qty,
    );

    // Stage 5: general discount, per unit only
    let unit = if request.general_active && request.general_discount > Decimal::ZERO {
        mul(unit_raw, Decimal::ONE - to_factor(request.general_discount))
    } else {
        unit_raw
    };

    // Stages 3 and 6: pack values
    let pack = mul(base, pack_qty);
    let unit_cash = mul(unit, cash_markup);
    let pack_total = mul(mul(unit, pack_qty), bulk.factor);
    let pack_total_cash = mul(mul(unit_cash, pack_qty), bulk.factor);

    tracing::trace!(
        %base,
        %unit,
        pack_discount_applied = bulk.applied,
        bulk_factor = %bulk.factor,
        "Priced catalog line"
    );

    PriceResult {
        base: quantize(base),
        unit: quantize(unit),
        unit_cash: quantize(unit_cash),
        pack: quantize(pack),
        pack_total: quantize(pack_total),
        pack_total_cash: quantize(pack_total_cash),
        diagnostics: PriceDiagnostics {
            effective_bulk_percent: bulk.percent,
            bulk_factor: bulk.factor,
            threshold_used: request.bulk_threshold.unwrap_or(0).max(0),
            pack_size_used: truncate_int(pack_qty),
            quantity_applied: request.quantity,
            pack_discount_applied: bulk.applied,
        },
    }
}

/// Price a listing, preserving order. Each line is priced independently.
pub fn price_batch(requests: &[PriceRequest]) -> Vec<PriceResult> {
    requests.iter().map(price).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// Helper to create a request with the commonly varied fields
    fn make_request(list_price: &str, tax: &str, pack_size: &str) -> PriceRequest {
        PriceRequest {
            list_price: dec(list_price),
            tax_rate: dec(tax),
            pack_size: dec(pack_size),
            ..Default::default()
        }
    }

    // ==================== Base ====================

    #[test]
    fn test_base_with_tax_and_commercial_discount() {
        // 100 * 1.21 * 0.9 = 108.90
        let mut req = make_request("100", "0.21", "1");
        req.supplier_commercial_discount = dec("0.1");

        let result = price(&req);
        assert_eq!(result.base, dec("108.90"));
    }

    #[test]
    fn test_tax_as_percent() {
        let as_percent = price(&make_request("100", "21", "1"));
        let as_factor = price(&make_request("100", "0.21", "1"));
        assert_eq!(as_percent, as_factor);
        assert_eq!(as_percent.base, dec("121.00"));
    }

    #[test]
    fn test_divide_uses_per_unit_price() {
        // 100 / 4 * 1.21 = 30.25
        let mut req = make_request("100", "0.21", "4");
        req.divide = true;

        let result = price(&req);
        assert_eq!(result.base, dec("30.25"));
        assert_eq!(result.pack, dec("121.00"));
    }

    #[test]
    fn test_divide_with_zero_pack_does_not_divide() {
        let mut req = make_request("100", "0.12", "0");
        req.divide = true;

        let result = price(&req);
        assert_eq!(result.base, dec("112.00"));
        assert_eq!(result.diagnostics.pack_size_used, 1);
    }

    // ==================== Pack discount policy ====================

    #[test]
    fn test_bulk_without_threshold_always_applies() {
        let decision = decide_bulk(dec("5"), None, dec("1"), dec("6"));
        assert!(decision.applied);
        assert_eq!(decision.factor, dec("0.95"));
        assert_eq!(decision.percent, dec("5"));

        // Threshold of 1 behaves as no threshold
        let decision = decide_bulk(dec("5"), Some(1), Decimal::ZERO, Decimal::ONE);
        assert!(decision.applied);
    }

    #[test]
    fn test_bulk_threshold_met_by_quantity() {
        let decision = decide_bulk(dec("5"), Some(3), dec("4"), dec("2"));
        assert!(decision.applied);
    }

    #[test]
    fn test_bulk_threshold_met_by_pack() {
        let decision = decide_bulk(dec("5"), Some(6), dec("1"), dec("6"));
        assert!(decision.applied);
    }

    #[test]
    fn test_bulk_threshold_not_met() {
        let decision = decide_bulk(dec("5"), Some(12), dec("11"), dec("6"));
        assert!(!decision.applied);
        assert_eq!(decision.factor, Decimal::ONE);
        assert_eq!(decision.percent, Decimal::ZERO);
    }

    #[test]
    fn test_no_bulk_percent_never_applies() {
        let decision = decide_bulk(Decimal::ZERO, None, dec("100"), dec("100"));
        assert!(!decision.applied);
        assert_eq!(decision.factor, Decimal::ONE);
    }

    #[test]
    fn test_negative_threshold_reported_as_zero() {
        let req = PriceRequest {
            list_price: dec("100"),
            bulk_discount_percent: dec("5"),
            bulk_threshold: Some(-5),
            ..Default::default()
        };

        let diag = price(&req).diagnostics;
        assert!(diag.pack_discount_applied);
        assert_eq!(diag.threshold_used, 0);
    }

    // ==================== Overflow ====================

    #[test]
    fn test_saturating_helpers() {
        assert_eq!(mul(Decimal::MAX, dec("2")), Decimal::MAX);
        assert_eq!(mul(Decimal::MAX, dec("-2")), Decimal::MIN);
        assert_eq!(div(dec("100"), dec("0.0000000000000000000000000001")), Decimal::MAX);
        assert_eq!(mul(dec("1.5"), dec("2")), dec("3"));
        assert_eq!(div(dec("100"), dec("4")), dec("25"));
    }

    // ==================== General discount ====================

    #[test]
    fn test_general_discount_after_markup() {
        // 100 * 1.3 = 130, -20% = 104
        let mut req = make_request("100", "0", "1");
        req.supplier_markup = dec("1.3");
        req.general_active = true;
        req.general_discount = dec("20");

        let result = price(&req);
        assert_eq!(result.base, dec("100.00"));
        assert_eq!(result.unit, dec("104.00"));
        // General discount never touches the pre-markup pack value
        assert_eq!(result.pack, dec("100.00"));
        assert_eq!(result.pack_total, dec("104.00"));
    }

    #[test]
    fn test_inactive_general_discount_is_ignored() {
        let mut req = make_request("100", "0", "1");
        req.general_discount = dec("50");

        let result = price(&req);
        assert_eq!(result.unit, dec("100.00"));
    }

    // ==================== Pack totals ====================

    #[test]
    fn test_fractional_pack_truncates_to_zero() {
        let result = price(&make_request("100", "0", "0.5"));
        assert_eq!(result.base, dec("100.00"));
        assert_eq!(result.pack, dec("0.00"));
        assert_eq!(result.pack_total, dec("0.00"));
        assert_eq!(result.pack_total_cash, dec("0.00"));
        assert_eq!(result.diagnostics.pack_size_used, 0);
    }

    #[test]
    fn test_pack_totals_with_threshold() {
        // Quantity 4 reaches the threshold of 3 (pack of 2 does not)
        // base = 50 * 1.21 = 60.5, unit = 60.5 * 1.3 * 0.8 = 62.92
        // pack_total = 62.92 * 2 * 0.95 = 119.548
        let req = PriceRequest {
            list_price: dec("50"),
            tax_rate: dec("0.21"),
            supplier_markup: dec("1.3"),
            general_discount: dec("20"),
            general_active: true,
            bulk_discount_percent: dec("5"),
            bulk_threshold: Some(3),
            pack_size: dec("2"),
            quantity: dec("4"),
            ..Default::default()
        };

        let result = price(&req);
        assert_eq!(result.base, dec("60.50"));
        assert_eq!(result.unit, dec("62.92"));
        assert_eq!(result.pack, dec("121.00"));
        assert_eq!(result.pack_total, dec("119.55"));
        assert!(result.diagnostics.pack_discount_applied);
        assert_eq!(result.diagnostics.threshold_used, 3);
    }

    // ==================== Diagnostics ====================

    #[test]
    fn test_diagnostics_are_exact() {
        let req = PriceRequest {
            list_price: dec("100"),
            bulk_discount_percent: dec("7.5"),
            pack_size: dec("6"),
            quantity: dec("2.5"),
            ..Default::default()
        };

        let diag = price(&req).diagnostics;
        assert_eq!(diag.effective_bulk_percent, dec("7.5"));
        assert_eq!(diag.bulk_factor, dec("0.925"));
        assert_eq!(diag.threshold_used, 0);
        assert_eq!(diag.pack_size_used, 6);
        assert_eq!(diag.quantity_applied, dec("2.5"));
        assert!(diag.pack_discount_applied);
    }

    #[test]
    fn test_price_batch_preserves_order() {
        let requests = vec![
            make_request("10", "0", "1"),
            make_request("20", "0", "1"),
            make_request("30", "0", "1"),
        ];

        let results = price_batch(&requests);
        let units: Vec<Decimal> = results.iter().map(|r| r.unit).collect();
        assert_eq!(units, vec![dec("10.00"), dec("20.00"), dec("30.00")]);
        assert!(price_batch(&[]).is_empty());
    }
}
