//! Request Sources
//!
//! Typed views of the records a [`PriceRequest`] is assembled from: the
//! supplier's commercial terms, the list-price entry, the discount
//! configuration and the caller's purchase context.

use crate::request::PriceRequest;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Commercial terms agreed with a supplier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierTerms {
    /// Commercial discount (factor or percent)
    pub commercial_discount: Decimal,
    /// Markup multiplier
    pub markup: Decimal,
    /// Cash-payment multiplier
    pub cash_markup: Decimal,
}

/// A supplier list-price entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListPriceEntry {
    pub list_price: Decimal,
    /// Tax rate (factor or percent)
    pub tax_rate: Decimal,
    pub pack_size: Decimal,
    /// The list quotes per pack rather than per unit
    pub divide: bool,
}

impl ListPriceEntry {
    /// Entry for an item that has not been reviewed into the catalog yet.
    ///
    /// Such items carry only a price: no tax, single-unit pack, no division.
    pub fn unreviewed(list_price: Decimal) -> Self {
        Self {
            list_price,
            tax_rate: Decimal::ZERO,
            pack_size: Decimal::ONE,
            divide: false,
        }
    }
}

/// Discount configuration attached to an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountPolicy {
    /// General promotion (factor or percent)
    pub general: Decimal,
    pub general_active: bool,
    /// Pack discount percentage
    pub bulk_percent: Decimal,
    pub bulk_threshold: Option<i64>,
}

impl DiscountPolicy {
    /// No discount configured
    pub fn none() -> Self {
        Self {
            general: Decimal::ZERO,
            general_active: false,
            bulk_percent: Decimal::ZERO,
            bulk_threshold: None,
        }
    }
}

impl Default for DiscountPolicy {
    fn default() -> Self {
        Self::none()
    }
}

/// Caller-provided purchase context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseContext {
    pub quantity: Decimal,
}

impl PurchaseContext {
    /// Quotes are always for at least one unit: non-positive quantities become 1.
    pub fn new(quantity: Decimal) -> Self {
        let quantity = if quantity <= Decimal::ZERO {
            Decimal::ONE
        } else {
            quantity
        };
        Self { quantity }
    }
}

impl Default for PurchaseContext {
    fn default() -> Self {
        Self::new(Decimal::ONE)
    }
}

impl PriceRequest {
    /// Assemble a request from its source records.
    pub fn compose(
        supplier: &SupplierTerms,
        entry: &ListPriceEntry,
        policy: &DiscountPolicy,
        context: &PurchaseContext,
    ) -> Self {
        Self {
            list_price: entry.list_price,
            tax_rate: entry.tax_rate,
            supplier_commercial_discount: supplier.commercial_discount,
            supplier_markup: supplier.markup,
            supplier_cash_markup: supplier.cash_markup,
            general_discount: policy.general,
            general_active: policy.general_active,
            bulk_discount_percent: policy.bulk_percent,
            bulk_threshold: policy.bulk_threshold,
            pack_size: entry.pack_size,
            quantity: context.quantity,
            divide: entry.divide,
        }
    }
}
