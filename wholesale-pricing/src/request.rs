//! Price Request
//!
//! [`PriceRequest`] is the single input record of the engine: every option the
//! calculator recognizes is an explicit field. [`RawPriceRequest`] is its
//! untyped twin for data that has not been coerced yet.

use crate::coerce::{to_decimal, to_flag, to_int_or};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Typed pricing input.
///
/// `tax_rate`, `supplier_commercial_discount` and `general_discount` may be
/// given either as a factor (`0.21`) or as a percentage (`21`); the engine
/// normalizes them exactly once. Markups are raw multipliers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRequest {
    /// Supplier list price per unit (or per pack when `divide` is set)
    pub list_price: Decimal,
    /// Additive tax rate (factor or percent)
    pub tax_rate: Decimal,
    /// Supplier commercial discount (factor or percent)
    pub supplier_commercial_discount: Decimal,
    /// Supplier markup multiplier (e.g. 1.5)
    pub supplier_markup: Decimal,
    /// Cash-payment multiplier applied on top of the unit price (e.g. 0.90)
    pub supplier_cash_markup: Decimal,
    /// General promotion (factor or percent), only used when `general_active`
    pub general_discount: Decimal,
    pub general_active: bool,
    /// Pack discount percentage (5 = 5%), never a factor
    pub bulk_discount_percent: Decimal,
    /// Quantity at or above which the pack discount applies; `None` or ≤ 1 means always
    pub bulk_threshold: Option<i64>,
    /// Units per pack; 0 is treated as 1
    pub pack_size: Decimal,
    /// Purchase quantity, only used to gate the pack discount
    pub quantity: Decimal,
    /// Treat `list_price` as a per-pack price and divide by `pack_size`
    pub divide: bool,
}

impl Default for PriceRequest {
    /// Neutral request: zero price, unit multipliers, single-unit pack.
    fn default() -> Self {
        Self {
            list_price: Decimal::ZERO,
            tax_rate: Decimal::ZERO,
            supplier_commercial_discount: Decimal::ZERO,
            supplier_markup: Decimal::ONE,
            supplier_cash_markup: Decimal::ONE,
            general_discount: Decimal::ZERO,
            general_active: false,
            bulk_discount_percent: Decimal::ZERO,
            bulk_threshold: None,
            pack_size: Decimal::ONE,
            quantity: Decimal::ONE,
            divide: false,
        }
    }
}

/// Untyped pricing input, as it arrives from upstream records.
///
/// Every field is optional and accepts numbers, numeric strings or null.
/// Legacy column names are accepted as aliases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPriceRequest {
    #[serde(default, alias = "precio_de_lista")]
    pub list_price: Value,
    #[serde(default, alias = "iva")]
    pub tax_rate: Value,
    #[serde(default, alias = "proveedor_desc_com")]
    pub supplier_commercial_discount: Value,
    #[serde(default, alias = "proveedor_margen")]
    pub supplier_markup: Value,
    #[serde(default, alias = "proveedor_margen_ef")]
    pub supplier_cash_markup: Value,
    #[serde(default, alias = "descuento_general")]
    pub general_discount: Value,
    #[serde(default, alias = "descuento_activo")]
    pub general_active: Value,
    #[serde(default, alias = "descuento_bulto")]
    pub bulk_discount_percent: Value,
    #[serde(default, alias = "descuento_cantidad_bulto")]
    pub bulk_threshold: Value,
    #[serde(default, alias = "bulto_articulo")]
    pub pack_size: Value,
    #[serde(default, alias = "cantidad")]
    pub quantity: Value,
    #[serde(default, alias = "dividir")]
    pub divide: Value,
}

impl PriceRequest {
    /// Build a typed request from untyped input. Never fails.
    ///
    /// - numeric fields go through [`to_decimal`] (garbage becomes zero)
    /// - `bulk_threshold`: null stays `None`, anything else is truncated
    /// - `pack_size` and `quantity` are floored at zero
    /// - `bulk_discount_percent` is clamped to [0, 100]
    pub fn from_raw(raw: &RawPriceRequest) -> Self {
        let bulk_threshold = if raw.bulk_threshold.is_null() {
            None
        } else {
            Some(to_int_or(&raw.bulk_threshold, 0))
        };

        Self {
            list_price: to_decimal(&raw.list_price),
            tax_rate: to_decimal(&raw.tax_rate),
            supplier_commercial_discount: to_decimal(&raw.supplier_commercial_discount),
            supplier_markup: to_decimal(&raw.supplier_markup),
            supplier_cash_markup: to_decimal(&raw.supplier_cash_markup),
            general_discount: to_decimal(&raw.general_discount),
            general_active: to_flag(&raw.general_active),
            bulk_discount_percent: to_decimal(&raw.bulk_discount_percent)
                .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED),
            bulk_threshold,
            pack_size: to_decimal(&raw.pack_size).max(Decimal::ZERO),
            quantity: to_decimal(&raw.quantity).max(Decimal::ZERO),
            divide: to_flag(&raw.divide),
        }
    }
}

impl From<&RawPriceRequest> for PriceRequest {
    fn from(raw: &RawPriceRequest) -> Self {
        Self::from_raw(raw)
    }
}
