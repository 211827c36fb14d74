//! # Checkout Pricing
//!
//! Pure pricing rules for checkout: shipping costs, the coupon check, and
//! the final order quote.
//!
//! ## Pricing Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Order Pricing                                      │
//! │                                                                         │
//! │  Cart total (subtotal)                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  − discount      20% of subtotal when the coupon is applied            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  + shipping      Express: flat 200,000                                 │
//! │                  Standard: free above 5,000,000, else 150,000          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  = final total   what the wallet must cover                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All numbers are configurable through [`PricingRules`]; the defaults are
//! the storefront's published rates.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Pricing Rules
// =============================================================================

/// Configurable pricing constants.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricingRules {
    /// Standard shipping is free when the subtotal exceeds this.
    pub free_shipping_threshold: Money,

    /// Standard shipping cost below the threshold.
    pub standard_shipping_cost: Money,

    /// Express shipping cost (never free).
    pub express_shipping_cost: Money,

    /// The single accepted coupon code, matched case-insensitively.
    pub coupon_code: String,

    /// Coupon discount in basis points (2000 = 20% of subtotal).
    pub coupon_discount_bps: u32,
}

impl Default for PricingRules {
    fn default() -> Self {
        PricingRules {
            free_shipping_threshold: Money::from_tomans(5_000_000),
            standard_shipping_cost: Money::from_tomans(150_000),
            express_shipping_cost: Money::from_tomans(200_000),
            coupon_code: "SAVE20".to_string(),
            coupon_discount_bps: 2000,
        }
    }
}

impl PricingRules {
    /// Checks a user-entered coupon code.
    ///
    /// Single hard-coded match, case-insensitive; there are no expiry,
    /// usage-limit, or stacking rules.
    pub fn coupon_matches(&self, code: &str) -> bool {
        code.trim().eq_ignore_ascii_case(&self.coupon_code)
    }
}

// =============================================================================
// Shipping Method
// =============================================================================

/// How the order is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ShippingMethod {
    /// پست پیشتاز - free above the threshold.
    Standard,
    /// ارسال اکسپرس - flat rate, always charged.
    Express,
}

impl ShippingMethod {
    /// Shipping cost for this method given the order subtotal.
    ///
    /// ## Example
    /// ```rust
    /// use bazaar_core::checkout::{PricingRules, ShippingMethod};
    /// use bazaar_core::money::Money;
    ///
    /// let rules = PricingRules::default();
    ///
    /// // Below the free-shipping threshold: standard costs 150,000
    /// let cost = ShippingMethod::Standard.cost(Money::from_tomans(3_000_000), &rules);
    /// assert_eq!(cost.tomans(), 150_000);
    ///
    /// // Above the threshold: standard is free, express never is
    /// let cost = ShippingMethod::Standard.cost(Money::from_tomans(6_000_000), &rules);
    /// assert!(cost.is_zero());
    /// ```
    pub fn cost(&self, subtotal: Money, rules: &PricingRules) -> Money {
        match self {
            ShippingMethod::Express => rules.express_shipping_cost,
            ShippingMethod::Standard => {
                if subtotal > rules.free_shipping_threshold {
                    Money::zero()
                } else {
                    rules.standard_shipping_cost
                }
            }
        }
    }
}

// =============================================================================
// Order Pricing
// =============================================================================

/// The priced breakdown of an order at checkout.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderPricing {
    /// Cart total before adjustments.
    pub subtotal: Money,

    /// Coupon discount (zero when no coupon applied).
    pub discount: Money,

    /// Shipping cost for the selected method.
    pub shipping_cost: Money,

    /// subtotal − discount + shipping_cost; what payment must cover.
    pub total: Money,
}

impl OrderPricing {
    /// Prices an order.
    pub fn quote(
        subtotal: Money,
        coupon_applied: bool,
        method: ShippingMethod,
        rules: &PricingRules,
    ) -> Self {
        let discount = if coupon_applied {
            subtotal.percentage(rules.coupon_discount_bps)
        } else {
            Money::zero()
        };
        let shipping_cost = method.cost(subtotal, rules);
        let total = subtotal - discount + shipping_cost;

        OrderPricing {
            subtotal,
            discount,
            shipping_cost,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coupon_matching() {
        let rules = PricingRules::default();
        assert!(rules.coupon_matches("SAVE20"));
        assert!(rules.coupon_matches("save20"));
        assert!(rules.coupon_matches("  Save20 "));
        assert!(!rules.coupon_matches("SAVE30"));
        assert!(!rules.coupon_matches(""));
    }

    #[test]
    fn test_standard_shipping_below_threshold() {
        let rules = PricingRules::default();
        let cost = ShippingMethod::Standard.cost(Money::from_tomans(3_000_000), &rules);
        assert_eq!(cost.tomans(), 150_000);
    }

    #[test]
    fn test_standard_shipping_free_above_threshold() {
        let rules = PricingRules::default();
        let cost = ShippingMethod::Standard.cost(Money::from_tomans(6_000_000), &rules);
        assert!(cost.is_zero());
    }

    #[test]
    fn test_threshold_is_strict() {
        // Exactly at the threshold still pays shipping (strictly greater)
        let rules = PricingRules::default();
        let cost = ShippingMethod::Standard.cost(Money::from_tomans(5_000_000), &rules);
        assert_eq!(cost.tomans(), 150_000);
    }

    #[test]
    fn test_express_is_never_free() {
        let rules = PricingRules::default();
        let cost = ShippingMethod::Express.cost(Money::from_tomans(100_000_000), &rules);
        assert_eq!(cost.tomans(), 200_000);
    }

    #[test]
    fn test_quote_without_coupon() {
        let rules = PricingRules::default();
        let pricing = OrderPricing::quote(
            Money::from_tomans(3_000_000),
            false,
            ShippingMethod::Standard,
            &rules,
        );

        assert_eq!(pricing.subtotal.tomans(), 3_000_000);
        assert!(pricing.discount.is_zero());
        assert_eq!(pricing.shipping_cost.tomans(), 150_000);
        assert_eq!(pricing.total.tomans(), 3_150_000);
    }

    #[test]
    fn test_quote_with_coupon() {
        let rules = PricingRules::default();
        let pricing = OrderPricing::quote(
            Money::from_tomans(10_000_000),
            true,
            ShippingMethod::Standard,
            &rules,
        );

        // 20% off 10,000,000 = 2,000,000; free shipping above threshold
        assert_eq!(pricing.discount.tomans(), 2_000_000);
        assert!(pricing.shipping_cost.is_zero());
        assert_eq!(pricing.total.tomans(), 8_000_000);
    }

    #[test]
    fn test_quote_with_coupon_and_express() {
        let rules = PricingRules::default();
        let pricing = OrderPricing::quote(
            Money::from_tomans(2_000_000),
            true,
            ShippingMethod::Express,
            &rules,
        );

        assert_eq!(pricing.discount.tomans(), 400_000);
        assert_eq!(pricing.shipping_cost.tomans(), 200_000);
        assert_eq!(pricing.total.tomans(), 1_800_000);
    }
}
