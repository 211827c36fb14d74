//! # Storefront Configuration
//!
//! Stores configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`BAZAAR_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.
//! If hot-reloading is added later, we'd wrap in `RwLock`.

use serde::{Deserialize, Serialize};

use bazaar_core::checkout::PricingRules;
use bazaar_core::Money;

/// Storefront configuration.
///
/// ## Fields
/// All fields have defaults matching the storefront's published rates;
/// deployments override via environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Store name (displayed in the header and on receipts).
    pub store_name: String,

    /// Checkout pricing: shipping rates and the coupon.
    pub pricing: PricingRules,
}

impl Default for StoreConfig {
    /// Returns default configuration suitable for development.
    ///
    /// ## Default Values
    /// - Store: "فروشگاه بازار"
    /// - Free shipping above 5,000,000 toman
    /// - Standard shipping 150,000 / express 200,000 toman
    /// - Coupon: SAVE20 → 20%
    fn default() -> Self {
        StoreConfig {
            store_name: "فروشگاه بازار".to_string(),
            pricing: PricingRules::default(),
        }
    }
}

impl StoreConfig {
    /// Creates a new StoreConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `BAZAAR_STORE_NAME`: Override store name
    /// - `BAZAAR_FREE_SHIPPING_THRESHOLD`: Override threshold (toman)
    /// - `BAZAAR_COUPON_CODE`: Override the accepted coupon code
    pub fn from_env() -> Self {
        let mut config = StoreConfig::default();

        if let Ok(store_name) = std::env::var("BAZAAR_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Ok(threshold_str) = std::env::var("BAZAAR_FREE_SHIPPING_THRESHOLD") {
            if let Ok(threshold) = threshold_str.parse::<i64>() {
                config.pricing.free_shipping_threshold = Money::from_tomans(threshold);
            }
        }

        if let Ok(coupon) = std::env::var("BAZAAR_COUPON_CODE") {
            config.pricing.coupon_code = coupon;
        }

        config
    }

    /// Formats a toman amount for logs and receipts.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = StoreConfig::default();
    /// assert_eq!(config.format_amount(Money::from_tomans(3_150_000)), "3,150,000 تومان");
    /// ```
    pub fn format_amount(&self, amount: Money) -> String {
        amount.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.store_name, "فروشگاه بازار");
        assert_eq!(config.pricing.free_shipping_threshold.tomans(), 5_000_000);
        assert_eq!(config.pricing.standard_shipping_cost.tomans(), 150_000);
        assert_eq!(config.pricing.express_shipping_cost.tomans(), 200_000);
        assert_eq!(config.pricing.coupon_code, "SAVE20");
        assert_eq!(config.pricing.coupon_discount_bps, 2000);
    }

    #[test]
    fn test_format_amount() {
        let config = StoreConfig::default();
        assert_eq!(
            config.format_amount(Money::from_tomans(3_150_000)),
            "3,150,000 تومان"
        );
    }
}
