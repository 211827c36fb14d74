//! # Catalog Types
//!
//! Core catalog types for the Bazaar storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Catalog Types                                   │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │    Product      │   │    Category     │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  id (u32)       │   │  Mobile         │                             │
//! │  │  name (Persian) │   │  Laptop         │                             │
//! │  │  price          │   │  Headphone      │                             │
//! │  │  original_price │   │  SmartWatch     │                             │
//! │  │  rating/reviews │   │  Tablet         │                             │
//! │  │  sale flags     │   │  Accessory      │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │  Product ──► CartItem snapshot (cart.rs)                               │
//! │  Product ──► WishlistItem snapshot (wishlist.rs)                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! Cart and wishlist entries copy the product fields they need at the time
//! of adding, so a later catalog change never rewrites what the user saw.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Category
// =============================================================================

/// Product category shown in the storefront navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// گوشی موبایل
    Mobile,
    /// لپ‌تاپ
    Laptop,
    /// هدفون و هندزفری
    Headphone,
    /// ساعت هوشمند
    SmartWatch,
    /// تبلت
    Tablet,
    /// لوازم جانبی
    Accessory,
}

impl Category {
    /// Persian display label used by the category grid.
    pub const fn label(&self) -> &'static str {
        match self {
            Category::Mobile => "گوشی موبایل",
            Category::Laptop => "لپ‌تاپ",
            Category::Headphone => "هدفون و هندزفری",
            Category::SmartWatch => "ساعت هوشمند",
            Category::Tablet => "تبلت",
            Category::Accessory => "لوازم جانبی",
        }
    }

    /// URL slug for category pages.
    pub const fn slug(&self) -> &'static str {
        match self {
            Category::Mobile => "mobile",
            Category::Laptop => "laptop",
            Category::Headphone => "headphone",
            Category::SmartWatch => "smartwatch",
            Category::Tablet => "tablet",
            Category::Accessory => "accessory",
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product in the (mock) catalog.
///
/// ## Note
/// There is no product database; the whole catalog is bundled in-memory
/// (see [`crate::catalog`]). Prices are whole toman.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product id.
    pub id: u32,

    /// Display name (Persian).
    pub name: String,

    /// Category for navigation and filtering.
    pub category: Category,

    /// Current sale price.
    pub price: Money,

    /// Price before discount (equal to `price` when not on sale).
    pub original_price: Money,

    /// Image path served by the frontend.
    pub image: String,

    /// Average rating in tenths of a star (0-50, e.g. 47 = 4.7★).
    pub rating: u8,

    /// Number of reviews behind the rating.
    pub reviews: u32,

    /// Whether the product can currently be purchased.
    pub in_stock: bool,

    /// "جدید" badge.
    pub is_new: bool,

    /// "فروش ویژه" badge.
    pub is_sale: bool,

    /// Color variant preselected for this listing, if any.
    pub color: Option<String>,

    /// Storage variant preselected for this listing, if any.
    pub storage: Option<String>,
}

impl Product {
    /// Discount relative to the original price, zero when not on sale.
    pub fn discount(&self) -> Money {
        if self.original_price > self.price {
            self.original_price - self.price
        } else {
            Money::zero()
        }
    }

    /// Rating as stars for display (4.7 for `rating == 47`).
    #[inline]
    pub fn stars(&self) -> f64 {
        self.rating as f64 / 10.0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sale_product() -> Product {
        Product {
            id: 1,
            name: "گوشی هوشمند سامسونگ گلکسی".to_string(),
            category: Category::Mobile,
            price: Money::from_tomans(25_000_000),
            original_price: Money::from_tomans(28_000_000),
            image: "/images/galaxy.jpg".to_string(),
            rating: 47,
            reviews: 128,
            in_stock: true,
            is_new: false,
            is_sale: true,
            color: Some("مشکی".to_string()),
            storage: Some("256GB".to_string()),
        }
    }

    #[test]
    fn test_discount() {
        let product = sale_product();
        assert_eq!(product.discount().tomans(), 3_000_000);

        let mut full_price = sale_product();
        full_price.original_price = full_price.price;
        assert!(full_price.discount().is_zero());
    }

    #[test]
    fn test_stars() {
        let product = sale_product();
        assert!((product.stars() - 4.7).abs() < f64::EPSILON);
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::Mobile.label(), "گوشی موبایل");
        assert_eq!(Category::Laptop.slug(), "laptop");
    }

    #[test]
    fn test_product_serializes_camel_case() {
        let json = serde_json::to_value(sale_product()).unwrap();
        assert!(json.get("originalPrice").is_some());
        assert!(json.get("inStock").is_some());
        assert_eq!(json["category"], "mobile");
    }
}
