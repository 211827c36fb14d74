//! # Mock Catalog
//!
//! Bundled product data for the storefront.
//!
//! ## Why Hard-Coded?
//! The store has no backend catalog service; every page renders from this
//! in-memory list. Ids are stable so carts and wishlists built in one page
//! keep resolving in another.

use crate::money::Money;
use crate::types::{Category, Product};

/// Returns the bundled mock catalog.
///
/// ## Example
/// ```rust
/// use bazaar_core::catalog;
///
/// let products = catalog::products();
/// assert!(!products.is_empty());
/// assert!(products.iter().all(|p| p.price.is_positive()));
/// ```
pub fn products() -> Vec<Product> {
    fn product(
        id: u32,
        name: &str,
        category: Category,
        price: i64,
        original_price: i64,
        image: &str,
        rating: u8,
        reviews: u32,
    ) -> Product {
        Product {
            id,
            name: name.to_string(),
            category,
            price: Money::from_tomans(price),
            original_price: Money::from_tomans(original_price),
            image: image.to_string(),
            rating,
            reviews,
            in_stock: true,
            is_new: false,
            is_sale: original_price > price,
            color: None,
            storage: None,
        }
    }

    let mut list = vec![
        product(
            1,
            "گوشی هوشمند سامسونگ گلکسی S24",
            Category::Mobile,
            45_000_000,
            52_000_000,
            "/images/galaxy-s24.jpg",
            47,
            342,
        ),
        product(
            2,
            "گوشی آیفون 15 پرو",
            Category::Mobile,
            89_000_000,
            89_000_000,
            "/images/iphone-15-pro.jpg",
            49,
            578,
        ),
        product(
            3,
            "لپ‌تاپ ایسوس ROG Strix",
            Category::Laptop,
            78_000_000,
            85_000_000,
            "/images/asus-rog.jpg",
            45,
            126,
        ),
        product(
            4,
            "مک‌بوک ایر M3",
            Category::Laptop,
            95_000_000,
            95_000_000,
            "/images/macbook-air-m3.jpg",
            48,
            203,
        ),
        product(
            5,
            "هدفون بی‌سیم سونی WH-1000XM5",
            Category::Headphone,
            18_500_000,
            21_000_000,
            "/images/sony-xm5.jpg",
            48,
            890,
        ),
        product(
            6,
            "ایرپاد پرو نسل دوم",
            Category::Headphone,
            14_200_000,
            14_200_000,
            "/images/airpods-pro-2.jpg",
            46,
            1240,
        ),
        product(
            7,
            "ساعت هوشمند اپل واچ سری 9",
            Category::SmartWatch,
            28_000_000,
            31_500_000,
            "/images/apple-watch-9.jpg",
            47,
            456,
        ),
        product(
            8,
            "ساعت هوشمند سامسونگ گلکسی واچ 6",
            Category::SmartWatch,
            15_800_000,
            15_800_000,
            "/images/galaxy-watch-6.jpg",
            44,
            289,
        ),
        product(
            9,
            "تبلت آیپد پرو 12.9 اینچ",
            Category::Tablet,
            68_000_000,
            74_000_000,
            "/images/ipad-pro.jpg",
            48,
            167,
        ),
        product(
            10,
            "پاوربانک شیائومی 20000",
            Category::Accessory,
            1_850_000,
            2_200_000,
            "/images/mi-powerbank.jpg",
            43,
            2100,
        ),
        product(
            11,
            "شارژر بی‌سیم انکر",
            Category::Accessory,
            2_400_000,
            2_400_000,
            "/images/anker-charger.jpg",
            42,
            734,
        ),
        product(
            12,
            "کیبورد مکانیکال لاجیتک G Pro",
            Category::Accessory,
            6_900_000,
            7_800_000,
            "/images/logitech-gpro.jpg",
            46,
            412,
        ),
    ];

    // Newest arrivals carry the "جدید" badge
    for p in &mut list {
        if matches!(p.id, 2 | 4 | 7) {
            p.is_new = true;
        }
    }

    list
}

/// Looks up a product by id.
pub fn find(id: u32) -> Option<Product> {
    products().into_iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let products = products();
        let mut ids: Vec<u32> = products.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn test_sale_flag_matches_prices() {
        for p in products() {
            assert_eq!(p.is_sale, p.original_price > p.price, "product {}", p.id);
            assert!(p.original_price >= p.price, "product {}", p.id);
        }
    }

    #[test]
    fn test_find() {
        let product = find(5).unwrap();
        assert_eq!(product.category, Category::Headphone);
        assert!(find(9999).is_none());
    }

    #[test]
    fn test_every_category_represented() {
        let products = products();
        for category in [
            Category::Mobile,
            Category::Laptop,
            Category::Headphone,
            Category::SmartWatch,
            Category::Tablet,
            Category::Accessory,
        ] {
            assert!(products.iter().any(|p| p.category == category));
        }
    }
}
