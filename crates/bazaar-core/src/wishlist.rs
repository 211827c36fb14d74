//! # Wishlist
//!
//! A user-curated set of favorited products, independent of purchase
//! intent.
//!
//! ## Set Semantics
//! The wishlist is keyed by product id: adding an id that is already
//! present is a no-op, so double-clicking the heart icon never duplicates
//! an entry. There are no aggregate fields; callers read the count via
//! [`Wishlist::len`].

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::Product;

/// A favorited product snapshot.
///
/// Carries everything the wishlist page renders, frozen at the time of
/// adding (same snapshot pattern as the cart).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    /// Product id.
    pub id: u32,

    /// Product name (frozen).
    pub name: String,

    /// Price at time of adding (frozen).
    pub price: Money,

    /// Pre-discount price at time of adding (frozen).
    pub original_price: Money,

    /// Image path for the wishlist card.
    pub image: String,

    /// Rating in tenths of a star (47 = 4.7★).
    pub rating: u8,

    /// Review count shown next to the rating.
    pub reviews: u32,

    /// Stock flag controlling the add-to-cart button.
    pub in_stock: bool,

    /// "جدید" badge.
    pub is_new: bool,

    /// "فروش ویژه" badge.
    pub is_sale: bool,
}

impl WishlistItem {
    /// Creates a wishlist entry from a catalog product.
    pub fn from_product(product: &Product) -> Self {
        WishlistItem {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            original_price: product.original_price,
            image: product.image.clone(),
            rating: product.rating,
            reviews: product.reviews,
            in_stock: product.in_stock,
            is_new: product.is_new,
            is_sale: product.is_sale,
        }
    }
}

/// The wishlist.
///
/// ## Invariants
/// - At most one entry per product id (set semantics)
/// - Items keep insertion order for display
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Wishlist {
    /// Favorited items, insertion order.
    pub items: Vec<WishlistItem>,
}

impl Wishlist {
    /// Creates a new empty wishlist.
    pub fn new() -> Self {
        Wishlist::default()
    }

    /// Adds a product to the wishlist.
    ///
    /// Idempotent: adding an id that is already present is a no-op.
    pub fn add_item(&mut self, product: &Product) {
        if !self.contains(product.id) {
            self.items.push(WishlistItem::from_product(product));
        }
    }

    /// Removes an item by product id; absent ids are a silent no-op.
    pub fn remove_item(&mut self, id: u32) {
        self.items.retain(|i| i.id != id);
    }

    /// Empties the wishlist.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Checks whether a product id is favorited (drives the heart icon).
    pub fn contains(&self, id: u32) -> bool {
        self.items.iter().any(|i| i.id == id)
    }

    /// Number of favorited products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the wishlist is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
