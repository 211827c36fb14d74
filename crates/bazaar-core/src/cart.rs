//! # Shopping Cart
//!
//! The user's pending selection of purchasable items before checkout.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Frontend Action          Operation               Cart Change           │
//! │  ───────────────          ─────────               ───────────           │
//! │                                                                         │
//! │  Click "Add to Cart" ────► add_item() ──────────► merge or push        │
//! │                                                                         │
//! │  Change Quantity ────────► update_quantity() ───► qty = n (0 removes)  │
//! │                                                                         │
//! │  Click Remove ───────────► remove_item() ───────► retain filter        │
//! │                                                                         │
//! │  Successful Checkout ────► clear() ─────────────► items.clear()        │
//! │                                                                         │
//! │  NOTE: Every mutation ends with recalculate(), so the stored           │
//! │        total/item_count never drift from the item list.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::Product;

/// An item in the shopping cart.
///
/// ## Design Notes
/// - `id`: reference to the catalog product
/// - Remaining fields are a frozen snapshot of the product at the time of
///   adding, so the cart displays consistent data even if the catalog
///   entry changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Product id.
    pub id: u32,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Price at time of adding (frozen).
    /// This is critical: we lock in the price when added to cart.
    pub unit_price: Money,

    /// Pre-discount price at time of adding (frozen).
    pub original_price: Money,

    /// Image path for the cart row.
    pub image: String,

    /// Quantity in cart, always >= 1.
    pub quantity: i64,

    /// Selected color variant, if any.
    pub color: Option<String>,

    /// Selected storage variant, if any.
    pub storage: Option<String>,
}

impl CartItem {
    /// Creates a cart item from a product with quantity 1.
    ///
    /// ## Price Freezing
    /// The price is captured at this moment. If the catalog price changes,
    /// this cart item retains the original price.
    pub fn from_product(product: &Product) -> Self {
        CartItem {
            id: product.id,
            name: product.name.clone(),
            unit_price: product.price,
            original_price: product.original_price,
            image: product.image.clone(),
            quantity: 1,
            color: product.color.clone(),
            storage: product.storage.clone(),
        }
    }

    /// Calculates the line total (unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - Items are unique by `id` (adding the same product increases quantity)
/// - Quantity is always >= 1 (an update to 0 or less removes the item)
/// - `total` and `item_count` always equal the recomputation over `items`
/// - Items keep insertion order
///
/// ## Stored Totals
/// `total` and `item_count` are stored, not computed on read. Every
/// mutation path ends with [`Cart::recalculate`], which is the only place
/// the two fields are written. Mutating on missing ids is a silent no-op.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Items in the cart, insertion order.
    pub items: Vec<CartItem>,

    /// Cached sum of unit_price × quantity over all items.
    pub total: Money,

    /// Cached sum of quantities over all items.
    pub item_count: i64,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Adds a product to the cart or increases quantity if already present.
    ///
    /// ## Behavior
    /// - If product already in cart: quantity += 1
    /// - If product not in cart: pushed as a new item with quantity 1
    ///
    /// Always succeeds; there are no cart-size limits.
    pub fn add_item(&mut self, product: &Product) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == product.id) {
            item.quantity += 1;
        } else {
            self.items.push(CartItem::from_product(product));
        }
        self.recalculate();
    }

    /// Adds a product with an explicit variant selection.
    ///
    /// Variants do not split the line: the cart keys on product id, so a
    /// second add with a different color still merges into the same item
    /// (matching the storefront's one-row-per-product display).
    pub fn add_item_with_variant(
        &mut self,
        product: &Product,
        color: Option<String>,
        storage: Option<String>,
    ) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == product.id) {
            item.quantity += 1;
        } else {
            let mut item = CartItem::from_product(product);
            item.color = color;
            item.storage = storage;
            self.items.push(item);
        }
        self.recalculate();
    }

    /// Removes an item from the cart by product id.
    ///
    /// Removing an id that is not in the cart is a silent no-op.
    pub fn remove_item(&mut self, id: u32) {
        self.items.retain(|i| i.id != id);
        self.recalculate();
    }

    /// Sets the quantity of an item directly.
    ///
    /// ## Behavior
    /// - Quantity <= 0 removes the item (the "quantity always positive"
    ///   invariant holds regardless of caller)
    /// - Unknown id is a silent no-op
    pub fn update_quantity(&mut self, id: u32, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(id);
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.quantity = quantity;
        }
        self.recalculate();
    }

    /// Clears all items from the cart and resets the cached totals.
    pub fn clear(&mut self) {
        self.items.clear();
        self.recalculate();
    }

    /// Recomputes the cached `total` and `item_count` from `items`.
    ///
    /// Single write point for the cached fields; called at the end of every
    /// mutation so the stored values cannot drift.
    pub fn recalculate(&mut self) {
        self.item_count = self.items.iter().map(|i| i.quantity).sum();
        self.total = self
            .items
            .iter()
            .fold(Money::zero(), |acc, i| acc + i.line_total());
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of distinct products in the cart.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn test_product(id: u32, price: i64) -> Product {
        Product {
            id,
            name: format!("محصول {}", id),
            category: Category::Accessory,
            price: Money::from_tomans(price),
            original_price: Money::from_tomans(price),
            image: format!("/images/{}.jpg", id),
            rating: 45,
            reviews: 10,
            in_stock: true,
            is_new: false,
            is_sale: false,
            color: None,
            storage: None,
        }
    }

    /// Recomputes totals the long way and compares with the cached fields.
    fn assert_totals_consistent(cart: &Cart) {
        let expected_count: i64 = cart.items.iter().map(|i| i.quantity).sum();
        let expected_total: i64 = cart
            .items
            .iter()
            .map(|i| i.unit_price.tomans() * i.quantity)
            .sum();
        assert_eq!(cart.item_count, expected_count);
        assert_eq!(cart.total.tomans(), expected_total);
    }

    #[test]
    fn test_add_item() {
        let mut cart = Cart::new();
        let product = test_product(1, 999_000);

        cart.add_item(&product);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.item_count, 1);
        assert_eq!(cart.total.tomans(), 999_000);
        assert_totals_consistent(&cart);
    }

    #[test]
    fn test_add_same_product_merges() {
        let mut cart = Cart::new();
        let product = test_product(1, 999_000);

        cart.add_item(&product);
        cart.add_item(&product);

        // One entry with quantity 2, not two entries
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.items[0].quantity, 2);
        assert_eq!(cart.item_count, 2);
        assert_totals_consistent(&cart);
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::new();
        cart.add_item(&test_product(1, 100_000));
        cart.add_item(&test_product(2, 200_000));

        cart.remove_item(1);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.items[0].id, 2);
        assert_totals_consistent(&cart);
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(&test_product(1, 100_000));

        cart.remove_item(42);

        assert_eq!(cart.line_count(), 1);
        assert_totals_consistent(&cart);
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = Cart::new();
        cart.add_item(&test_product(1, 100_000));

        cart.update_quantity(1, 5);

        assert_eq!(cart.items[0].quantity, 5);
        assert_eq!(cart.item_count, 5);
        assert_eq!(cart.total.tomans(), 500_000);
        assert_totals_consistent(&cart);
    }

    #[test]
    fn test_update_quantity_to_zero_removes() {
        let mut cart = Cart::new();
        cart.add_item(&test_product(1, 100_000));

        cart.update_quantity(1, 0);

        assert!(cart.is_empty());
        assert_eq!(cart.item_count, 0);
        assert!(cart.total.is_zero());
    }

    #[test]
    fn test_update_quantity_negative_removes() {
        let mut cart = Cart::new();
        cart.add_item(&test_product(1, 100_000));

        cart.update_quantity(1, -2);

        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_absent_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(&test_product(1, 100_000));

        cart.update_quantity(42, 7);

        assert_eq!(cart.items[0].quantity, 1);
        assert_totals_consistent(&cart);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_item(&test_product(1, 100_000));
        cart.add_item(&test_product(2, 200_000));

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.item_count, 0);
        assert!(cart.total.is_zero());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();
        for id in [3, 1, 2] {
            cart.add_item(&test_product(id, 100_000));
        }
        let ids: Vec<u32> = cart.items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_variant_snapshot() {
        let mut cart = Cart::new();
        let product = test_product(1, 100_000);
        cart.add_item_with_variant(&product, Some("مشکی".to_string()), Some("256GB".to_string()));

        assert_eq!(cart.items[0].color.as_deref(), Some("مشکی"));
        assert_eq!(cart.items[0].storage.as_deref(), Some("256GB"));

        // A second add merges into the same line
        cart.add_item(&product);
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.items[0].quantity, 2);
    }

    #[test]
    fn test_random_operation_sequence_keeps_totals_consistent() {
        // Deterministic pseudo-random walk over cart operations; the cached
        // totals must match a full recomputation at every step.
        let mut cart = Cart::new();
        let products: Vec<Product> =
            (1..=5).map(|id| test_product(id, id as i64 * 50_000)).collect();

        let mut seed: u64 = 0x5eed;
        for _ in 0..500 {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let op = (seed >> 33) % 4;
            let id = ((seed >> 40) % 5) as u32 + 1;
            match op {
                0 => cart.add_item(&products[(id - 1) as usize]),
                1 => cart.remove_item(id),
                2 => cart.update_quantity(id, ((seed >> 45) % 7) as i64 - 1),
                _ => cart.update_quantity(id, ((seed >> 45) % 9) as i64 + 1),
            }
            assert_totals_consistent(&cart);
            assert!(cart.items.iter().all(|i| i.quantity >= 1));
        }
    }
}
