//! # Cart State
//!
//! Container for the current shopping cart.
//!
//! ## Ownership
//! The cart is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple pages share the same cart (navbar badge, cart page, checkout)
//! 2. Only one handler should modify the cart at a time
//! 3. `Arc` lets the containers be cloned into whatever needs them
//!
//! All access goes through the `with_cart`/`with_cart_mut` closures, so the
//! lock is held only for the duration of the operation.

use std::sync::{Arc, Mutex};

use tracing::debug;

use bazaar_core::{Cart, Product};

/// Shared cart state container.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState::default()
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust
    /// use bazaar_store::CartState;
    ///
    /// let cart_state = CartState::new();
    /// let count = cart_state.with_cart(|cart| cart.item_count);
    /// assert_eq!(count, 0);
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&mut cart)
    }

    /// Adds a product to the cart (merge on product id).
    pub fn add(&self, product: &Product) {
        debug!(product_id = product.id, name = %product.name, "add_to_cart");
        self.with_cart_mut(|cart| cart.add_item(product));
    }

    /// Removes a product from the cart; absent ids are a no-op.
    pub fn remove(&self, id: u32) {
        debug!(product_id = id, "remove_from_cart");
        self.with_cart_mut(|cart| cart.remove_item(id));
    }

    /// Sets an item quantity; 0 or less removes the item.
    pub fn update_quantity(&self, id: u32, quantity: i64) {
        debug!(product_id = id, quantity, "update_cart_quantity");
        self.with_cart_mut(|cart| cart.update_quantity(id, quantity));
    }

    /// Empties the cart.
    pub fn clear(&self) {
        debug!("clear_cart");
        self.with_cart_mut(Cart::clear);
    }

    /// Snapshot of the whole cart (for checkout and rendering).
    pub fn snapshot(&self) -> Cart {
        self.with_cart(Cart::clone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazaar_core::{catalog, Money};

    #[test]
    fn test_shared_handle_sees_mutations() {
        let state = CartState::new();
        let navbar_handle = state.clone();

        let product = catalog::find(1).unwrap();
        state.add(&product);
        state.add(&product);

        // The cloned handle reads the same underlying cart
        assert_eq!(navbar_handle.with_cart(|c| c.item_count), 2);
        assert_eq!(navbar_handle.with_cart(|c| c.line_count()), 1);
    }

    #[test]
    fn test_operations_delegate_to_cart() {
        let state = CartState::new();
        let product = catalog::find(10).unwrap(); // 1,850,000

        state.add(&product);
        state.update_quantity(10, 3);
        assert_eq!(
            state.with_cart(|c| c.total),
            Money::from_tomans(5_550_000)
        );

        state.remove(10);
        assert!(state.with_cart(|c| c.is_empty()));

        state.add(&product);
        state.clear();
        assert!(state.with_cart(|c| c.is_empty()));
    }

    #[test]
    fn test_snapshot_is_detached() {
        let state = CartState::new();
        state.add(&catalog::find(1).unwrap());

        let snapshot = state.snapshot();
        state.clear();

        // The snapshot keeps the pre-clear contents
        assert_eq!(snapshot.item_count, 1);
        assert!(state.with_cart(|c| c.is_empty()));
    }
}
