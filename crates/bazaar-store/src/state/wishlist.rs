//! # Wishlist State
//!
//! Container for the favorited-product set. Same shape as
//! [`super::CartState`]: `Arc<Mutex<_>>` with closure-based access.

use std::sync::{Arc, Mutex};

use tracing::debug;

use bazaar_core::{Product, Wishlist};

/// Shared wishlist state container.
#[derive(Debug, Clone, Default)]
pub struct WishlistState {
    wishlist: Arc<Mutex<Wishlist>>,
}

impl WishlistState {
    /// Creates a new empty wishlist state.
    pub fn new() -> Self {
        WishlistState::default()
    }

    /// Executes a function with read access to the wishlist.
    pub fn with_wishlist<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Wishlist) -> R,
    {
        let wishlist = self.wishlist.lock().expect("Wishlist mutex poisoned");
        f(&wishlist)
    }

    /// Executes a function with write access to the wishlist.
    pub fn with_wishlist_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Wishlist) -> R,
    {
        let mut wishlist = self.wishlist.lock().expect("Wishlist mutex poisoned");
        f(&mut wishlist)
    }

    /// Favorites a product (idempotent on id).
    pub fn add(&self, product: &Product) {
        debug!(product_id = product.id, "add_to_wishlist");
        self.with_wishlist_mut(|w| w.add_item(product));
    }

    /// Unfavorites a product; absent ids are a no-op.
    pub fn remove(&self, id: u32) {
        debug!(product_id = id, "remove_from_wishlist");
        self.with_wishlist_mut(|w| w.remove_item(id));
    }

    /// Empties the wishlist.
    pub fn clear(&self) {
        debug!("clear_wishlist");
        self.with_wishlist_mut(Wishlist::clear);
    }

    /// Whether a product is favorited (drives the heart icon).
    pub fn contains(&self, id: u32) -> bool {
        self.with_wishlist(|w| w.contains(id))
    }

    /// Number of favorited products (navbar badge).
    pub fn len(&self) -> usize {
        self.with_wishlist(Wishlist::len)
    }

    /// Checks if the wishlist is empty.
    pub fn is_empty(&self) -> bool {
        self.with_wishlist(Wishlist::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazaar_core::catalog;

    #[test]
    fn test_add_twice_keeps_one_entry() {
        let state = WishlistState::new();
        let product = catalog::find(5).unwrap();

        state.add(&product);
        state.add(&product);

        assert_eq!(state.len(), 1);
        assert!(state.contains(5));
    }

    #[test]
    fn test_remove_and_clear() {
        let state = WishlistState::new();
        state.add(&catalog::find(1).unwrap());
        state.add(&catalog::find(2).unwrap());

        state.remove(1);
        assert!(!state.contains(1));
        assert_eq!(state.len(), 1);

        state.remove(99); // absent: no-op
        assert_eq!(state.len(), 1);

        state.clear();
        assert!(state.is_empty());
    }
}
