//! # bazaar-store: State Containers and Checkout Orchestration
//!
//! This crate owns the storefront's mutable state. Each slice (cart,
//! wishlist, wallet, session) lives in its own container, and the checkout
//! flow coordinates across them.
//!
//! ## Design
//! - **Explicit injection, no globals**: pages receive the state containers
//!   they need instead of reaching into ambient state, so everything is
//!   testable without a UI framework.
//! - **One container per slice**: each store owns its slice exclusively;
//!   checkout reads cart and wallet snapshots but owns neither.
//! - **Synchronous mutations**: all store mutations happen inside a single
//!   user-interaction handler. The `Arc<Mutex<_>>` wrappers exist for
//!   shared ownership and interior mutability, not for cross-thread
//!   contention.
//!
//! ## Lifecycle
//! State is created at app start and discarded at tab close. Nothing is
//! persisted; a reload starts from empty stores.

pub mod checkout;
pub mod error;
pub mod state;

pub use checkout::{CheckoutFlow, CheckoutStep, OrderReceipt, PaymentMethod, ShippingInfo};
pub use error::{ErrorCode, StoreError};
pub use state::{CartState, SessionState, StoreConfig, UserProfile, WalletState, WishlistState};
