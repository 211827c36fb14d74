//! # State Module
//!
//! Manages application state for the storefront.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything,
//! we use separate state types. This approach:
//!
//! 1. **Better Separation of Concerns**: Each state type owns one slice
//! 2. **Easier Testing**: Can construct/inject individual states
//! 3. **Clearer Signatures**: Pages declare exactly what state they need
//! 4. **Exclusive Ownership**: No shared mutable references between slices
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │          ┌──────────────┬──────────────┬──────────────┐                │
//! │          ▼              ▼              ▼              ▼                 │
//! │  ┌──────────────┐ ┌──────────────┐ ┌──────────────┐ ┌──────────────┐  │
//! │  │  CartState   │ │WishlistState │ │ WalletState  │ │ SessionState │  │
//! │  │              │ │              │ │              │ │              │  │
//! │  │  Arc<Mutex<  │ │  Arc<Mutex<  │ │  Arc<Mutex<  │ │  Arc<Mutex<  │  │
//! │  │    Cart>>    │ │  Wishlist>>  │ │   Wallet>>   │ │  Session>>   │  │
//! │  └──────────────┘ └──────────────┘ └──────────────┘ └──────────────┘  │
//! │                                                                         │
//! │  ┌──────────────────┐                                                  │
//! │  │   StoreConfig    │  Read-only after initialization                  │
//! │  │  shipping rates, │                                                  │
//! │  │  coupon, name    │                                                  │
//! │  └──────────────────┘                                                  │
//! │                                                                         │
//! │  EXECUTION MODEL:                                                       │
//! │  • All mutations are synchronous within one interaction handler        │
//! │  • Checkout reads Cart + Wallet snapshots; it owns neither             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;
mod session;
mod wallet;
mod wishlist;

pub use cart::CartState;
pub use config::StoreConfig;
pub use session::{Session, SessionState, UserProfile};
pub use wallet::WalletState;
pub use wishlist::WishlistState;
