//! # bazaar-core: Pure Business Logic for the Bazaar Storefront
//!
//! This crate is the **heart** of the Bazaar storefront. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bazaar Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (web pages)                         │   │
//! │  │    Product UI ──► Cart UI ──► Checkout UI ──► Wallet UI        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    bazaar-store                                 │   │
//! │  │    CartState, WishlistState, WalletState, CheckoutFlow         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bazaar-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │   cart    │  │  wallet   │  │ checkout  │  │   │
//! │  │   │   Money   │  │   Cart    │  │  Wallet   │  │  Pricing  │  │   │
//! │  │   │  (toman)  │  │ CartItem  │  │Transaction│  │ Shipping  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - Catalog types (Product, Category)
//! - [`catalog`] - Bundled mock product data
//! - [`cart`] - Shopping cart with cached totals
//! - [`wishlist`] - Favorited-product set
//! - [`wallet`] - Stored-value balance and transaction log
//! - [`checkout`] - Shipping, coupon, and order pricing rules
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network and file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are whole toman (i64), never floats
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use bazaar_core::money::Money;
//! use bazaar_core::checkout::{OrderPricing, PricingRules, ShippingMethod};
//!
//! // Create money from whole toman (never from floats!)
//! let subtotal = Money::from_tomans(3_000_000);
//!
//! let rules = PricingRules::default();
//! let pricing = OrderPricing::quote(subtotal, false, ShippingMethod::Standard, &rules);
//!
//! // 3,000,000 is below the free-shipping threshold, so shipping applies
//! assert_eq!(pricing.total.tomans(), 3_150_000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;
pub mod wallet;
pub mod wishlist;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use bazaar_core::Money` instead of
// `use bazaar_core::money::Money`

pub use cart::{Cart, CartItem};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::{Category, Product};
pub use wallet::{Transaction, TransactionStatus, TransactionType, Wallet};
pub use wishlist::{Wishlist, WishlistItem};
