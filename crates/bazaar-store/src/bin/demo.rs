//! Scripted shopping session against the in-memory stores.
//!
//! Walks a user through browsing, carting, wallet top-up, and a full
//! checkout, logging each step. Run with `cargo run --bin demo`; set
//! `RUST_LOG=debug` to watch every store mutation.

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bazaar_core::{catalog, Money};
use bazaar_store::{
    CartState, CheckoutFlow, SessionState, ShippingInfo, StoreConfig, UserProfile, WalletState,
    WishlistState,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = StoreConfig::from_env();
    info!(store = %config.store_name, "Storefront starting");

    let cart = CartState::new();
    let wishlist = WishlistState::new();
    let wallet = WalletState::new();
    let session = SessionState::new();

    // Sign in
    session.login(UserProfile {
        first_name: "علی".to_string(),
        last_name: "رضایی".to_string(),
        email: "ali@example.com".to_string(),
        phone: "09123456789".to_string(),
    });

    // Browse the catalog
    let products = catalog::products();
    info!(count = products.len(), "Catalog loaded");
    for product in products.iter().take(3) {
        info!(id = product.id, name = %product.name, price = %product.price, "Product");
    }

    // Favorite a product, cart two others
    wishlist.add(&products[0]);
    let phone = catalog::find(1).ok_or("missing product 1")?;
    let headphone = catalog::find(5).ok_or("missing product 5")?;
    cart.add(&phone);
    cart.add(&phone);
    cart.add(&headphone);
    info!(
        items = cart.with_cart(|c| c.item_count),
        total = %cart.with_cart(|c| c.total),
        "Cart filled"
    );

    // Top up the wallet to cover the order
    let needed = cart.with_cart(|c| c.total) + Money::from_tomans(1_000_000);
    wallet.deposit(needed)?;
    info!(balance = %wallet.balance(), "Wallet charged");

    // Checkout: fill the form, pick shipping, apply the coupon, pay
    let mut flow = CheckoutFlow::new();
    flow.shipping_info = ShippingInfo {
        first_name: "علی".to_string(),
        last_name: "رضایی".to_string(),
        email: "ali@example.com".to_string(),
        phone: "09123456789".to_string(),
        address: "تهران، خیابان ولیعصر، پلاک ۱۲".to_string(),
        city: "تهران".to_string(),
        postal_code: "1234567890".to_string(),
        notes: String::new(),
    };
    flow.advance()?;
    flow.advance()?;
    flow.apply_coupon("SAVE20", &config);

    let pricing = flow.pricing(&cart, &config);
    info!(
        subtotal = %pricing.subtotal,
        discount = %pricing.discount,
        shipping = %pricing.shipping_cost,
        total = %pricing.total,
        "Order priced"
    );

    let receipt = flow.submit_payment(&cart, &wallet, &config)?;
    println!("{}", serde_json::to_string_pretty(&receipt)?);

    info!(
        balance = %wallet.balance(),
        cart_empty = cart.with_cart(|c| c.is_empty()),
        "Session finished"
    );
    Ok(())
}
