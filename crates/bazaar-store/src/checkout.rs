//! # Checkout Flow
//!
//! Page-level checkout orchestration across the cart and wallet stores.
//!
//! ## Step Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Checkout Steps                                       │
//! │                                                                         │
//! │  ┌──────────────┐    ┌────────────────┐    ┌─────────┐    ┌──────────┐ │
//! │  │ ShippingInfo │───►│ ShippingMethod │───►│ Payment │───►│ Complete │ │
//! │  └──────────────┘    └────────────────┘    └─────────┘    └──────────┘ │
//! │         ▲ │                ▲ │                ▲ │              ▲        │
//! │         │ └───── back ─────┘ └───── back ─────┘ │              │        │
//! │         │                                       │              │        │
//! │      advance() validates the form         submit_payment() ────┘        │
//! │                                                                         │
//! │  • advance() moves forward one step; it cannot move past Payment        │
//! │  • Complete is reached only through a successful payment submission     │
//! │  • Complete is terminal: no further transitions                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Atomicity
//! `submit_payment` is all-or-nothing at the orchestration level: when the
//! wallet cannot cover the total, no transaction is created, the cart is
//! untouched, and the flow stays in Payment. On success exactly one
//! purchase transaction lands, then the cart clears, then the step moves
//! to Complete. The flow reads cart and wallet snapshots; it owns neither
//! store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use bazaar_core::checkout::{OrderPricing, ShippingMethod};
use bazaar_core::validation::{
    validate_email, validate_mobile, validate_postal_code, validate_required,
};
use bazaar_core::{
    CartItem, CoreError, Money, Transaction, TransactionStatus, TransactionType,
};

use crate::error::StoreError;
use crate::state::{CartState, StoreConfig, WalletState};

// =============================================================================
// Steps
// =============================================================================

/// Where the user is in the checkout sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStep {
    /// اطلاعات ارسال - shipping address form.
    ShippingInfo,
    /// روش ارسال - standard vs express.
    ShippingMethod,
    /// پرداخت - payment method and submission.
    Payment,
    /// تکمیل - order placed; terminal.
    Complete,
}

/// How the order is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Pay from the wallet balance.
    Wallet,
    /// Pay through the (mock) card gateway.
    Card,
}

// =============================================================================
// Shipping Form
// =============================================================================

/// The shipping address form collected in the first step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    /// Optional delivery notes; the only non-required field.
    pub notes: String,
}

impl ShippingInfo {
    /// Validates the form before the flow may leave the ShippingInfo step.
    pub fn validate(&self) -> Result<(), StoreError> {
        validate_required("first_name", &self.first_name)?;
        validate_required("last_name", &self.last_name)?;
        validate_email(&self.email)?;
        validate_mobile(&self.phone)?;
        validate_required("address", &self.address)?;
        validate_required("city", &self.city)?;
        validate_postal_code(&self.postal_code)?;
        Ok(())
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// What a successful submission returns; everything the completion page
/// renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceipt {
    /// Time-based order number.
    pub order_number: String,

    /// Line items as they were at submission.
    pub items: Vec<CartItem>,

    /// Cart total before adjustments.
    pub subtotal: Money,

    /// Coupon discount (zero when none applied).
    pub discount: Money,

    /// Shipping cost for the selected method.
    pub shipping_cost: Money,

    /// What was charged.
    pub total: Money,

    /// How the order was paid.
    pub payment_method: PaymentMethod,

    /// When the order was placed.
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Flow
// =============================================================================

/// The checkout flow for one ordering session.
///
/// Holds the user's progress and selections; created when the checkout
/// page opens and dropped when the user leaves it.
#[derive(Debug, Clone)]
pub struct CheckoutFlow {
    step: CheckoutStep,

    /// The shipping form, edited in place by the UI.
    pub shipping_info: ShippingInfo,

    /// Selected delivery method.
    pub shipping_method: ShippingMethod,

    /// Selected payment method.
    pub payment_method: PaymentMethod,

    coupon_applied: bool,
}

impl Default for CheckoutFlow {
    fn default() -> Self {
        CheckoutFlow {
            step: CheckoutStep::ShippingInfo,
            shipping_info: ShippingInfo::default(),
            shipping_method: ShippingMethod::Standard,
            payment_method: PaymentMethod::Wallet,
            coupon_applied: false,
        }
    }
}

impl CheckoutFlow {
    /// Starts a fresh checkout at the shipping-info step.
    pub fn new() -> Self {
        CheckoutFlow::default()
    }

    /// Current step.
    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    /// Whether the coupon has been applied to this session.
    pub fn coupon_applied(&self) -> bool {
        self.coupon_applied
    }

    /// Moves forward one step after validating the current one.
    ///
    /// ## Errors
    /// - ShippingInfo: the form must validate
    /// - Payment: cannot advance; only `submit_payment` reaches Complete
    /// - Complete: terminal
    pub fn advance(&mut self) -> Result<CheckoutStep, StoreError> {
        match self.step {
            CheckoutStep::ShippingInfo => {
                self.shipping_info.validate()?;
                self.step = CheckoutStep::ShippingMethod;
            }
            CheckoutStep::ShippingMethod => {
                self.step = CheckoutStep::Payment;
            }
            CheckoutStep::Payment => {
                return Err(StoreError::business(
                    "Payment must be submitted, not skipped",
                ));
            }
            CheckoutStep::Complete => {
                return Err(StoreError::business("Checkout is already complete"));
            }
        }
        debug!(step = ?self.step, "checkout_advance");
        Ok(self.step)
    }

    /// Moves backward one step.
    ///
    /// A no-op at ShippingInfo (nowhere to go) and at Complete (terminal:
    /// the order is already placed).
    pub fn back(&mut self) -> CheckoutStep {
        self.step = match self.step {
            CheckoutStep::ShippingInfo => CheckoutStep::ShippingInfo,
            CheckoutStep::ShippingMethod => CheckoutStep::ShippingInfo,
            CheckoutStep::Payment => CheckoutStep::ShippingMethod,
            CheckoutStep::Complete => CheckoutStep::Complete,
        };
        debug!(step = ?self.step, "checkout_back");
        self.step
    }

    /// Tries to apply a coupon code.
    ///
    /// Returns whether the code matched; an unknown code leaves the
    /// session unchanged (the cart page just keeps the field editable).
    pub fn apply_coupon(&mut self, code: &str, config: &StoreConfig) -> bool {
        if config.pricing.coupon_matches(code) {
            self.coupon_applied = true;
            info!(code = %config.pricing.coupon_code, "coupon_applied");
            true
        } else {
            debug!("coupon_rejected");
            false
        }
    }

    /// Prices the order as currently configured, without submitting.
    ///
    /// The checkout sidebar calls this on every selection change.
    pub fn pricing(&self, cart: &CartState, config: &StoreConfig) -> OrderPricing {
        let subtotal = cart.with_cart(|c| c.total);
        OrderPricing::quote(
            subtotal,
            self.coupon_applied,
            self.shipping_method,
            &config.pricing,
        )
    }

    /// Submits the payment.
    ///
    /// ## Contract
    /// - Must be at the Payment step with a non-empty cart.
    /// - Wallet payment requires `balance >= total`; otherwise the call
    ///   fails, the flow stays in Payment, and neither store changes.
    /// - On success: exactly one purchase/Completed transaction for the
    ///   final total (wallet payments only), the cart is cleared, and the
    ///   flow reaches Complete.
    pub fn submit_payment(
        &mut self,
        cart: &CartState,
        wallet: &WalletState,
        config: &StoreConfig,
    ) -> Result<OrderReceipt, StoreError> {
        if self.step != CheckoutStep::Payment {
            return Err(StoreError::business("Not at the payment step"));
        }

        let snapshot = cart.snapshot();
        if snapshot.is_empty() {
            return Err(CoreError::EmptyCart.into());
        }

        let pricing = OrderPricing::quote(
            snapshot.total,
            self.coupon_applied,
            self.shipping_method,
            &config.pricing,
        );

        if self.payment_method == PaymentMethod::Wallet {
            let balance = wallet.balance();
            if balance < pricing.total {
                warn!(balance = %balance, required = %pricing.total, "payment_rejected");
                return Err(CoreError::InsufficientBalance {
                    available: balance,
                    required: pricing.total,
                }
                .into());
            }

            wallet.add_transaction(Transaction::new(
                TransactionType::Purchase,
                pricing.total,
                format!("خرید {} محصول", snapshot.line_count()),
                TransactionStatus::Completed,
            ));
        }

        cart.clear();
        self.step = CheckoutStep::Complete;

        let order_number = generate_order_number();
        info!(
            order_number = %order_number,
            total = %pricing.total,
            items = snapshot.items.len(),
            "Order placed"
        );

        Ok(OrderReceipt {
            order_number,
            items: snapshot.items,
            subtotal: pricing.subtotal,
            discount: pricing.discount,
            shipping_cost: pricing.shipping_cost,
            total: pricing.total,
            payment_method: self.payment_method,
            created_at: Utc::now(),
        })
    }
}

fn generate_order_number() -> String {
    let now = Utc::now();
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);
    let random: u16 = (nanos % 10000) as u16;
    format!("{}-{:04}", now.format("%y%m%d-%H%M%S"), random)
}
