//! # Wallet State
//!
//! Container for the wallet balance and transaction log, plus the
//! deposit/withdraw entry points the wallet page calls.
//!
//! ## Entry Points
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Wallet Page Actions                                  │
//! │                                                                         │
//! │  "شارژ کیف پول" ────► deposit() ─────► Completed tx, balance += amount │
//! │                                                                         │
//! │  "برداشت" ──────────► withdraw() ────► Pending tx, balance unchanged   │
//! │                          │             until the transfer settles      │
//! │                          ▼                                              │
//! │                     update_status(id, Completed | Failed)              │
//! │                                                                         │
//! │  Checkout ──────────► add_transaction() via CheckoutFlow               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use tracing::{debug, info};

use bazaar_core::validation::validate_amount;
use bazaar_core::{Money, Transaction, TransactionStatus, TransactionType, Wallet};

use crate::error::StoreError;

/// Shared wallet state container.
#[derive(Debug, Clone, Default)]
pub struct WalletState {
    wallet: Arc<Mutex<Wallet>>,
}

impl WalletState {
    /// Creates a new empty wallet state.
    pub fn new() -> Self {
        WalletState::default()
    }

    /// Executes a function with read access to the wallet.
    pub fn with_wallet<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Wallet) -> R,
    {
        let wallet = self.wallet.lock().expect("Wallet mutex poisoned");
        f(&wallet)
    }

    /// Executes a function with write access to the wallet.
    pub fn with_wallet_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Wallet) -> R,
    {
        let mut wallet = self.wallet.lock().expect("Wallet mutex poisoned");
        f(&mut wallet)
    }

    /// Current balance.
    pub fn balance(&self) -> Money {
        self.with_wallet(|w| w.balance)
    }

    /// Absolute balance overwrite; initialization only.
    pub fn set_balance(&self, amount: Money) {
        debug!(amount = %amount, "set_balance");
        self.with_wallet_mut(|w| w.set_balance(amount));
    }

    /// Tops up the wallet.
    ///
    /// The (mock) payment gateway settles immediately, so the transaction
    /// is created Completed and the balance moves right away.
    ///
    /// ## Errors
    /// Rejects non-positive amounts before any transaction is created.
    pub fn deposit(&self, amount: Money) -> Result<String, StoreError> {
        validate_amount(amount)?;

        let transaction = Transaction::new(
            TransactionType::Deposit,
            amount,
            "شارژ کیف پول",
            TransactionStatus::Completed,
        );
        let id = transaction.id.clone();

        self.with_wallet_mut(|w| w.add_transaction(transaction));
        info!(transaction_id = %id, amount = %amount, "Wallet deposit");
        Ok(id)
    }

    /// Requests a withdrawal to a bank account.
    ///
    /// Bank transfers do not settle synchronously: the transaction is
    /// created Pending and the balance is untouched until
    /// [`WalletState::update_status`] marks it Completed.
    ///
    /// ## Errors
    /// Rejects non-positive amounts and amounts above the current balance
    /// (a withdrawal may never drive the balance negative once it settles).
    pub fn withdraw(&self, amount: Money) -> Result<String, StoreError> {
        validate_amount(amount)?;

        let balance = self.balance();
        if balance < amount {
            return Err(StoreError::insufficient_balance());
        }

        let transaction = Transaction::new(
            TransactionType::Withdraw,
            amount,
            "برداشت به حساب بانکی",
            TransactionStatus::Pending,
        );
        let id = transaction.id.clone();

        self.with_wallet_mut(|w| w.add_transaction(transaction));
        info!(transaction_id = %id, amount = %amount, "Withdrawal requested");
        Ok(id)
    }

    /// Appends an already-built transaction (checkout purchases, refunds).
    pub fn add_transaction(&self, transaction: Transaction) {
        debug!(transaction_id = %transaction.id, "add_transaction");
        self.with_wallet_mut(|w| w.add_transaction(transaction));
    }

    /// Transitions a transaction status (see [`Wallet::update_status`]).
    pub fn update_status(&self, id: &str, status: TransactionStatus) {
        debug!(transaction_id = %id, ?status, "update_transaction_status");
        self.with_wallet_mut(|w| w.update_status(id, status));
    }

    /// Sets the UI loading flag.
    pub fn set_loading(&self, loading: bool) {
        self.with_wallet_mut(|w| w.set_loading(loading));
    }
}
