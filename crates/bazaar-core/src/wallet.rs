//! # Wallet
//!
//! An internal stored-value balance usable as a payment method, with an
//! append-only transaction log.
//!
//! ## Balance Invariant
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  balance == Σ signed amounts of transactions with status Completed     │
//! │                                                                         │
//! │  Sign rule:   deposit, refund    → +amount                             │
//! │               withdraw, purchase → -amount                             │
//! │                                                                         │
//! │  The balance is maintained incrementally, not recomputed on read, so   │
//! │  EVERY mutation path must preserve the invariant:                      │
//! │                                                                         │
//! │  add_transaction(Completed) ──► apply once, mark applied               │
//! │  add_transaction(Pending)   ──► no balance change                      │
//! │  update_status(Pending→Completed) ──► apply once, mark applied         │
//! │  update_status(Pending→Failed)    ──► status only                      │
//! │  update_status on non-Pending     ──► silent no-op                     │
//! │                                                                         │
//! │  The per-transaction `applied` flag guarantees at-most-once            │
//! │  application regardless of where the transition happens.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Log Ordering
//! Transactions are kept newest-first: `add_transaction` prepends, which is
//! what the wallet page renders top-down.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Transaction Type
// =============================================================================

/// The kind of balance-affecting event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    /// Wallet top-up (شارژ کیف پول).
    Deposit,
    /// Withdrawal to a bank account.
    Withdraw,
    /// Payment for an order.
    Purchase,
    /// Money returned for a cancelled order.
    Refund,
}

impl TransactionType {
    /// Whether this type credits the balance (deposit/refund) rather than
    /// debiting it (withdraw/purchase).
    pub const fn is_credit(&self) -> bool {
        matches!(self, TransactionType::Deposit | TransactionType::Refund)
    }

    /// The signed balance delta for a transaction of this type.
    pub fn signed(&self, amount: Money) -> Money {
        if self.is_credit() {
            amount
        } else {
            Money::zero() - amount
        }
    }
}

// =============================================================================
// Transaction Status
// =============================================================================

/// Lifecycle status of a transaction.
///
/// Allowed transitions: Pending → Completed, Pending → Failed.
/// Completed and Failed are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    /// Awaiting settlement (e.g. a bank transfer in flight).
    Pending,
    /// Settled; reflected in the balance.
    Completed,
    /// Rejected or timed out; never touches the balance.
    Failed,
}

// =============================================================================
// Transaction
// =============================================================================

/// An immutable record of a balance-affecting event with a mutable status.
///
/// After creation only `status` may change (and only out of Pending);
/// `id`, `kind`, `amount`, `description`, and `created_at` are frozen.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique time-based id (see [`generate_transaction_id`]).
    pub id: String,

    /// What kind of event this records.
    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Positive amount; the sign lives in `kind`.
    pub amount: Money,

    /// Human-readable description shown in the transaction list.
    pub description: String,

    /// When the transaction was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// Current lifecycle status.
    pub status: TransactionStatus,

    /// Whether the signed amount has been applied to the balance.
    /// Internal bookkeeping for at-most-once application; not serialized.
    #[serde(skip)]
    applied: bool,
}

impl Transaction {
    /// Creates a new transaction with a fresh time-based id.
    ///
    /// Callers validate the amount first (see
    /// [`crate::validation::validate_amount`]); the constructor itself does
    /// not reject, matching the store-layer validation split.
    pub fn new(
        kind: TransactionType,
        amount: Money,
        description: impl Into<String>,
        status: TransactionStatus,
    ) -> Self {
        Transaction {
            id: generate_transaction_id(),
            kind,
            amount,
            description: description.into(),
            created_at: Utc::now(),
            status,
            applied: false,
        }
    }

    /// Whether the signed amount has been applied to the wallet balance.
    #[inline]
    pub const fn is_applied(&self) -> bool {
        self.applied
    }
}

/// Generates a unique time-based transaction id.
///
/// Format: `yymmdd-HHMMSS-nnnn`. The suffix is a process-local sequence,
/// so two transactions created in the same second still differ.
pub fn generate_transaction_id() -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    static SEQUENCE: AtomicU64 = AtomicU64::new(0);

    let now = Utc::now();
    let suffix = SEQUENCE.fetch_add(1, Ordering::Relaxed) % 10000;
    format!("{}-{:04}", now.format("%y%m%d-%H%M%S"), suffix)
}

// =============================================================================
// Wallet
// =============================================================================

/// The wallet: balance plus newest-first transaction log.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    /// Current balance; see the module docs for the invariant.
    pub balance: Money,

    /// Transaction log, newest first.
    pub transactions: Vec<Transaction>,

    /// UI-only loading flag (deposit simulation); no invariant impact.
    pub is_loading: bool,
}

impl Wallet {
    /// Creates an empty wallet.
    pub fn new() -> Self {
        Wallet::default()
    }

    /// Absolute balance overwrite.
    ///
    /// Initialization only: bypasses the transaction log, so calling this
    /// after transactions exist breaks the ledger invariant on purpose
    /// (e.g. seeding a demo balance).
    pub fn set_balance(&mut self, amount: Money) {
        self.balance = amount;
    }

    /// Prepends a transaction to the log.
    ///
    /// If the transaction arrives already Completed, its signed amount is
    /// applied to the balance immediately and exactly once. Pending and
    /// Failed transactions leave the balance untouched at insertion.
    pub fn add_transaction(&mut self, mut transaction: Transaction) {
        if transaction.status == TransactionStatus::Completed && !transaction.applied {
            self.balance += transaction.kind.signed(transaction.amount);
            transaction.applied = true;
        }
        self.transactions.insert(0, transaction);
    }

    /// Transitions a transaction's status in place.
    ///
    /// ## Semantics
    /// Only transitions out of Pending take effect; Completed and Failed
    /// are terminal, and attempts to change them (or an unknown id) are
    /// silent no-ops. A Pending → Completed transition applies the signed
    /// amount at that moment, guarded by the `applied` flag so the delta
    /// lands at most once no matter where the transition happened.
    pub fn update_status(&mut self, id: &str, new_status: TransactionStatus) {
        let Some(transaction) = self.transactions.iter_mut().find(|t| t.id == id) else {
            return;
        };

        if transaction.status != TransactionStatus::Pending {
            return;
        }

        transaction.status = new_status;

        if new_status == TransactionStatus::Completed && !transaction.applied {
            transaction.applied = true;
            let delta = transaction.kind.signed(transaction.amount);
            self.balance += delta;
        }
    }

    /// Sets the UI loading flag.
    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }

    /// Recomputes the balance from the log (audit helper).
    ///
    /// Always equals `balance` unless `set_balance` seeded an off-ledger
    /// starting value; tests use this to check the invariant.
    pub fn ledger_balance(&self) -> Money {
        self.transactions
            .iter()
            .filter(|t| t.status == TransactionStatus::Completed)
            .fold(Money::zero(), |acc, t| acc + t.kind.signed(t.amount))
    }

    /// Looks up a transaction by id.
    pub fn find_transaction(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deposit(amount: i64, status: TransactionStatus) -> Transaction {
        Transaction::new(
            TransactionType::Deposit,
            Money::from_tomans(amount),
            "شارژ کیف پول",
            status,
        )
    }

    #[test]
    fn test_signed_amounts() {
        let amount = Money::from_tomans(100);
        assert_eq!(TransactionType::Deposit.signed(amount).tomans(), 100);
        assert_eq!(TransactionType::Refund.signed(amount).tomans(), 100);
        assert_eq!(TransactionType::Withdraw.signed(amount).tomans(), -100);
        assert_eq!(TransactionType::Purchase.signed(amount).tomans(), -100);
    }

    #[test]
    fn test_completed_deposit_applies_at_insertion() {
        let mut wallet = Wallet::new();
        wallet.add_transaction(deposit(5_000_000, TransactionStatus::Completed));

        assert_eq!(wallet.balance.tomans(), 5_000_000);
        assert_eq!(wallet.ledger_balance(), wallet.balance);
        assert!(wallet.transactions[0].is_applied());
    }

    #[test]
    fn test_pending_deposit_leaves_balance_untouched() {
        let mut wallet = Wallet::new();
        wallet.add_transaction(deposit(5_000_000, TransactionStatus::Pending));

        assert!(wallet.balance.is_zero());
        assert!(!wallet.transactions[0].is_applied());
    }

    #[test]
    fn test_pending_to_completed_applies_once() {
        let mut wallet = Wallet::new();
        let tx = deposit(2_000_000, TransactionStatus::Pending);
        let id = tx.id.clone();
        wallet.add_transaction(tx);

        wallet.update_status(&id, TransactionStatus::Completed);
        assert_eq!(wallet.balance.tomans(), 2_000_000);

        // Terminal status: a second update is a no-op, no double apply
        wallet.update_status(&id, TransactionStatus::Completed);
        assert_eq!(wallet.balance.tomans(), 2_000_000);
        assert_eq!(wallet.ledger_balance(), wallet.balance);
    }

    #[test]
    fn test_pending_to_failed_touches_status_only() {
        let mut wallet = Wallet::new();
        let tx = deposit(2_000_000, TransactionStatus::Pending);
        let id = tx.id.clone();
        wallet.add_transaction(tx);

        wallet.update_status(&id, TransactionStatus::Failed);

        assert!(wallet.balance.is_zero());
        assert_eq!(
            wallet.find_transaction(&id).unwrap().status,
            TransactionStatus::Failed
        );
    }

    #[test]
    fn test_completed_is_terminal() {
        let mut wallet = Wallet::new();
        let tx = deposit(1_000_000, TransactionStatus::Completed);
        let id = tx.id.clone();
        wallet.add_transaction(tx);

        // Trying to fail a settled transaction changes nothing
        wallet.update_status(&id, TransactionStatus::Failed);

        assert_eq!(wallet.balance.tomans(), 1_000_000);
        assert_eq!(
            wallet.find_transaction(&id).unwrap().status,
            TransactionStatus::Completed
        );
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut wallet = Wallet::new();
        wallet.add_transaction(deposit(1_000_000, TransactionStatus::Completed));

        wallet.update_status("no-such-id", TransactionStatus::Failed);

        assert_eq!(wallet.balance.tomans(), 1_000_000);
    }

    #[test]
    fn test_log_is_newest_first() {
        let mut wallet = Wallet::new();
        let first = deposit(100, TransactionStatus::Completed);
        let second = deposit(200, TransactionStatus::Completed);
        let second_id = second.id.clone();
        wallet.add_transaction(first);
        wallet.add_transaction(second);

        assert_eq!(wallet.transactions[0].id, second_id);
    }

    #[test]
    fn test_mixed_sequence_preserves_invariant() {
        let mut wallet = Wallet::new();

        wallet.add_transaction(deposit(10_000_000, TransactionStatus::Completed));
        wallet.add_transaction(Transaction::new(
            TransactionType::Purchase,
            Money::from_tomans(3_150_000),
            "خرید 2 محصول",
            TransactionStatus::Completed,
        ));
        let pending = Transaction::new(
            TransactionType::Withdraw,
            Money::from_tomans(1_000_000),
            "برداشت به حساب بانکی",
            TransactionStatus::Pending,
        );
        let pending_id = pending.id.clone();
        wallet.add_transaction(pending);

        // Pending withdraw not yet reflected
        assert_eq!(wallet.balance.tomans(), 6_850_000);
        assert_eq!(wallet.ledger_balance(), wallet.balance);

        wallet.update_status(&pending_id, TransactionStatus::Completed);
        assert_eq!(wallet.balance.tomans(), 5_850_000);
        assert_eq!(wallet.ledger_balance(), wallet.balance);

        wallet.add_transaction(Transaction::new(
            TransactionType::Refund,
            Money::from_tomans(500_000),
            "بازگشت وجه سفارش",
            TransactionStatus::Failed,
        ));
        // Failed refund never lands
        assert_eq!(wallet.balance.tomans(), 5_850_000);
        assert_eq!(wallet.ledger_balance(), wallet.balance);
    }

    #[test]
    fn test_set_balance_bypasses_log() {
        let mut wallet = Wallet::new();
        wallet.set_balance(Money::from_tomans(5_000_000));

        assert_eq!(wallet.balance.tomans(), 5_000_000);
        assert!(wallet.transactions.is_empty());
    }

    #[test]
    fn test_set_loading() {
        let mut wallet = Wallet::new();
        wallet.set_loading(true);
        assert!(wallet.is_loading);
        wallet.set_loading(false);
        assert!(!wallet.is_loading);
    }

    #[test]
    fn test_transaction_serializes_with_type_key() {
        let tx = deposit(100, TransactionStatus::Completed);
        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["type"], "deposit");
        assert_eq!(json["status"], "completed");
        // Internal bookkeeping stays internal
        assert!(json.get("applied").is_none());
    }

    #[test]
    fn test_transaction_ids_unique() {
        let ids: Vec<String> = (0..10)
            .map(|_| generate_transaction_id())
            .collect();
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }
}
