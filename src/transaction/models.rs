//! Defines the core data model for transactions.

use serde::{Deserialize, Serialize};
use time::Date;

/// The ID of a transaction in the ledger.
///
/// IDs are minted from the Unix time in milliseconds at creation, so they
/// increase monotonically and are never reused.
pub type TransactionId = i64;

/// Whether a transaction brings money in or takes money out.
///
/// This is a closed tag: amounts are always stored as non-negative numbers
/// and the sign of a transaction is carried here instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money earned, e.g. a salary payment.
    Income,
    /// Money spent, e.g. a supermarket shop.
    Expense,
}

impl TransactionKind {
    /// The lowercase tag used in the ledger file and in form values.
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// The `description` doubles as the grouping key for the category summaries,
/// verbatim: two descriptions that differ in case or whitespace are distinct
/// categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The amount of money spent or earned in this transaction. Never negative.
    pub amount: f64,
    /// Whether this transaction is an income or an expense.
    ///
    /// Stored under the field name `type` for compatibility with the ledger
    /// file layout.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// The calendar date when the transaction happened, with no time of day.
    pub date: Date,
}
