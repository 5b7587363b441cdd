//! Aggregate summaries over a sequence of transactions.

use std::collections::BTreeMap;

use crate::transaction::{Transaction, TransactionKind};

/// The totals and per-category sums for a sequence of transactions.
///
/// Categories are keyed by the transaction description, verbatim. The
/// description is free text, not a normalized category code, so
/// "Groceries" and "groceries" are two different categories.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Summary {
    /// The sum of all income amounts.
    pub total_income: f64,
    /// The sum of all expense amounts.
    pub total_expenses: f64,
    /// `total_income - total_expenses`. May be negative.
    pub balance: f64,
    /// Income summed per description, in key order.
    pub income_by_category: BTreeMap<String, f64>,
    /// Expenses summed per description, in key order.
    pub expense_by_category: BTreeMap<String, f64>,
}

/// Compute the totals and category sums for `transactions`.
///
/// An empty input yields all sums zero and empty category maps.
pub fn aggregate(transactions: &[Transaction]) -> Summary {
    let mut summary = Summary::default();

    for transaction in transactions {
        let by_category = match transaction.kind {
            TransactionKind::Income => {
                summary.total_income += transaction.amount;
                &mut summary.income_by_category
            }
            TransactionKind::Expense => {
                summary.total_expenses += transaction.amount;
                &mut summary.expense_by_category
            }
        };

        *by_category
            .entry(transaction.description.clone())
            .or_insert(0.0) += transaction.amount;
    }

    summary.balance = summary.total_income - summary.total_expenses;
    summary
}
