//! Filtering a snapshot of the ledger by type or date range.

use time::{Date, Duration};

use crate::transaction::{Transaction, TransactionKind};

/// A named predicate selecting a subsequence of transactions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// Keep every transaction.
    #[default]
    All,
    /// Keep only income transactions.
    Income,
    /// Keep only expense transactions.
    Expense,
    /// Keep transactions dated within the last seven days, inclusive.
    Week,
    /// Keep transactions dated in the current calendar month.
    Month,
}

impl FilterMode {
    /// Every filter mode, in the order the filter buttons are displayed.
    pub const ALL_MODES: [FilterMode; 5] = [
        FilterMode::All,
        FilterMode::Income,
        FilterMode::Expense,
        FilterMode::Week,
        FilterMode::Month,
    ];

    /// Parse a query-string value.
    ///
    /// Unknown values fall back to [FilterMode::All] so a stale or
    /// hand-edited URL still renders the full list instead of an error.
    pub fn parse(value: &str) -> Self {
        match value {
            "income" => FilterMode::Income,
            "expense" => FilterMode::Expense,
            "week" => FilterMode::Week,
            "month" => FilterMode::Month,
            _ => FilterMode::All,
        }
    }

    /// The value used in the `filter` query parameter.
    pub fn query_value(self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Income => "income",
            FilterMode::Expense => "expense",
            FilterMode::Week => "week",
            FilterMode::Month => "month",
        }
    }

    /// The human readable name shown on the filter buttons.
    pub fn label(self) -> &'static str {
        match self {
            FilterMode::All => "All",
            FilterMode::Income => "Income",
            FilterMode::Expense => "Expense",
            FilterMode::Week => "Last 7 Days",
            FilterMode::Month => "This Month",
        }
    }
}

/// Select the transactions matching `mode`.
///
/// Date comparisons are calendar-date comparisons with no time-of-day
/// component: `today` is resolved from the configured timezone at the
/// request boundary so this function stays pure. The week window includes
/// the boundary, i.e. a transaction dated exactly seven days ago is kept.
pub fn filter_transactions(
    transactions: &[Transaction],
    mode: FilterMode,
    today: Date,
) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|transaction| match mode {
            FilterMode::All => true,
            FilterMode::Income => transaction.kind == TransactionKind::Income,
            FilterMode::Expense => transaction.kind == TransactionKind::Expense,
            FilterMode::Week => transaction.date >= today - Duration::days(7),
            FilterMode::Month => {
                transaction.date.month() == today.month()
                    && transaction.date.year() == today.year()
            }
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod filter_tests {
    use time::{Duration, macros::date};

    use crate::transaction::{FilterMode, Transaction, TransactionKind, filter_transactions};

    fn create_test_transaction(
        id: i64,
        kind: TransactionKind,
        transaction_date: time::Date,
    ) -> Transaction {
        Transaction {
            id,
            description: format!("Transaction {id}"),
            amount: 10.0,
            kind,
            date: transaction_date,
        }
    }

    fn sample_transactions() -> Vec<Transaction> {
        vec![
            create_test_transaction(1, TransactionKind::Expense, date!(2025 - 07 - 29)),
            create_test_transaction(2, TransactionKind::Income, date!(2025 - 07 - 30)),
            create_test_transaction(3, TransactionKind::Expense, date!(2025 - 06 - 15)),
            create_test_transaction(4, TransactionKind::Income, date!(2025 - 07 - 01)),
        ]
    }

    #[test]
    fn all_mode_is_identity() {
        let transactions = sample_transactions();

        let got = filter_transactions(&transactions, FilterMode::All, date!(2025 - 07 - 30));

        assert_eq!(got, transactions);
    }

    #[test]
    fn income_mode_keeps_only_income() {
        let transactions = sample_transactions();

        let got = filter_transactions(&transactions, FilterMode::Income, date!(2025 - 07 - 30));

        assert_eq!(got.len(), 2);
        assert!(got.iter().all(|t| t.kind == TransactionKind::Income));
    }

    #[test]
    fn expense_mode_keeps_only_expenses() {
        let transactions = sample_transactions();

        let got = filter_transactions(&transactions, FilterMode::Expense, date!(2025 - 07 - 30));

        assert_eq!(got.len(), 2);
        assert!(got.iter().all(|t| t.kind == TransactionKind::Expense));
    }

    #[test]
    fn week_mode_includes_boundary_date() {
        let today = date!(2025 - 07 - 30);
        let transactions = vec![
            create_test_transaction(1, TransactionKind::Expense, today - Duration::days(7)),
            create_test_transaction(2, TransactionKind::Expense, today - Duration::days(8)),
            create_test_transaction(3, TransactionKind::Income, today),
        ];

        let got = filter_transactions(&transactions, FilterMode::Week, today);

        let got_ids: Vec<_> = got.iter().map(|t| t.id).collect();
        assert_eq!(got_ids, vec![1, 3]);
    }

    #[test]
    fn month_mode_uses_calendar_month_not_rolling_window() {
        let today = date!(2025 - 07 - 02);
        let transactions = vec![
            // Within 30 days of today but in the previous calendar month.
            create_test_transaction(1, TransactionKind::Expense, date!(2025 - 06 - 28)),
            create_test_transaction(2, TransactionKind::Income, date!(2025 - 07 - 01)),
            // Same month in a different year.
            create_test_transaction(3, TransactionKind::Income, date!(2024 - 07 - 15)),
        ];

        let got = filter_transactions(&transactions, FilterMode::Month, today);

        let got_ids: Vec<_> = got.iter().map(|t| t.id).collect();
        assert_eq!(got_ids, vec![2]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let transactions = sample_transactions();
        let today = date!(2025 - 07 - 30);

        for mode in FilterMode::ALL_MODES {
            let once = filter_transactions(&transactions, mode, today);
            let twice = filter_transactions(&once, mode, today);

            assert_eq!(once, twice, "filtering twice with {mode:?} changed the result");
        }
    }

    #[test]
    fn unknown_mode_string_parses_to_all() {
        assert_eq!(FilterMode::parse("yearly"), FilterMode::All);
        assert_eq!(FilterMode::parse(""), FilterMode::All);
        assert_eq!(FilterMode::parse("Income"), FilterMode::All);
    }

    #[test]
    fn known_mode_strings_round_trip() {
        for mode in FilterMode::ALL_MODES {
            assert_eq!(FilterMode::parse(mode.query_value()), mode);
        }
    }
}
