//! CSV export of the ledger.
//!
//! The export reproduces the format the original Cash Candy web client
//! produced, byte for byte: a `Description,Amount,Type,Date` header, the
//! description wrapped in double quotes (with no further escaping), fields
//! joined with commas and rows with `\n`.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::{AppState, store::TransactionStore, transaction::Transaction};

/// The download file name offered to the browser.
const EXPORT_FILE_NAME: &str = "expense_records.csv";

/// Render `transactions` as CSV text.
pub fn transactions_to_csv(transactions: &[Transaction]) -> String {
    let mut rows = Vec::with_capacity(transactions.len() + 1);
    rows.push("Description,Amount,Type,Date".to_owned());

    for transaction in transactions {
        rows.push(format!(
            "\"{}\",{},{},{}",
            transaction.description, transaction.amount, transaction.kind, transaction.date
        ));
    }

    rows.join("\n")
}

/// The state needed to export the ledger.
#[derive(Debug, Clone)]
pub struct ExportState {
    /// The transaction ledger.
    pub store: Arc<Mutex<TransactionStore>>,
}

impl FromRef<AppState> for ExportState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// A route handler that serves the whole ledger as a CSV download.
///
/// # Panics
///
/// Panics if the lock for the transaction store is already held by the same thread.
pub async fn export_transactions_endpoint(State(state): State<ExportState>) -> Response {
    let store = state.store.lock().unwrap();
    let csv_text = transactions_to_csv(store.transactions());
    let content_disposition = format!("attachment; filename=\"{EXPORT_FILE_NAME}\"");

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (header::CONTENT_DISPOSITION, content_disposition.as_str()),
        ],
        csv_text,
    )
        .into_response()
}

#[cfg(test)]
mod csv_tests {
    use std::sync::{Arc, Mutex};

    use axum::{extract::State, http::header};
    use time::macros::date;

    use crate::{
        csv::{EXPORT_FILE_NAME, ExportState, export_transactions_endpoint, transactions_to_csv},
        store::TransactionStore,
        transaction::{Transaction, TransactionKind},
    };

    fn sample_transactions() -> Vec<Transaction> {
        vec![
            Transaction {
                id: 1,
                description: "Groceries".to_owned(),
                amount: 50.0,
                kind: TransactionKind::Expense,
                date: date!(2025 - 07 - 29),
            },
            Transaction {
                id: 2,
                description: "Salary".to_owned(),
                amount: 2000.0,
                kind: TransactionKind::Income,
                date: date!(2025 - 07 - 30),
            },
        ]
    }

    #[test]
    fn matches_export_format_byte_for_byte() {
        let csv_text = transactions_to_csv(&sample_transactions());

        assert_eq!(
            csv_text,
            "Description,Amount,Type,Date\n\
            \"Groceries\",50,expense,2025-07-29\n\
            \"Salary\",2000,income,2025-07-30"
        );
    }

    #[test]
    fn fractional_amounts_keep_their_digits() {
        let mut transactions = sample_transactions();
        transactions[0].amount = 49.99;

        let csv_text = transactions_to_csv(&transactions[..1]);

        assert_eq!(
            csv_text,
            "Description,Amount,Type,Date\n\"Groceries\",49.99,expense,2025-07-29"
        );
    }

    #[test]
    fn empty_ledger_exports_header_only() {
        assert_eq!(transactions_to_csv(&[]), "Description,Amount,Type,Date");
    }

    #[tokio::test]
    async fn endpoint_offers_csv_download() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = TransactionStore::open(dir.path().join("transactions.json"));
        store
            .add("Groceries", 50.0, TransactionKind::Expense, date!(2025 - 07 - 29))
            .unwrap();
        let state = ExportState {
            store: Arc::new(Mutex::new(store)),
        };

        let response = export_transactions_endpoint(State(state)).await;

        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/csv; charset=utf-8"
        );
        let content_disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(content_disposition.contains(EXPORT_FILE_NAME));
    }
}
