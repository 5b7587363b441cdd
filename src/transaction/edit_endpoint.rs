//! The endpoint for updating a transaction from the edit form.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;

use crate::{
    AppState, endpoints,
    store::TransactionStore,
    transaction::{Transaction, TransactionForm, TransactionId},
};

/// The state needed to update a transaction.
#[derive(Debug, Clone)]
pub struct EditTransactionState {
    /// The transaction ledger.
    pub store: Arc<Mutex<TransactionStore>>,
}

impl FromRef<AppState> for EditTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// A route handler for updating the transaction with the ID `transaction_id`.
///
/// The submitted form fields replace the stored transaction wholesale. On
/// success, redirects the client back to the transactions page; validation
/// errors and unknown IDs are returned as an alert fragment.
///
/// # Panics
///
/// Panics if the lock for the transaction store is already held by the same thread.
pub async fn edit_transaction_endpoint(
    State(state): State<EditTransactionState>,
    Path(transaction_id): Path<TransactionId>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let transaction = Transaction {
        id: transaction_id,
        description: form.description,
        amount: form.amount,
        kind: form.kind,
        date: form.date,
    };

    let mut store = state.store.lock().unwrap();

    match store.update(transaction) {
        Ok(()) => {
            tracing::info!("Updated transaction {transaction_id}");

            (
                HxRedirect(endpoints::TRANSACTIONS_VIEW.to_owned()),
                StatusCode::SEE_OTHER,
            )
                .into_response()
        }
        Err(error) => error.into_alert_response(),
    }
}
