//! The endpoint for deleting a transaction.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use maud::html;

use crate::{AppState, store::TransactionStore, transaction::TransactionId};

/// The state needed to delete a transaction.
#[derive(Debug, Clone)]
pub struct DeleteTransactionState {
    /// The transaction ledger.
    pub store: Arc<Mutex<TransactionStore>>,
}

impl FromRef<AppState> for DeleteTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// A route handler for deleting the transaction with the ID `transaction_id`.
///
/// The status code has to be 200 OK with an empty body, otherwise htmx will
/// not remove the table row that issued the request.
///
/// # Panics
///
/// Panics if the lock for the transaction store is already held by the same thread.
pub async fn delete_transaction_endpoint(
    State(state): State<DeleteTransactionState>,
    Path(transaction_id): Path<TransactionId>,
) -> Response {
    let mut store = state.store.lock().unwrap();

    match store.remove(transaction_id) {
        Ok(transaction) => {
            tracing::info!("Deleted transaction {}", transaction.id);
            html!().into_response()
        }
        Err(error) => error.into_alert_response(),
    }
}
