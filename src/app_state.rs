//! Implements a struct that holds the state of the server.

use std::sync::{Arc, Mutex};

use crate::store::TransactionStore;

/// The state of the server.
///
/// The transaction store is the single owner of all mutable state; request
/// handlers borrow slices of this struct via `FromRef` and go through the
/// store for every read and mutation.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The transaction ledger, shared between request handlers.
    pub store: Arc<Mutex<TransactionStore>>,

    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// Used to resolve "today" for the date-range filters and the default
    /// date on the transaction form.
    pub local_timezone: String,
}

impl AppState {
    /// Create a new [AppState] wrapping `store`.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g.
    /// "Pacific/Auckland".
    pub fn new(store: TransactionStore, local_timezone: &str) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            local_timezone: local_timezone.to_owned(),
        }
    }
}
