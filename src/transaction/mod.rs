//! Everything to do with transactions: the model, the pure transforms over
//! the ledger (filtering, aggregation, chart series) and the pages and
//! endpoints that expose them.

mod aggregation;
pub(crate) mod chart;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod edit_page;
mod filter;
mod form;
mod models;
mod new_transaction_page;
mod transactions_page;

pub use aggregation::{Summary, aggregate};
pub use chart::chart_series;
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use edit_endpoint::edit_transaction_endpoint;
pub use edit_page::get_edit_transaction_page;
pub use filter::{FilterMode, filter_transactions};
pub use form::TransactionForm;
pub use models::{Transaction, TransactionId, TransactionKind};
pub use new_transaction_page::get_new_transaction_page;
pub use transactions_page::get_transactions_page;
