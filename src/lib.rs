//! Cash Candy is a small web app for tracking personal income and expenses.
//!
//! Transactions live in a single JSON file on disk and every page is
//! rendered server-side as HTML, so the whole thing runs locally with no
//! external services.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

use crate::{
    alert::AlertTemplate, not_found::get_404_not_found_response, shared_templates::render,
    transaction::TransactionId,
};

mod alert;
mod app_state;
mod csv;
mod endpoints;
mod html;
mod logging;
mod navigation;
mod not_found;
mod routing;
mod shared_templates;
mod store;
mod timezone;
mod transaction;

pub use app_state::AppState;
pub use logging::logging_middleware;
pub use routing::build_router;
pub use store::TransactionStore;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An empty or whitespace-only string was used as a transaction
    /// description.
    #[error("transaction description cannot be empty")]
    EmptyDescription,

    /// A transaction amount that is not a positive, finite number.
    ///
    /// The sign of a transaction is carried by its type, so amounts are
    /// always entered as positive numbers.
    #[error("{0} is not a valid transaction amount")]
    InvalidAmount(f64),

    /// Tried to update a transaction that does not exist
    #[error("tried to update a transaction that is not in the ledger")]
    UpdateMissingTransaction,

    /// Tried to delete a transaction that does not exist
    #[error("tried to delete transaction {0}, which is not in the ledger")]
    DeleteMissingTransaction(TransactionId),

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    #[error("the requested resource could not be found")]
    NotFound,

    /// The ledger file could not be written to disk.
    ///
    /// The in-memory state is still consistent when this occurs; the write
    /// is retried on the next mutation.
    #[error("could not save the ledger file: {0}")]
    StoreSave(String),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezone(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => get_404_not_found_response(),
            Error::InvalidTimezone(timezone) => render_internal_server_error(
                "Invalid Timezone Settings",
                &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to a valid, canonical timezone string"
                ),
            ),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                render_internal_server_error(
                    "Sorry, something went wrong.",
                    "Try again later or check the server logs",
                )
            }
        }
    }
}

impl Error {
    fn into_alert_response(self) -> Response {
        match self {
            Error::EmptyDescription => render(
                StatusCode::UNPROCESSABLE_ENTITY,
                AlertTemplate::error(
                    "Invalid transaction",
                    "The description cannot be empty. Enter a short label such as \
                    \"Groceries\" or \"Salary\".",
                ),
            ),
            Error::InvalidAmount(amount) => render(
                StatusCode::UNPROCESSABLE_ENTITY,
                AlertTemplate::error(
                    "Invalid transaction",
                    &format!("{amount} is not a valid amount. Enter a positive number."),
                ),
            ),
            Error::UpdateMissingTransaction => render(
                StatusCode::NOT_FOUND,
                AlertTemplate::error(
                    "Could not update transaction",
                    "The transaction could not be found.",
                ),
            ),
            Error::DeleteMissingTransaction(_) => render(
                StatusCode::NOT_FOUND,
                AlertTemplate::error(
                    "Could not delete transaction",
                    "The transaction could not be found. \
                    Try refreshing the page to see if the transaction has already been deleted.",
                ),
            ),
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                render(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    AlertTemplate::error(
                        "Something went wrong",
                        "An unexpected error occurred, check the server logs for more details.",
                    ),
                )
            }
        }
    }
}

fn render_internal_server_error(description: &str, fix: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        html::error_view("Internal Server Error", "500", description, fix),
    )
        .into_response()
}
