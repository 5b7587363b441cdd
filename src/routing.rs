//! Defines the routes and maps them to the page and API handlers.

use axum::{
    Router,
    http::StatusCode,
    response::Redirect,
    routing::{delete, get, post},
};

use crate::{
    AppState,
    csv::export_transactions_endpoint,
    endpoints,
    not_found::get_404_not_found,
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, edit_transaction_endpoint,
        get_edit_transaction_page, get_new_transaction_page, get_transactions_page,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::TRANSACTIONS_VIEW, get(get_transactions_page))
        .route(
            endpoints::NEW_TRANSACTION_VIEW,
            get(get_new_transaction_page),
        )
        .route(
            endpoints::EDIT_TRANSACTION_VIEW,
            get(get_edit_transaction_page).put(edit_transaction_endpoint),
        )
        .route(endpoints::TRANSACTIONS_API, post(create_transaction_endpoint))
        .route(
            endpoints::DELETE_TRANSACTION,
            delete(delete_transaction_endpoint),
        )
        .route(endpoints::EXPORT_CSV, get(export_transactions_endpoint))
        .route(endpoints::COFFEE, get(get_coffee))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root route redirects to the transactions page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::TRANSACTIONS_VIEW)
}

async fn get_coffee() -> StatusCode {
    StatusCode::IM_A_TEAPOT
}
