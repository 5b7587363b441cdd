//! The page for editing an existing transaction.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use maud::html;

use crate::{
    AppState, Error, endpoints,
    endpoints::format_endpoint,
    html::{CARD_STYLE, PAGE_CONTAINER_STYLE, base},
    navigation::NavBar,
    store::TransactionStore,
    timezone::local_date_today,
    transaction::{
        TransactionId,
        form::{FormMethod, transaction_form},
    },
};

/// The state needed to render the edit transaction page.
#[derive(Debug, Clone)]
pub struct EditTransactionPageState {
    /// The transaction ledger.
    pub store: Arc<Mutex<TransactionStore>>,
    /// The local timezone as a canonical timezone name.
    pub local_timezone: String,
}

impl FromRef<AppState> for EditTransactionPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Renders the page for editing the transaction with the ID `transaction_id`.
///
/// Responds with a 404 page if the transaction is not in the ledger.
///
/// # Panics
///
/// Panics if the lock for the transaction store is already held by the same thread.
pub async fn get_edit_transaction_page(
    State(state): State<EditTransactionPageState>,
    Path(transaction_id): Path<TransactionId>,
) -> Result<Response, Error> {
    let today = local_date_today(&state.local_timezone)?;

    let transaction = {
        let store = state.store.lock().unwrap();
        store.get(transaction_id).cloned()
    };

    let Some(transaction) = transaction else {
        return Err(Error::NotFound);
    };

    let action_url = format_endpoint(endpoints::EDIT_TRANSACTION_VIEW, transaction.id);

    let content = html!(
        (NavBar::new(endpoints::TRANSACTIONS_VIEW).into_html())

        main class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-md"
            {
                section class=(CARD_STYLE)
                {
                    h2 class="text-lg font-semibold mb-3" { "Edit Transaction" }
                    (transaction_form(
                        &action_url,
                        FormMethod::Put,
                        "Save Changes",
                        Some(&transaction),
                        today,
                    ))
                }
            }
        }
    );

    Ok(base("Edit Transaction", &[], &content).into_response())
}

#[cfg(test)]
mod edit_page_tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use scraper::{Html, Selector};
    use time::macros::date;

    use crate::{
        store::TransactionStore,
        transaction::{
            TransactionKind,
            edit_page::{EditTransactionPageState, get_edit_transaction_page},
        },
    };

    fn test_state() -> (tempfile::TempDir, EditTransactionPageState, i64) {
        let directory = tempfile::tempdir().unwrap();
        let mut store = TransactionStore::open(directory.path().join("transactions.json"));
        let transaction = store
            .add(
                "Groceries",
                49.99,
                TransactionKind::Expense,
                date!(2025 - 07 - 29),
            )
            .unwrap();
        let transaction_id = transaction.id;

        let state = EditTransactionPageState {
            store: Arc::new(Mutex::new(store)),
            local_timezone: "Etc/UTC".to_owned(),
        };

        (directory, state, transaction_id)
    }

    #[tokio::test]
    async fn form_is_prefilled_with_the_transaction() {
        let (_directory, state, transaction_id) = test_state();

        let response = get_edit_transaction_page(State(state), Path(transaction_id))
            .await
            .unwrap();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let document = Html::parse_document(&String::from_utf8_lossy(&body));

        let form_selector = Selector::parse("form").unwrap();
        let form = document.select(&form_selector).next().unwrap();
        assert_eq!(
            form.value().attr("hx-put"),
            Some(format!("/transactions/{transaction_id}/edit").as_str())
        );

        let description_selector = Selector::parse("input[name=description]").unwrap();
        let description = document.select(&description_selector).next().unwrap();
        assert_eq!(description.value().attr("value"), Some("Groceries"));

        let amount_selector = Selector::parse("input[name=amount]").unwrap();
        let amount = document.select(&amount_selector).next().unwrap();
        assert_eq!(amount.value().attr("value"), Some("49.99"));

        let expense_selector = Selector::parse("input[value=expense]").unwrap();
        let expense_radio = document.select(&expense_selector).next().unwrap();
        assert!(expense_radio.value().attr("checked").is_some());

        let date_selector = Selector::parse("input[name=date]").unwrap();
        let date_input = document.select(&date_selector).next().unwrap();
        assert_eq!(date_input.value().attr("value"), Some("2025-07-29"));
    }

    #[tokio::test]
    async fn unknown_transaction_gets_404() {
        let (_directory, state, _) = test_state();

        let response = get_edit_transaction_page(State(state), Path(123))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
