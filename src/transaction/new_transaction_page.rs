//! The page for creating a new transaction.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::html;

use crate::{
    AppState, Error, endpoints,
    html::{CARD_STYLE, PAGE_CONTAINER_STYLE, base},
    navigation::NavBar,
    timezone::local_date_today,
    transaction::form::{FormMethod, transaction_form},
};

/// The state needed to render the new transaction page.
#[derive(Debug, Clone)]
pub struct NewTransactionPageState {
    /// The local timezone as a canonical timezone name, used for the default
    /// date on the form.
    pub local_timezone: String,
}

impl FromRef<AppState> for NewTransactionPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Renders the page for creating a transaction.
///
/// The date field defaults to today in the configured timezone.
pub async fn get_new_transaction_page(
    State(state): State<NewTransactionPageState>,
) -> Result<Response, Error> {
    let today = local_date_today(&state.local_timezone)?;

    let content = html!(
        (NavBar::new(endpoints::NEW_TRANSACTION_VIEW).into_html())

        main class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-md"
            {
                section class=(CARD_STYLE)
                {
                    h2 class="text-lg font-semibold mb-3" { "Add Transaction" }
                    (transaction_form(
                        endpoints::TRANSACTIONS_API,
                        FormMethod::Post,
                        "Add Transaction",
                        None,
                        today,
                    ))
                }
            }
        }
    );

    Ok(base("New Transaction", &[], &content).into_response())
}
