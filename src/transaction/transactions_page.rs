//! The main tracker page: summary cards, filters, the income vs expenses
//! doughnut and the transaction list.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    AppState, Error, endpoints,
    endpoints::format_endpoint,
    html::{
        BUTTON_DELETE_STYLE, CARD_STYLE, ECHARTS_SCRIPT_URL, HeadElement, PAGE_CONTAINER_STYLE,
        TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base, format_currency, link,
    },
    navigation::NavBar,
    store::TransactionStore,
    timezone::local_date_today,
    transaction::{
        FilterMode, Summary, Transaction, TransactionKind, aggregate,
        chart::{CHART_CONTAINER_ID, chart_script, income_expense_chart},
        chart_series, filter_transactions,
    },
};

/// The state needed to render the transactions page.
#[derive(Debug, Clone)]
pub struct TransactionsPageState {
    /// The transaction ledger.
    pub store: Arc<Mutex<TransactionStore>>,
    /// The local timezone as a canonical timezone name, used to resolve
    /// "today" for the date-range filters.
    pub local_timezone: String,
}

impl FromRef<AppState> for TransactionsPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The query string for the transactions page.
#[derive(Debug, Default, Deserialize)]
pub struct TransactionsPageQuery {
    /// The selected filter, e.g. "income" or "week". Unrecognized values
    /// fall back to showing everything.
    #[serde(default)]
    pub filter: String,
}

/// Renders the transactions page.
///
/// The page shows the balance summary, the filter buttons, the doughnut
/// chart and the transaction list, all computed over the transactions that
/// match the selected filter.
///
/// # Panics
///
/// Panics if the lock for the transaction store is already held by the same thread.
pub async fn get_transactions_page(
    State(state): State<TransactionsPageState>,
    Query(query): Query<TransactionsPageQuery>,
) -> Result<Response, Error> {
    let today = local_date_today(&state.local_timezone)?;
    let filter_mode = FilterMode::parse(&query.filter);

    let transactions = {
        let store = state.store.lock().unwrap();
        filter_transactions(store.transactions(), filter_mode, today)
    };

    let summary = aggregate(&transactions);
    let series = chart_series(&summary.income_by_category, &summary.expense_by_category);

    let mut head_elements = Vec::new();

    if !series.is_empty() {
        head_elements.push(HeadElement::ScriptLink(ECHARTS_SCRIPT_URL.to_owned()));
        head_elements.push(chart_script(&income_expense_chart(&series)));
    }

    let content = html!(
        (NavBar::new(endpoints::TRANSACTIONS_VIEW).into_html())

        main class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-screen-lg space-y-6"
            {
                (summary_cards(&summary))
                (filter_buttons(filter_mode))
                (chart_view(series.is_empty()))
                (transactions_table(&transactions))
            }
        }
    );

    Ok(base("Transactions", &head_elements, &content).into_response())
}

fn summary_cards(summary: &Summary) -> Markup {
    let balance_style = if summary.balance >= 0.0 {
        "text-green-600 dark:text-green-400"
    } else {
        "text-red-600 dark:text-red-400"
    };

    html!(
        section class="grid grid-cols-1 md:grid-cols-3 gap-3"
        {
            div class=(CARD_STYLE)
            {
                h3 class="text-xs font-medium text-gray-500 dark:text-gray-400" { "Balance" }
                p class={"text-xl font-bold " (balance_style)}
                {
                    @if summary.balance >= 0.0 { "+" }
                    (format_currency(summary.balance))
                }
            }
            div class=(CARD_STYLE)
            {
                h3 class="text-xs font-medium text-gray-500 dark:text-gray-400" { "Income" }
                p class="text-xl font-bold text-green-600 dark:text-green-400"
                {
                    "+" (format_currency(summary.total_income))
                }
            }
            div class=(CARD_STYLE)
            {
                h3 class="text-xs font-medium text-gray-500 dark:text-gray-400" { "Expenses" }
                p class="text-xl font-bold text-red-600 dark:text-red-400"
                {
                    "-" (format_currency(summary.total_expenses))
                }
            }
        }
    )
}

fn filter_buttons(active_mode: FilterMode) -> Markup {
    html!(
        section class=(CARD_STYLE)
        {
            h3 class="text-xs font-medium text-gray-500 dark:text-gray-400 mb-2"
            {
                "Filter Transactions"
            }
            div class="flex flex-wrap gap-1"
            {
                @for mode in FilterMode::ALL_MODES {
                    (filter_button(mode, mode == active_mode))
                }
            }
        }
    )
}

fn filter_button(mode: FilterMode, is_active: bool) -> Markup {
    let style = if is_active {
        match mode {
            FilterMode::Income => "px-2 py-1 rounded-md text-xs bg-green-600 text-white",
            FilterMode::Expense => "px-2 py-1 rounded-md text-xs bg-red-600 text-white",
            _ => "px-2 py-1 rounded-md text-xs bg-blue-600 text-white",
        }
    } else {
        "px-2 py-1 rounded-md text-xs bg-gray-200 text-gray-700 \
        dark:bg-gray-700 dark:text-gray-300"
    };

    let url = format!(
        "{}?filter={}",
        endpoints::TRANSACTIONS_VIEW,
        mode.query_value()
    );

    html!( a href=(url) class=(style) { (mode.label()) } )
}

fn chart_view(is_empty: bool) -> Markup {
    html!(
        section class=(CARD_STYLE)
        {
            h3 class="text-md font-semibold mb-3" { "Income vs Expenses" }

            @if is_empty {
                div class="flex items-center justify-center h-60"
                {
                    p class="text-gray-500 dark:text-gray-400" { "No transactions to display" }
                }
            } @else {
                div id=(CHART_CONTAINER_ID) class="h-60 min-h-[240px]" {}
            }
        }
    )
}

fn transactions_table(transactions: &[Transaction]) -> Markup {
    let item_count = if transactions.len() == 1 {
        "1 item".to_owned()
    } else {
        format!("{} items", transactions.len())
    };

    html!(
        section class=(CARD_STYLE)
        {
            div class="flex items-center justify-between mb-3"
            {
                h3 class="text-md font-semibold" { "Transactions" }
                span class="text-xs text-gray-500 dark:text-gray-400" { (item_count) }
            }

            @if transactions.is_empty() {
                p class="text-gray-500 dark:text-gray-400" { "No transactions found" }
            } @else {
                div class="relative overflow-x-auto"
                {
                    table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
                    {
                        thead class=(TABLE_HEADER_STYLE)
                        {
                            tr
                            {
                                th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Type" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                            }
                        }
                        tbody
                        {
                            @for transaction in transactions {
                                (transaction_row(transaction))
                            }
                        }
                    }
                }
            }
        }
    )
}

fn transaction_row(transaction: &Transaction) -> Markup {
    let (sign, amount_style) = match transaction.kind {
        TransactionKind::Income => ("+", "text-green-600 dark:text-green-400"),
        TransactionKind::Expense => ("-", "text-red-600 dark:text-red-400"),
    };

    let edit_url = format_endpoint(endpoints::EDIT_TRANSACTION_VIEW, transaction.id);
    let delete_url = format_endpoint(endpoints::DELETE_TRANSACTION, transaction.id);

    html!(
        tr class=(TABLE_ROW_STYLE)
        {
            td class=(TABLE_CELL_STYLE) { (transaction.date) }
            td class=(TABLE_CELL_STYLE) { (transaction.description) }
            td class=(TABLE_CELL_STYLE) { (transaction.kind) }
            td class={(TABLE_CELL_STYLE) " font-semibold " (amount_style)}
            {
                (sign) (format_currency(transaction.amount))
            }
            td class=(TABLE_CELL_STYLE)
            {
                div class="flex gap-4"
                {
                    (link(&edit_url, "Edit"))
                    button
                        class=(BUTTON_DELETE_STYLE)
                        hx-delete=(delete_url)
                        hx-target="closest tr"
                        hx-swap="outerHTML"
                        hx-confirm="Delete this transaction?"
                    {
                        "Delete"
                    }
                }
            }
        }
    )
}

#[cfg(test)]
mod transactions_page_tests {
    use std::sync::{Arc, Mutex};

    use axum::extract::{Query, State};
    use scraper::{Html, Selector};
    use time::macros::date;

    use crate::{
        store::TransactionStore,
        transaction::{
            TransactionKind,
            transactions_page::{
                TransactionsPageQuery, TransactionsPageState, get_transactions_page,
            },
        },
    };

    async fn render_page(
        store: TransactionStore,
        filter: &str,
    ) -> (Html, axum::http::StatusCode) {
        let state = TransactionsPageState {
            store: Arc::new(Mutex::new(store)),
            local_timezone: "Etc/UTC".to_owned(),
        };
        let query = TransactionsPageQuery {
            filter: filter.to_owned(),
        };

        let response = get_transactions_page(State(state), Query(query))
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (
            Html::parse_document(&String::from_utf8_lossy(&body)),
            status,
        )
    }

    fn store_with_sample_data() -> (tempfile::TempDir, TransactionStore) {
        let directory = tempfile::tempdir().unwrap();
        let mut store = TransactionStore::open(directory.path().join("transactions.json"));
        store
            .add(
                "Groceries",
                50.0,
                TransactionKind::Expense,
                date!(2025 - 07 - 29),
            )
            .unwrap();
        store
            .add(
                "Salary",
                2000.0,
                TransactionKind::Income,
                date!(2025 - 07 - 30),
            )
            .unwrap();

        (directory, store)
    }

    #[tokio::test]
    async fn empty_ledger_shows_placeholders() {
        let directory = tempfile::tempdir().unwrap();
        let store = TransactionStore::open(directory.path().join("transactions.json"));

        let (document, status) = render_page(store, "").await;

        assert_eq!(status, axum::http::StatusCode::OK);
        let text = document.root_element().text().collect::<String>();
        assert!(text.contains("No transactions to display"));
        assert!(text.contains("No transactions found"));
        assert!(text.contains("0 items"));
    }

    #[tokio::test]
    async fn lists_transactions_and_summary() {
        let (_directory, store) = store_with_sample_data();

        let (document, status) = render_page(store, "").await;

        assert_eq!(status, axum::http::StatusCode::OK);
        let text = document.root_element().text().collect::<String>();
        assert!(text.contains("Groceries"));
        assert!(text.contains("Salary"));
        assert!(text.contains("$1,950.00"));
        assert!(text.contains("$2,000.00"));
        assert!(text.contains("$50.00"));
        assert!(text.contains("2 items"));
    }

    #[tokio::test]
    async fn renders_chart_container_when_there_is_data() {
        let (_directory, store) = store_with_sample_data();

        let (document, _) = render_page(store, "").await;

        let selector = Selector::parse("#income-expense-chart").unwrap();
        assert_eq!(document.select(&selector).count(), 1);
    }

    #[tokio::test]
    async fn income_filter_hides_expenses() {
        let (_directory, store) = store_with_sample_data();

        let (document, _) = render_page(store, "income").await;

        let selector = Selector::parse("tbody tr").unwrap();
        let rows: Vec<String> = document
            .select(&selector)
            .map(|row| row.text().collect())
            .collect();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].contains("Salary"));
    }

    #[tokio::test]
    async fn unknown_filter_shows_everything() {
        let (_directory, store) = store_with_sample_data();

        let (document, _) = render_page(store, "yesteryear").await;

        let selector = Selector::parse("tbody tr").unwrap();
        assert_eq!(document.select(&selector).count(), 2);
    }

    #[tokio::test]
    async fn rows_have_edit_links_and_delete_buttons() {
        let (_directory, store) = store_with_sample_data();

        let (document, _) = render_page(store, "").await;

        let edit_selector = Selector::parse("tbody a").unwrap();
        let edit_links: Vec<&str> = document
            .select(&edit_selector)
            .filter_map(|a| a.value().attr("href"))
            .collect();
        assert_eq!(edit_links.len(), 2);
        assert!(edit_links.iter().all(|href| href.ends_with("/edit")));

        let delete_selector = Selector::parse("tbody button[hx-delete]").unwrap();
        assert_eq!(document.select(&delete_selector).count(), 2);
    }
}
