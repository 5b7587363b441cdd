//! The transaction form shared by the create and edit pages.

use maud::{Markup, html};
use serde::Deserialize;
use time::Date;

use crate::{
    html::{BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_RADIO_INPUT_STYLE, FORM_TEXT_INPUT_STYLE},
    transaction::{Transaction, TransactionKind},
};

/// The form data for creating or editing a transaction.
#[derive(Debug, Deserialize)]
pub struct TransactionForm {
    /// Text detailing the transaction.
    pub description: String,
    /// The value of the transaction in dollars, always entered as a
    /// positive number.
    pub amount: f64,
    /// Whether the transaction is an income or an expense.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// The date when the transaction occurred.
    pub date: Date,
}

/// Whether the form submits by creating a transaction or editing one.
pub(crate) enum FormMethod {
    /// `hx-post`: create a new transaction.
    Post,
    /// `hx-put`: update an existing transaction.
    Put,
}

/// Renders the transaction form.
///
/// `transaction` pre-fills the fields on the edit page; `default_date` fills
/// the date field when there is no transaction to edit. Validation errors
/// returned by the endpoint are swapped into the `form-alert` container by
/// htmx.
pub(crate) fn transaction_form(
    action_url: &str,
    method: FormMethod,
    submit_label: &str,
    transaction: Option<&Transaction>,
    default_date: Date,
) -> Markup {
    let (post_url, put_url) = match method {
        FormMethod::Post => (Some(action_url), None),
        FormMethod::Put => (None, Some(action_url)),
    };

    let description = transaction.map(|t| t.description.as_str()).unwrap_or("");
    let amount = transaction
        .map(|t| t.amount.to_string())
        .unwrap_or_default();
    let kind = transaction
        .map(|t| t.kind)
        .unwrap_or(TransactionKind::Expense);
    let date = transaction.map(|t| t.date).unwrap_or(default_date);

    html!(
        form
            hx-post=[post_url]
            hx-put=[put_url]
            hx-target-error="#form-alert"
            class="space-y-3 w-full"
        {
            div id="form-alert" {}

            div
            {
                label for="description" class=(FORM_LABEL_STYLE) { "Description" }
                input
                    type="text"
                    name="description"
                    id="description"
                    placeholder="e.g. Groceries, Salary"
                    class=(FORM_TEXT_INPUT_STYLE)
                    required
                    value=(description);
            }

            div
            {
                label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }
                input
                    type="number"
                    name="amount"
                    id="amount"
                    placeholder="0.00"
                    step="0.01"
                    min="0.01"
                    class=(FORM_TEXT_INPUT_STYLE)
                    required
                    value=(amount);
            }

            div
            {
                span class=(FORM_LABEL_STYLE) { "Type" }
                div class="flex gap-4"
                {
                    label class="inline-flex items-center gap-2 text-sm"
                    {
                        input
                            type="radio"
                            name="type"
                            value="income"
                            class=(FORM_RADIO_INPUT_STYLE)
                            checked[kind == TransactionKind::Income];
                        "Income"
                    }
                    label class="inline-flex items-center gap-2 text-sm"
                    {
                        input
                            type="radio"
                            name="type"
                            value="expense"
                            class=(FORM_RADIO_INPUT_STYLE)
                            checked[kind == TransactionKind::Expense];
                        "Expense"
                    }
                }
            }

            div
            {
                label for="date" class=(FORM_LABEL_STYLE) { "Date" }
                input
                    type="date"
                    name="date"
                    id="date"
                    class=(FORM_TEXT_INPUT_STYLE)
                    required
                    value=(date);
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { (submit_label) }
        }
    )
}
