//! Expense creation endpoint and entry form.

use std::sync::{Arc, Mutex};

use axum::{
    Form,
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;
use maud::{Markup, html};

use crate::{
    AppState, Error, endpoints,
    html::{BUTTON_PRIMARY_STYLE, FORM_TEXT_INPUT_STYLE},
    pagination::{PaginationConfig, ResolvedPage, page_count},
};

use super::{
    Expense, ExpenseLedger,
    domain::{CategoryName, ExpenseFormData, parse_amount},
};

/// The state needed for creating an expense.
#[derive(Debug, Clone)]
pub struct CreateExpenseState {
    /// The expense ledger.
    pub ledger: Arc<Mutex<ExpenseLedger>>,
    /// The config that controls how to display pages of data.
    pub pagination_config: PaginationConfig,
}

impl FromRef<AppState> for CreateExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
            pagination_config: state.expense_pagination_config.clone(),
        }
    }
}

/// Handle expense entry form submission.
///
/// An accepted expense is appended to the end of the ledger and the client
/// is redirected to the last page of the expenses view, where the new record
/// is visible. A rejected submission re-renders the form with a validation
/// message and leaves the ledger untouched, so the user can correct the
/// input and resubmit.
pub async fn create_expense_endpoint(
    State(state): State<CreateExpenseState>,
    Form(form): Form<ExpenseFormData>,
) -> Response {
    let per_page = form
        .per_page
        .filter(|&per_page| per_page >= 1)
        .unwrap_or(state.pagination_config.default_page_size);

    let category = match CategoryName::new(&form.category) {
        Ok(category) => category,
        Err(error) => {
            return expense_form_view(
                &format!("Error: {error}"),
                &form.category,
                &form.amount,
                per_page,
            )
            .into_response();
        }
    };

    let amount = match parse_amount(&form.amount) {
        Ok(amount) => amount,
        Err(error) => {
            return expense_form_view(
                &format!("Error: {error}"),
                &form.category,
                &form.amount,
                per_page,
            )
            .into_response();
        }
    };

    let last_page = {
        let mut ledger = match state.ledger.lock() {
            Ok(ledger) => ledger,
            Err(error) => {
                tracing::error!("could not acquire ledger lock: {error}");
                return Error::StateLock.into_alert_response();
            }
        };

        ledger.append(Expense::new(category, amount));
        page_count(ledger.len(), per_page)
    };

    let redirect_url = ResolvedPage {
        page: last_page,
        per_page,
    }
    .to_url(endpoints::EXPENSES_VIEW);

    (HxRedirect(redirect_url), StatusCode::SEE_OTHER).into_response()
}

/// The expense entry form.
///
/// Rendered with empty values on the expenses page and re-rendered with the
/// submitted values and an error message when validation fails.
pub(super) fn expense_form_view(
    error_message: &str,
    category: &str,
    amount: &str,
    per_page: u64,
) -> Markup {
    let create_expense_endpoint = endpoints::POST_EXPENSE;

    html! {
        form
            hx-post=(create_expense_endpoint)
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            class="w-full bg-white dark:bg-gray-800 rounded shadow p-6"
        {
            div class="flex flex-col sm:flex-row gap-4"
            {
                input
                    id="category"
                    type="text"
                    name="category"
                    placeholder="Category"
                    value=(category)
                    required
                    autofocus
                    class=(FORM_TEXT_INPUT_STYLE);

                input
                    id="amount"
                    type="number"
                    name="amount"
                    placeholder="Amount ($)"
                    value=(amount)
                    step="any"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);

                input type="hidden" name="per_page" value=(per_page);

                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Expense" }
            }

            @if !error_message.is_empty() {
                p class="mt-2 text-red-600 dark:text-red-400"
                {
                    (error_message)
                }
            }
        }
    }
}
