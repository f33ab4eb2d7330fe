//! Expense deletion endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;

use crate::{
    AppState, Error, alert::Alert, endpoints, html::render,
    pagination::{PageQuery, PaginationConfig, ResolvedPage, clamp_page},
};

use super::ExpenseLedger;

/// The state needed to delete an expense.
#[derive(Debug, Clone)]
pub struct DeleteExpenseState {
    /// The expense ledger.
    pub ledger: Arc<Mutex<ExpenseLedger>>,
    /// The config that controls how to display pages of data.
    pub pagination_config: PaginationConfig,
}

impl FromRef<AppState> for DeleteExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
            pagination_config: state.expense_pagination_config.clone(),
        }
    }
}

/// A route handler for deleting the expense at `position` in the ledger.
///
/// Expenses have no stable identifier, so the position is interpreted
/// against the ledger as it is right now; the client's table is re-rendered
/// by the redirect, which recomputes every row's position. The redirect
/// clamps the page in case the deletion emptied the last page.
pub async fn delete_expense_endpoint(
    State(state): State<DeleteExpenseState>,
    Path(position): Path<usize>,
    Query(query): Query<PageQuery>,
) -> Response {
    let mut ledger = match state.ledger.lock() {
        Ok(ledger) => ledger,
        Err(error) => {
            tracing::error!("could not acquire ledger lock: {error}");
            return Error::StateLock.into_alert_response();
        }
    };

    match ledger.delete(position) {
        Err(_) => render(
            StatusCode::NOT_FOUND,
            Alert::error(
                "Could not delete expense",
                "The expense could not be found. \
                Try refreshing the page to see if it has already been deleted.",
            )
            .into_html(),
        ),
        Ok(_) => {
            let per_page = query
                .per_page
                .filter(|&per_page| per_page >= 1)
                .unwrap_or(state.pagination_config.default_page_size);
            let page = clamp_page(
                query.page.unwrap_or(state.pagination_config.default_page),
                ledger.len(),
                per_page,
            );

            let redirect_url = ResolvedPage { page, per_page }.to_url(endpoints::EXPENSES_VIEW);

            (HxRedirect(redirect_url), StatusCode::SEE_OTHER).into_response()
        }
    }
}
