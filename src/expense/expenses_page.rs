//! Defines the route handler for the expense calculator page.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error, endpoints,
    html::{
        BUTTON_DELETE_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE,
        TABLE_ROW_STYLE, base, format_currency, pagination_nav,
    },
    navigation::NavBar,
    pagination::{PageQuery, PaginationConfig, ResolvedPage, page_slice, resolve_page_query},
};

use super::{
    Expense, ExpenseLedger,
    create_endpoint::expense_form_view,
    summary::{average_daily, top_expenses, total},
};

/// The state needed for the expense calculator page.
#[derive(Debug, Clone)]
pub struct ExpensesViewState {
    /// The expense ledger.
    pub ledger: Arc<Mutex<ExpenseLedger>>,
    /// The config that controls how to display pages of data.
    pub pagination_config: PaginationConfig,
}

impl FromRef<AppState> for ExpensesViewState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
            pagination_config: state.expense_pagination_config.clone(),
        }
    }
}

/// Render the expense calculator page: entry form, paginated table and
/// summary statistics.
///
/// Non-canonical paging queries (missing params or an out-of-range page)
/// redirect to the canonical URL so the address bar always reflects what is
/// displayed.
pub async fn get_expenses_page(
    State(state): State<ExpensesViewState>,
    Query(query): Query<PageQuery>,
) -> Result<Response, Error> {
    let expenses = {
        let ledger = state
            .ledger
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire ledger lock: {error}"))
            .map_err(|_| Error::StateLock)?;
        ledger.expenses().to_vec()
    };

    let (resolved, needs_redirect) =
        resolve_page_query(query, expenses.len(), &state.pagination_config);
    if needs_redirect {
        return Ok(Redirect::to(&resolved.to_url(endpoints::EXPENSES_VIEW)).into_response());
    }

    Ok(
        expenses_view(&expenses, resolved, state.pagination_config.max_pages)
            .into_response(),
    )
}

fn expenses_view(expenses: &[Expense], resolved: ResolvedPage, max_pages: u64) -> Markup {
    let nav_bar = NavBar::new(endpoints::EXPENSES_VIEW).into_html();
    let visible = page_slice(expenses.len(), resolved.per_page, resolved.page);

    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-4 w-full lg:max-w-5xl lg:mx-auto"
            {
                h1 class="text-xl font-bold text-center" { "Expense Calculator" }

                (expense_form_view("", "", "", resolved.per_page))

                div class="flex flex-col lg:flex-row gap-8 items-start"
                {
                    section class="flex-1 w-full bg-white dark:bg-gray-800 rounded shadow overflow-x-auto"
                    {
                        table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
                        {
                            thead class=(TABLE_HEADER_STYLE)
                            {
                                tr
                                {
                                    th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                                    th scope="col" class=(TABLE_CELL_STYLE) { "Amount ($)" }
                                    th scope="col" class=(TABLE_CELL_STYLE) { "Action" }
                                }
                            }

                            tbody
                            {
                                @for position in visible {
                                    (expense_table_row(position, &expenses[position], resolved))
                                }

                                @if expenses.is_empty() {
                                    tr
                                    {
                                        td
                                            colspan="3"
                                            class="px-6 py-4 text-center
                                                text-gray-500 dark:text-gray-400"
                                        {
                                            "No expenses yet. Add your first expense above."
                                        }
                                    }
                                }
                            }
                        }

                        (pagination_nav(
                            endpoints::EXPENSES_VIEW,
                            resolved,
                            expenses.len(),
                            max_pages,
                            "expenses",
                        ))
                    }

                    (summary_view(expenses))
                }
            }
        }
    );

    base("Expenses", &content)
}

fn expense_table_row(position: usize, expense: &Expense, resolved: ResolvedPage) -> Markup {
    // The delete URL carries the current paging params so the redirect after
    // deletion can clamp the page for the shrunken ledger.
    let delete_url = format!(
        "{}?page={}&per_page={}",
        endpoints::format_endpoint(endpoints::DELETE_EXPENSE, position),
        resolved.page,
        resolved.per_page,
    );

    html!(
        tr class=(TABLE_ROW_STYLE)
        {
            td class=(TABLE_CELL_STYLE) { (expense.category) }

            td class=(TABLE_CELL_STYLE) { (format_currency(expense.amount)) }

            td class=(TABLE_CELL_STYLE)
            {
                button
                    type="button"
                    class=(BUTTON_DELETE_STYLE)
                    hx-delete=(delete_url)
                    hx-target-error="#alert-container"
                {
                    "Delete"
                }
            }
        }
    )
}

fn summary_view(expenses: &[Expense]) -> Markup {
    let top = top_expenses(expenses);

    html!(
        aside class="w-full lg:w-80 bg-white dark:bg-gray-800 rounded shadow p-6 space-y-6"
        {
            div
            {
                h3 class="font-semibold text-gray-900 dark:text-white" { "Total Expenses:" }
                p class="text-lg font-semibold text-blue-600 dark:text-blue-500"
                {
                    (format_currency(total(expenses)))
                }
            }

            div
            {
                h3 class="font-semibold text-gray-900 dark:text-white" { "Average Daily Expense:" }
                p class="text-lg font-semibold text-blue-600 dark:text-blue-500"
                {
                    (format_currency(average_daily(expenses)))
                }
            }

            div
            {
                h3 class="font-semibold text-gray-900 dark:text-white" { "Top 3 Expenses:" }

                @if top.is_empty() {
                    p class="text-sm text-gray-500 dark:text-gray-400" { "No expenses yet." }
                } @else {
                    ul class="divide-y divide-gray-200 dark:divide-gray-700"
                    {
                        @for expense in &top {
                            li class="py-2"
                            {
                                (expense.category) " (" (format_currency(expense.amount)) ")"
                            }
                        }
                    }
                }
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::extract::{Query, State};
    use scraper::Selector;

    use crate::{
        endpoints,
        expense::{CategoryName, Expense, ExpenseLedger},
        pagination::{PageQuery, PaginationConfig},
        test_utils::{
            assert_form_input, assert_form_submit_button, assert_hx_endpoint, assert_valid_html,
            get_header, must_get_form, parse_html_document,
        },
    };

    use super::{ExpensesViewState, get_expenses_page};

    fn create_test_state(entries: &[(&str, f64)]) -> ExpensesViewState {
        let mut ledger = ExpenseLedger::new();
        for (category, amount) in entries {
            ledger.append(Expense::new(CategoryName::new_unchecked(category), *amount));
        }

        ExpensesViewState {
            ledger: Arc::new(Mutex::new(ledger)),
            pagination_config: PaginationConfig {
                default_page_size: 5,
                ..PaginationConfig::default()
            },
        }
    }

    fn canonical_query(page: u64, per_page: u64) -> Query<PageQuery> {
        Query(PageQuery {
            page: Some(page),
            per_page: Some(per_page),
        })
    }

    #[tokio::test]
    async fn renders_form_and_empty_table() {
        let state = create_test_state(&[]);

        let response = get_expenses_page(State(state), canonical_query(1, 5))
            .await
            .unwrap();

        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        let form = must_get_form(&html);
        assert_hx_endpoint(&form, endpoints::POST_EXPENSE, "hx-post");
        assert_form_input(&form, "category", "text");
        assert_form_input(&form, "amount", "number");
        assert_form_submit_button(&form);

        let rows: Vec<_> = html
            .select(&Selector::parse("tbody tr").unwrap())
            .collect();
        assert_eq!(rows.len(), 1);
        let text = rows[0].text().collect::<String>();
        assert!(text.contains("No expenses yet"));
    }

    #[tokio::test]
    async fn missing_query_params_redirect_to_canonical_url() {
        let state = create_test_state(&[("Food", 50.0)]);

        let response = get_expenses_page(
            State(state),
            Query(PageQuery {
                page: None,
                per_page: None,
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), axum::http::StatusCode::SEE_OTHER);
        assert_eq!(get_header(&response, "location"), "/expenses?page=1&per_page=5");
    }

    #[tokio::test]
    async fn out_of_range_page_redirects_to_last_page() {
        let entries: Vec<(String, f64)> = (0..7).map(|i| (format!("c{i}"), 1.0)).collect();
        let entries: Vec<(&str, f64)> = entries
            .iter()
            .map(|(category, amount)| (category.as_str(), *amount))
            .collect();
        let state = create_test_state(&entries);

        let response = get_expenses_page(State(state), canonical_query(9, 5))
            .await
            .unwrap();

        assert_eq!(response.status(), axum::http::StatusCode::SEE_OTHER);
        assert_eq!(get_header(&response, "location"), "/expenses?page=2&per_page=5");
    }

    #[tokio::test]
    async fn second_page_shows_remaining_rows() {
        let entries: Vec<(String, f64)> = (0..7).map(|i| (format!("c{i}"), 1.0)).collect();
        let entries: Vec<(&str, f64)> = entries
            .iter()
            .map(|(category, amount)| (category.as_str(), *amount))
            .collect();
        let state = create_test_state(&entries);

        let response = get_expenses_page(State(state), canonical_query(2, 5))
            .await
            .unwrap();

        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        let rows: Vec<String> = html
            .select(&Selector::parse("tbody tr td:first-child").unwrap())
            .map(|cell| cell.text().collect())
            .collect();
        assert_eq!(rows, ["c5", "c6"]);
    }

    #[tokio::test]
    async fn delete_urls_carry_absolute_positions() {
        let entries: Vec<(String, f64)> = (0..7).map(|i| (format!("c{i}"), 1.0)).collect();
        let entries: Vec<(&str, f64)> = entries
            .iter()
            .map(|(category, amount)| (category.as_str(), *amount))
            .collect();
        let state = create_test_state(&entries);

        let response = get_expenses_page(State(state), canonical_query(2, 5))
            .await
            .unwrap();

        let html = parse_html_document(response).await;
        let delete_urls: Vec<String> = html
            .select(&Selector::parse("tbody button[hx-delete]").unwrap())
            .map(|button| button.value().attr("hx-delete").unwrap().to_owned())
            .collect();

        let want_prefix =
            endpoints::format_endpoint(endpoints::DELETE_EXPENSE, 5) + "?page=2&per_page=5";
        assert_eq!(delete_urls[0], want_prefix);
    }

    #[tokio::test]
    async fn summary_shows_totals_and_top_expenses() {
        let state = create_test_state(&[("Food", 50.0), ("Rent", 1000.0), ("Transit", 20.0)]);

        let response = get_expenses_page(State(state), canonical_query(1, 5))
            .await
            .unwrap();

        let html = parse_html_document(response).await;
        let aside = html
            .select(&Selector::parse("aside").unwrap())
            .next()
            .expect("No summary panel found");
        let text = aside.text().collect::<String>();

        assert!(text.contains("$1,070.00"), "got {text}");
        let top_items: Vec<String> = aside
            .select(&Selector::parse("li").unwrap())
            .map(|item| item.text().collect::<String>())
            .collect();
        assert_eq!(top_items.len(), 3);
        assert!(top_items[0].contains("Rent"));
        assert!(top_items[1].contains("Food"));
        assert!(top_items[2].contains("Transit"));
    }
}
