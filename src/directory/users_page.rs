//! Defines the route handler for the user directory page.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error, endpoints,
    html::{
        BUTTON_DELETE_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE,
        TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base, loading_spinner, pagination_nav,
    },
    navigation::NavBar,
    pagination::{PageQuery, PaginationConfig, ResolvedPage, page_slice, resolve_page_query},
};

use super::{User, UserDirectory, UserFetcher};

/// The fixed user-facing message shown when the directory cannot be fetched.
pub(super) const FETCH_FAILED_MESSAGE: &str = "Failed to fetch users";

/// The state needed for the user directory page.
#[derive(Debug, Clone)]
pub struct UsersViewState {
    /// The user directory. `None` until the first successful fetch.
    pub directory: Arc<Mutex<Option<UserDirectory>>>,
    /// The fetcher for the remote users endpoint.
    pub fetcher: UserFetcher,
    /// The config that controls how to display pages of data.
    pub pagination_config: PaginationConfig,
}

impl FromRef<AppState> for UsersViewState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            directory: state.directory.clone(),
            fetcher: state.user_fetcher.clone(),
            pagination_config: state.user_pagination_config.clone(),
        }
    }
}

/// Render the user directory page.
///
/// The directory is fetched from the remote endpoint on the first visit of
/// the session. A fetch failure renders the failed view for this request
/// without caching anything, so reloading the page retries.
pub async fn get_users_page(
    State(state): State<UsersViewState>,
    Query(query): Query<PageQuery>,
) -> Result<Response, Error> {
    let users = match load_directory(&state).await {
        Ok(users) => users,
        Err(error @ Error::StateLock) => return Err(error),
        Err(error) => {
            tracing::error!("{FETCH_FAILED_MESSAGE}: {error}");
            return Ok(fetch_failed_view(&error).into_response());
        }
    };

    let (resolved, needs_redirect) =
        resolve_page_query(query, users.len(), &state.pagination_config);
    if needs_redirect {
        return Ok(Redirect::to(&resolved.to_url(endpoints::USERS_VIEW)).into_response());
    }

    Ok(users_view(&users, resolved, state.pagination_config.max_pages).into_response())
}

/// Return a snapshot of the directory, fetching it on the first visit.
async fn load_directory(state: &UsersViewState) -> Result<Vec<User>, Error> {
    {
        let directory = state
            .directory
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire directory lock: {error}"))
            .map_err(|_| Error::StateLock)?;

        if let Some(directory) = directory.as_ref() {
            return Ok(directory.users().to_vec());
        }
    }

    // The lock is not held across the fetch so other requests stay
    // responsive while it is outstanding.
    let users = state.fetcher.fetch_users().await?;

    let mut directory = state
        .directory
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire directory lock: {error}"))
        .map_err(|_| Error::StateLock)?;
    let directory = directory.get_or_insert_with(|| UserDirectory::from_users(users));

    Ok(directory.users().to_vec())
}

fn users_view(users: &[User], resolved: ResolvedPage, max_pages: u64) -> Markup {
    let nav_bar = NavBar::new(endpoints::USERS_VIEW).into_html();

    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-4 w-full lg:max-w-5xl lg:mx-auto"
            {
                h1 class="text-xl font-bold text-center" { "User Directory" }

                (users_table_view(users, resolved, max_pages))
            }
        }
    );

    base("Users", &content)
}

/// The paginated users table.
///
/// Also returned by the delete endpoint as a fragment that replaces the
/// table in place, so it carries its own element ID.
pub(super) fn users_table_view(users: &[User], resolved: ResolvedPage, max_pages: u64) -> Markup {
    let visible = page_slice(users.len(), resolved.per_page, resolved.page);

    html!(
        section
            id="users-table"
            class="w-full bg-white dark:bg-gray-800 rounded shadow overflow-x-auto"
        {
            table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Name" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Email" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Phone" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Website" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Company" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Address" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                    }
                }

                tbody
                {
                    @for position in visible {
                        (user_table_row(&users[position], resolved))
                    }

                    @if users.is_empty() {
                        tr
                        {
                            td
                                colspan="7"
                                class="px-6 py-4 text-center
                                    text-gray-500 dark:text-gray-400"
                            {
                                "No users to display."
                            }
                        }
                    }
                }
            }

            (pagination_nav(
                endpoints::USERS_VIEW,
                resolved,
                users.len(),
                max_pages,
                "users",
            ))
        }
    )
}

fn user_table_row(user: &User, resolved: ResolvedPage) -> Markup {
    let detail_url = endpoints::format_endpoint(endpoints::USER_DETAIL_VIEW, user.id);
    // The delete URL carries the current paging params so the replacement
    // table fragment can clamp the page for the shrunken directory.
    let delete_url = format!(
        "{}?page={}&per_page={}",
        endpoints::format_endpoint(endpoints::DELETE_USER, user.id),
        resolved.page,
        resolved.per_page,
    );

    let company = user.company.as_ref().map(|company| company.name.as_str());
    let address = user
        .address
        .as_ref()
        .map(|address| format!("{}, {}", address.street, address.city));

    html!(
        tr class=(TABLE_ROW_STYLE)
        {
            td class=(TABLE_CELL_STYLE) { (user.name) }
            td class=(TABLE_CELL_STYLE) { (user.email) }
            td class=(TABLE_CELL_STYLE) { (user.phone) }
            td class=(TABLE_CELL_STYLE) { (user.website) }
            td class=(TABLE_CELL_STYLE) { (company.unwrap_or("\u{2014}")) }
            td class=(TABLE_CELL_STYLE) { (address.as_deref().unwrap_or("\u{2014}")) }

            td class=(TABLE_CELL_STYLE)
            {
                div class="flex gap-4 items-center"
                {
                    button
                        type="button"
                        class=(LINK_STYLE)
                        hx-get=(detail_url)
                        hx-target="#modal-container"
                        hx-target-error="#alert-container"
                    {
                        "View"
                        (loading_spinner())
                    }

                    button
                        type="button"
                        class=(BUTTON_DELETE_STYLE)
                        hx-delete=(delete_url)
                        hx-target="#users-table"
                        hx-swap="outerHTML"
                        hx-target-error="#alert-container"
                    {
                        "Delete"
                    }
                }
            }
        }
    )
}

fn fetch_failed_view(error: &Error) -> Markup {
    let nav_bar = NavBar::new(endpoints::USERS_VIEW).into_html();

    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="mx-auto max-w-screen-sm py-16 text-center space-y-4"
            {
                h1 class="text-2xl font-bold text-red-600 dark:text-red-400"
                {
                    (FETCH_FAILED_MESSAGE)
                }

                p class="text-gray-500 dark:text-gray-400" { (error) }

                p { "Reload the page to try again." }
            }
        }
    );

    base("Users", &content)
}
