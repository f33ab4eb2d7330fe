//! User deletion endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, Query, State},
    http::StatusCode,
    response::Response,
};
use maud::html;

use crate::{
    AppState, Error,
    alert::Alert,
    directory::UserId,
    html::render,
    pagination::{PageQuery, PaginationConfig, ResolvedPage, clamp_page},
};

use super::{UserDirectory, users_page::users_table_view};

/// The state needed to delete a user.
#[derive(Debug, Clone)]
pub struct DeleteUserState {
    /// The user directory. `None` until the first successful fetch.
    pub directory: Arc<Mutex<Option<UserDirectory>>>,
    /// The config that controls how to display pages of data.
    pub pagination_config: PaginationConfig,
}

impl FromRef<AppState> for DeleteUserState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            directory: state.directory.clone(),
            pagination_config: state.user_pagination_config.clone(),
        }
    }
}

/// A route handler for deleting a user from the in-memory directory.
///
/// Deletion matches by ID, never by position, and nothing is sent back to
/// the remote source. Responds with a replacement table fragment whose page
/// is clamped for the shrunken directory, plus a success alert swapped
/// out-of-band.
pub async fn delete_user_endpoint(
    State(state): State<DeleteUserState>,
    Path(user_id): Path<UserId>,
    Query(query): Query<PageQuery>,
) -> Response {
    let mut directory = match state.directory.lock() {
        Ok(directory) => directory,
        Err(error) => {
            tracing::error!("could not acquire directory lock: {error}");
            return Error::StateLock.into_alert_response();
        }
    };

    let Some(directory) = directory.as_mut() else {
        return render(
            StatusCode::NOT_FOUND,
            Alert::error(
                "Could not delete user",
                "The user directory has not been loaded yet.",
            )
            .into_html(),
        );
    };

    match directory.delete(user_id) {
        Err(_) => render(
            StatusCode::NOT_FOUND,
            Alert::error(
                "Could not delete user",
                "The user could not be found. \
                Try refreshing the page to see if it has already been deleted.",
            )
            .into_html(),
        ),
        Ok(()) => {
            let per_page = query
                .per_page
                .filter(|&per_page| per_page >= 1)
                .unwrap_or(state.pagination_config.default_page_size);
            let resolved = ResolvedPage {
                page: clamp_page(
                    query.page.unwrap_or(state.pagination_config.default_page),
                    directory.len(),
                    per_page,
                ),
                per_page,
            };

            let table =
                users_table_view(directory.users(), resolved, state.pagination_config.max_pages);
            let alert = Alert::success("User deleted successfully", "").into_html();

            // The status code has to be 200 OK or HTMX will not swap in the
            // replacement table.
            render(StatusCode::OK, html!( (table) (alert) ))
        }
    }
}
