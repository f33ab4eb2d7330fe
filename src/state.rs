//! Implements a struct that holds the shared state of the server.

use std::sync::{Arc, Mutex};

use crate::{
    directory::{UserDirectory, UserFetcher},
    expense::ExpenseLedger,
    pagination::PaginationConfig,
};

/// The state of the server.
///
/// All collection state is session-scoped: it lives in memory for the
/// lifetime of the process and is discarded on shutdown. Mutations happen
/// synchronously under the mutexes in response to discrete requests, so no
/// two mutations can interleave.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The config that controls how the expense table displays pages of data.
    pub expense_pagination_config: PaginationConfig,
    /// The config that controls how the user table displays pages of data.
    pub user_pagination_config: PaginationConfig,
    /// The expense ledger.
    pub ledger: Arc<Mutex<ExpenseLedger>>,
    /// The user directory. `None` until the first successful fetch of the
    /// session.
    pub directory: Arc<Mutex<Option<UserDirectory>>>,
    /// The fetcher for the remote users endpoint.
    pub user_fetcher: UserFetcher,
}

/// The default rows per page for the expense table.
const EXPENSE_DEFAULT_PAGE_SIZE: u64 = 5;

impl AppState {
    /// Create a new [AppState] with empty collections.
    ///
    /// `users_url` is the endpoint the user directory is fetched from on the
    /// first visit to the users page.
    pub fn new(users_url: &str) -> Self {
        Self {
            expense_pagination_config: PaginationConfig {
                default_page_size: EXPENSE_DEFAULT_PAGE_SIZE,
                ..PaginationConfig::default()
            },
            user_pagination_config: PaginationConfig::default(),
            ledger: Arc::new(Mutex::new(ExpenseLedger::new())),
            directory: Arc::new(Mutex::new(None)),
            user_fetcher: UserFetcher::new(users_url),
        }
    }
}
