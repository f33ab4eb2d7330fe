//! Fetching the user directory from the remote users endpoint.
//!
//! The directory is fetched at most once per session with a single GET that
//! is expected to return a JSON array of users. There is no retry and no
//! timeout beyond the transport's own; the caller decides what to do with a
//! failure.

use reqwest::Client;

use crate::{Error, directory::User};

/// The users endpoint queried when none is configured.
pub const DEFAULT_USERS_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// Fetches the user collection from a fixed endpoint.
#[derive(Debug, Clone)]
pub struct UserFetcher {
    client: Client,
    url: String,
}

impl UserFetcher {
    /// Create a fetcher for the users endpoint at `url`.
    pub fn new(url: &str) -> Self {
        Self {
            client: Client::new(),
            url: url.to_owned(),
        }
    }

    /// Fetch the full user collection.
    ///
    /// An empty array is a valid result and yields an empty collection.
    ///
    /// # Errors
    ///
    /// This function will return:
    /// - [Error::FetchTransport] if the request fails before a response is
    ///   obtained,
    /// - [Error::FetchStatus] if the response has a non-success status, with
    ///   the status code and reason text,
    /// - [Error::FetchParse] if the response body is not a valid JSON array
    ///   of users.
    pub async fn fetch_users(&self) -> Result<Vec<User>, Error> {
        tracing::debug!("GET {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::FetchStatus(format!(
                "{} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|error| Error::FetchParse(error.to_string()))
    }
}
