//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    alert::Alert, internal_server_error::InternalServerError, not_found::NotFoundError,
};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An empty or whitespace-only string was used to create an expense category.
    #[error("Category cannot be empty")]
    EmptyCategory,

    /// A string that does not parse as a positive, finite number was used to
    /// create an expense amount.
    ///
    /// Carries the rejected input so the user can see what to correct.
    #[error("\"{0}\" is not a positive amount")]
    InvalidAmount(String),

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID or position) are correct and that the record still exists.
    #[error("the requested resource could not be found")]
    NotFound,

    /// Could not acquire the lock on the shared application state.
    #[error("could not acquire the application state lock")]
    StateLock,

    /// The request to the users endpoint failed before a response was obtained.
    #[error("could not reach the users endpoint: {0}")]
    FetchTransport(String),

    /// The users endpoint responded with a non-success HTTP status.
    ///
    /// Callers should pass in the status code followed by the canonical
    /// reason text, e.g. "404 Not Found".
    #[error("the users endpoint returned HTTP {0}")]
    FetchStatus(String),

    /// The users endpoint responded with a body that is not valid JSON.
    #[error("could not parse the users response: {0}")]
    FetchParse(String),
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        Error::FetchTransport(value.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => NotFoundError.into_response(),
            Error::StateLock => InternalServerError::default().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::EmptyCategory => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Invalid category".to_owned(),
                    details: "Enter a category name that is not empty.".to_owned(),
                },
            ),
            Error::InvalidAmount(amount) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Invalid amount".to_owned(),
                    details: format!(
                        "\"{amount}\" is not a positive amount. \
                        Enter a number greater than zero."
                    ),
                },
            ),
            Error::NotFound => (
                StatusCode::NOT_FOUND,
                Alert::Error {
                    message: "Not found".to_owned(),
                    details: "The record could not be found. \
                    Try refreshing the page to see if it has already been deleted."
                        .to_owned(),
                },
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Something went wrong".to_owned(),
                    details:
                        "An unexpected error occurred, check the server logs for more details."
                            .to_owned(),
                },
            ),
        };

        (status_code, alert.into_html()).into_response()
    }
}
