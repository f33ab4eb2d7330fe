//! Defines the 404 not found page.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::html::error_view;

/// The requested resource does not exist.
pub struct NotFoundError;

impl IntoResponse for NotFoundError {
    fn into_response(self) -> Response {
        (
            StatusCode::NOT_FOUND,
            error_view(
                "Not Found",
                "404",
                "Sorry, we couldn't find that page.",
                "Check the address for typos, or head back to the homepage.",
            ),
        )
            .into_response()
    }
}

/// The fallback route handler for requests that match no other route.
pub async fn get_404_not_found() -> Response {
    NotFoundError.into_response()
}
