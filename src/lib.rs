//! Tally is a web app that pairs a small expense calculator with a browser
//! for a remotely-fetched user directory.
//!
//! This library provides a REST API that directly serves HTML pages. All
//! collection state is held in memory for the lifetime of the server
//! session: the expense ledger starts empty, the user directory is
//! populated by a single outbound fetch, and both are discarded on
//! shutdown.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod alert;
mod directory;
mod endpoints;
mod error;
mod expense;
mod html;
mod internal_server_error;
mod navigation;
mod not_found;
mod pagination;
mod routing;
mod state;

#[cfg(test)]
mod test_utils;

pub use directory::DEFAULT_USERS_URL;
pub use error::Error;
pub use routing::build_router;
pub use state::AppState;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
