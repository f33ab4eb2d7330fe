//! Alert fragments for displaying success and error messages to users.
//!
//! Alerts are rendered into the `#alert-container` element via htmx
//! out-of-band swaps, so any endpoint can surface a message without
//! re-rendering the page it was triggered from.

use maud::{Markup, html};

/// A dismissable alert message.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// A green alert confirming that an operation succeeded.
    Success {
        /// The alert headline.
        message: String,
        /// Supporting detail shown under the headline.
        details: String,
    },
    /// A red alert explaining why an operation failed.
    Error {
        /// The alert headline.
        message: String,
        /// Supporting detail shown under the headline.
        details: String,
    },
}

impl Alert {
    /// Create a success alert.
    pub fn success(message: &str, details: &str) -> Self {
        Self::Success {
            message: message.to_owned(),
            details: details.to_owned(),
        }
    }

    /// Create an error alert.
    pub fn error(message: &str, details: &str) -> Self {
        Self::Error {
            message: message.to_owned(),
            details: details.to_owned(),
        }
    }

    /// Render the alert as markup targeting the alert container.
    pub fn into_html(self) -> Markup {
        let (container_style, message, details) = match self {
            Alert::Success { message, details } => (
                "rounded border border-green-300 bg-green-50 p-4 text-green-800 \
                dark:border-green-800 dark:bg-gray-800 dark:text-green-400",
                message,
                details,
            ),
            Alert::Error { message, details } => (
                "rounded border border-red-300 bg-red-50 p-4 text-red-800 \
                dark:border-red-800 dark:bg-gray-800 dark:text-red-400",
                message,
                details,
            ),
        };

        html!(
            div id="alert-container" hx-swap-oob="true" class="w-full max-w-md px-4"
                style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
            {
                div class=(container_style) role="alert"
                {
                    div class="flex items-start justify-between gap-3"
                    {
                        p class="font-medium" { (message) }

                        button
                            type="button"
                            class="font-bold"
                            onclick="this.closest('[role=alert]').remove()"
                            aria-label="Dismiss"
                        {
                            "\u{00d7}"
                        }
                    }

                    @if !details.is_empty() {
                        p class="mt-1 text-sm" { (details) }
                    }
                }
            }
        )
    }
}
