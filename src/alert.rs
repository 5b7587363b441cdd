//! Inline alerts for displaying error messages to users.
//!
//! Alerts are rendered as small HTML fragments and swapped into the page by
//! htmx when an endpoint responds with an error status.

use maud::{Markup, html};

/// Renders alert messages with appropriate styling.
pub struct AlertTemplate;

impl AlertTemplate {
    /// Create a new error alert.
    pub fn error(message: &str, details: &str) -> Markup {
        html!(
            div
                role="alert"
                class="w-full p-4 mb-4 rounded-lg border border-red-300 \
                    bg-red-50 text-red-800 dark:bg-gray-800 dark:text-red-400 \
                    dark:border-red-800"
            {
                p class="font-semibold" { (message) }

                @if !details.is_empty() {
                    p class="text-sm" { (details) }
                }
            }
        )
    }
}
