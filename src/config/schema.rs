//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the reading application shell.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Wording of form views and timeline titles.
    pub ui: UiConfig,

    /// Route resolution options.
    pub routing: RoutingConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Heading and submit label of one form view.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FormText {
    pub heading: String,
    pub button_text: String,
}

impl FormText {
    fn new(heading: &str, button_text: &str) -> Self {
        Self {
            heading: heading.to_string(),
            button_text: button_text.to_string(),
        }
    }
}

/// User-facing wording for forms and timeline titles.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UiConfig {
    pub signin: FormText,
    pub signup: FormText,
    pub reset_request: FormText,
    pub reset_password: FormText,

    /// Submit label of the profile update form (its heading is the
    /// signed-in username).
    pub update_button_text: String,

    pub global_timeline_title: String,
    pub subscriptions_timeline_title: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            signin: FormText::new("Welcome Back.", "Log In"),
            signup: FormText::new("Join today!", "Sign up"),
            reset_request: FormText::new("Enter email address", "Send reset email"),
            reset_password: FormText::new("Reset your password", "Save new password"),
            update_button_text: "Update".to_string(),
            global_timeline_title: "Global Readings".to_string(),
            subscriptions_timeline_title: "Friend's Readings".to_string(),
        }
    }
}

/// Route resolution options.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Send unmatched paths to the home timeline instead of the
    /// not-found terminal.
    pub home_fallback: bool,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            home_fallback: false,
        }
    }
}

/// Observability settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default tracing filter, overridable via `RUST_LOG`.
    pub log_filter: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: "folio_router=info".to_string(),
        }
    }
}
