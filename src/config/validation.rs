//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Catch blank user-facing wording before it reaches a view
//! - Validate the tracing filter is present
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::fmt;

use crate::config::schema::{AppConfig, FormText};

/// One semantic problem found in a config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyFormText {
        form: &'static str,
        field: &'static str,
    },
    EmptyTimelineTitle {
        list: &'static str,
    },
    EmptyLogFilter,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyFormText { form, field } => {
                write!(f, "ui.{form}.{field} must not be blank")
            }
            ValidationError::EmptyTimelineTitle { list } => {
                write!(f, "ui.{list} timeline title must not be blank")
            }
            ValidationError::EmptyLogFilter => {
                write!(f, "observability.log_filter must not be blank")
            }
        }
    }
}

fn check_form(errors: &mut Vec<ValidationError>, form: &'static str, text: &FormText) {
    if text.heading.trim().is_empty() {
        errors.push(ValidationError::EmptyFormText {
            form,
            field: "heading",
        });
    }
    if text.button_text.trim().is_empty() {
        errors.push(ValidationError::EmptyFormText {
            form,
            field: "button_text",
        });
    }
}

/// Validate a deserialized config, collecting every problem.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_form(&mut errors, "signin", &config.ui.signin);
    check_form(&mut errors, "signup", &config.ui.signup);
    check_form(&mut errors, "reset_request", &config.ui.reset_request);
    check_form(&mut errors, "reset_password", &config.ui.reset_password);

    if config.ui.update_button_text.trim().is_empty() {
        errors.push(ValidationError::EmptyFormText {
            form: "update",
            field: "button_text",
        });
    }
    if config.ui.global_timeline_title.trim().is_empty() {
        errors.push(ValidationError::EmptyTimelineTitle { list: "global" });
    }
    if config.ui.subscriptions_timeline_title.trim().is_empty() {
        errors.push(ValidationError::EmptyTimelineTitle {
            list: "subscriptions",
        });
    }
    if config.observability.log_filter.trim().is_empty() {
        errors.push(ValidationError::EmptyLogFilter);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
