//! Board configuration.
//!
//! # Responsibility
//! - Hold the input form's per-field validation rules.
//! - Resolve host runtime settings from the environment.
//!
//! # Invariants
//! - Blank environment values are treated as unset.

use crate::logging::default_log_level;
use crate::validation::{FieldValue, Validatable};

/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "PROJBOARD_LOG_LEVEL";
/// Environment variable enabling file logging into a directory.
pub const ENV_LOG_DIR: &str = "PROJBOARD_LOG_DIR";

/// Constraint templates for the three input fields.
///
/// Template `value`s are ignored; the form fills them in on submit.
#[derive(Debug, Clone, PartialEq)]
pub struct InputRules {
    pub title: Validatable,
    pub description: Validatable,
    pub people: Validatable,
}

impl Default for InputRules {
    fn default() -> Self {
        Self {
            title: Validatable {
                required: true,
                ..Validatable::default()
            },
            description: Validatable {
                required: true,
                min_length: Some(5),
                ..Validatable::default()
            },
            people: Validatable {
                required: true,
                min: Some(1.0),
                max: Some(5.0),
                ..Validatable::default()
            },
        }
    }
}

impl InputRules {
    /// Applies one rule template to a concrete value.
    pub(crate) fn bind(rule: &Validatable, value: FieldValue) -> Validatable {
        Validatable {
            value: Some(value),
            ..rule.clone()
        }
    }
}

/// Host runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    pub log_level: String,
    /// `None` keeps file logging off.
    pub log_dir: Option<String>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl BoardConfig {
    /// Reads settings from process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, for hosts with their own env source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();
        Self {
            log_level: non_blank(ENV_LOG_LEVEL).unwrap_or(defaults.log_level),
            log_dir: non_blank(ENV_LOG_DIR),
        }
    }
}
