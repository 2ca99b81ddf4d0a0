#![forbid(unsafe_code)]

//! Validation configuration with documented defaults.
//!
//! Every recognized option is an explicit field. Defaults are applied once,
//! either through [`Default`] or at the JSON boundary via
//! [`ValidationConfig::from_json`], so evaluation code never looks up a
//! missing key.
//!
//! | Field            | Default   |
//! |------------------|-----------|
//! | `name`           | `""`      |
//! | `check`          | `true`    |
//! | `required`       | `false`   |
//! | `show_msg`       | `true`    |
//! | `msg_on_error`   | `None`    |
//! | `msg_on_success` | `None`    |
//! | `locale`         | `"en-US"` |

use std::fmt;

use serde::Deserialize;

use crate::messages::DEFAULT_LOCALE;

/// Error returned when host-supplied JSON has the wrong shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The input is not valid JSON, or a field has the wrong type.
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "invalid validation option: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e.to_string())
    }
}

/// Validation options for a radio group.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidationConfig {
    /// Field name interpolated into default messages.
    pub name: String,
    /// Master switch. When `false` nothing is evaluated and nothing is shown.
    pub check: bool,
    /// When `false`, an empty value is valid and evaluation is skipped.
    pub required: bool,
    /// Whether a resolved message may be shown at all.
    pub show_msg: bool,
    /// Replaces the default error message when non-empty.
    pub msg_on_error: Option<String>,
    /// Replaces the default success message when non-empty.
    pub msg_on_success: Option<String>,
    /// Message catalog key.
    pub locale: String,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            check: true,
            required: false,
            show_msg: true,
            msg_on_error: None,
            msg_on_success: None,
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl ValidationConfig {
    /// Create a config with all defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a host option object such as `{"required": true, "msgOnError": "..."}`.
    ///
    /// Unknown keys are ignored and missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Convert an already-parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Set the field name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Enable or disable checking.
    #[must_use]
    pub fn with_check(mut self, check: bool) -> Self {
        self.check = check;
        self
    }

    /// Mark the selection as required.
    #[must_use]
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Allow or suppress messages.
    #[must_use]
    pub fn with_show_msg(mut self, show_msg: bool) -> Self {
        self.show_msg = show_msg;
        self
    }

    /// Override the error message.
    #[must_use]
    pub fn with_msg_on_error(mut self, msg: impl Into<String>) -> Self {
        self.msg_on_error = Some(msg.into());
        self
    }

    /// Override the success message.
    #[must_use]
    pub fn with_msg_on_success(mut self, msg: impl Into<String>) -> Self {
        self.msg_on_success = Some(msg.into());
        self
    }

    /// Set the message locale.
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Success override, if one was given and is non-empty.
    #[must_use]
    pub fn success_override(&self) -> Option<&str> {
        self.msg_on_success.as_deref().filter(|m| !m.is_empty())
    }

    /// Error override, if one was given and is non-empty.
    #[must_use]
    pub fn error_override(&self) -> Option<&str> {
        self.msg_on_error.as_deref().filter(|m| !m.is_empty())
    }
}
