#![forbid(unsafe_code)]

//! Async result overlay and the published validation snapshot.
//!
//! An [`AsyncResult`] is a verdict computed outside the engine, typically a
//! server round trip. It is layered over the synchronous [`Verdict`] but
//! never overrides the `check`/`required` gating: a skipped base stays
//! skipped.
//!
//! # Invariants
//!
//! 1. `visible` implies a non-empty `message`.
//! 2. Skipped base or `check == false` yields `is_valid` and nothing visible.
//! 3. [`overlay`] is pure, so re-delivering a result reproduces the snapshot.
//!
//! # Failure Modes
//!
//! | Scenario                               | Behavior                        |
//! |----------------------------------------|---------------------------------|
//! | Async error with empty message         | `is_valid = false`, not visible |
//! | Async success, `show_on_success` unset | Message cleared, not visible    |
//! | Unsupported locale                     | Fallback text plus diagnostic   |

use serde::Deserialize;

use crate::config::{ConfigError, ValidationConfig};
use crate::messages::{self, LocaleDiagnostic, MessageKind};
use crate::rules::{Outcome, Verdict};

// ---------------------------------------------------------------------------
// AsyncResult
// ---------------------------------------------------------------------------

/// An externally delivered verdict.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AsyncResult {
    /// No async result has been delivered yet.
    #[default]
    Pending,
    /// The external check finished.
    Resolved(AsyncVerdict),
}

/// The payload of a resolved async check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsyncVerdict {
    /// Whether the external check failed.
    pub error: bool,
    /// Literal display text; never passed through the message catalog.
    pub message: String,
    /// Show the message when `error` is set. Default: `true`.
    pub show_on_error: bool,
    /// Show the message when `error` is clear. Default: `false`.
    pub show_on_success: bool,
}

impl AsyncResult {
    /// A failed external check.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::Resolved(AsyncVerdict {
            error: true,
            message: message.into(),
            show_on_error: true,
            show_on_success: false,
        })
    }

    /// A passed external check.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self::Resolved(AsyncVerdict {
            error: false,
            message: message.into(),
            show_on_error: true,
            show_on_success: false,
        })
    }

    /// Set whether an error message is shown. No-op on `Pending`.
    #[must_use]
    pub fn show_on_error(mut self, show: bool) -> Self {
        if let Self::Resolved(verdict) = &mut self {
            verdict.show_on_error = show;
        }
        self
    }

    /// Set whether a success message is shown. No-op on `Pending`.
    #[must_use]
    pub fn show_on_success(mut self, show: bool) -> Self {
        if let Self::Resolved(verdict) = &mut self {
            verdict.show_on_success = show;
        }
        self
    }

    /// Parse a host object such as `{"error": true, "message": "taken"}`.
    ///
    /// An object without `error`, including `{}`, is `Pending`.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawAsyncResult = serde_json::from_str(json)?;
        Ok(raw.into())
    }

    /// Whether a result has been delivered.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct RawAsyncResult {
    error: Option<bool>,
    message: Option<String>,
    show_on_error: Option<bool>,
    show_on_success: Option<bool>,
}

impl From<RawAsyncResult> for AsyncResult {
    fn from(raw: RawAsyncResult) -> Self {
        let Some(error) = raw.error else {
            return AsyncResult::Pending;
        };
        AsyncResult::Resolved(AsyncVerdict {
            error,
            message: raw.message.unwrap_or_default(),
            show_on_error: raw.show_on_error.unwrap_or(true),
            show_on_success: raw.show_on_success.unwrap_or(false),
        })
    }
}

// ---------------------------------------------------------------------------
// ValidationSnapshot
// ---------------------------------------------------------------------------

/// The render-ready validation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationSnapshot {
    pub is_valid: bool,
    pub message: String,
    pub visible: bool,
}

impl Default for ValidationSnapshot {
    fn default() -> Self {
        Self {
            is_valid: true,
            message: String::new(),
            visible: false,
        }
    }
}

impl ValidationSnapshot {
    fn new(is_valid: bool, message: String, visible: bool) -> Self {
        let visible = visible && !message.is_empty();
        Self {
            is_valid,
            message,
            visible,
        }
    }

    /// The message if it should be displayed.
    #[must_use]
    pub fn visible_message(&self) -> Option<&str> {
        self.visible.then_some(self.message.as_str())
    }
}

/// A snapshot together with any diagnostic raised while producing it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Overlaid {
    pub snapshot: ValidationSnapshot,
    pub diagnostic: Option<LocaleDiagnostic>,
}

// ---------------------------------------------------------------------------
// overlay
// ---------------------------------------------------------------------------

/// Merge `async_result` over the synchronous `base` verdict.
#[must_use]
pub fn overlay(
    base: Verdict,
    async_result: &AsyncResult,
    config: &ValidationConfig,
) -> Overlaid {
    if !config.check || base.outcome == Outcome::Skipped {
        return Overlaid::default();
    }
    let AsyncResult::Resolved(verdict) = async_result else {
        return from_base(base, config);
    };

    let snapshot = if verdict.error {
        ValidationSnapshot::new(
            false,
            verdict.message.clone(),
            config.show_msg && verdict.show_on_error,
        )
    } else {
        let visible = config.show_msg && verdict.show_on_success;
        let message = if visible {
            verdict.message.clone()
        } else {
            String::new()
        };
        ValidationSnapshot::new(true, message, visible)
    };
    Overlaid {
        snapshot,
        diagnostic: None,
    }
}

fn from_base(base: Verdict, config: &ValidationConfig) -> Overlaid {
    let Some(kind) = base.outcome.message_kind().filter(|_| config.show_msg) else {
        return Overlaid {
            snapshot: ValidationSnapshot::new(base.is_valid, String::new(), false),
            diagnostic: None,
        };
    };

    let (override_msg, visible) = match kind {
        MessageKind::Error => (config.error_override(), true),
        MessageKind::Success => {
            let success = config.success_override();
            (success, success.is_some())
        }
    };
    let resolution = messages::resolve(&config.locale, kind, override_msg, &config.name);
    Overlaid {
        snapshot: ValidationSnapshot::new(base.is_valid, resolution.text, visible),
        diagnostic: resolution.diagnostic,
    }
}
