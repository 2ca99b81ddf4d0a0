#![forbid(unsafe_code)]

//! Synchronous rule evaluation.

use crate::config::ValidationConfig;
use crate::messages::MessageKind;
use crate::option::{RadioOption, is_valid_value};

/// What a synchronous evaluation concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The selection failed the rule.
    Error,
    /// The selection passed the rule.
    Success,
    /// Validation did not apply (`check` off, or optional and empty).
    Skipped,
}

impl Outcome {
    /// The message that describes this outcome, if any.
    #[must_use]
    pub fn message_kind(self) -> Option<MessageKind> {
        match self {
            Self::Error => Some(MessageKind::Error),
            Self::Success => Some(MessageKind::Success),
            Self::Skipped => None,
        }
    }
}

/// Result of [`evaluate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Verdict {
    pub is_valid: bool,
    pub outcome: Outcome,
}

impl Verdict {
    /// The verdict for an evaluation that did not apply.
    pub const SKIPPED: Self = Self {
        is_valid: true,
        outcome: Outcome::Skipped,
    };
}

/// Returns `true` when no option is selected.
#[must_use]
pub fn is_empty_value(value: Option<&str>) -> bool {
    value.is_none_or(str::is_empty)
}

/// Evaluate the selection against the configured rules.
///
/// Deterministic and total: every combination of inputs yields a verdict.
#[must_use]
pub fn evaluate(
    config: &ValidationConfig,
    value: Option<&str>,
    options: &[RadioOption],
) -> Verdict {
    if !config.check {
        return Verdict::SKIPPED;
    }
    if !config.required && is_empty_value(value) {
        return Verdict::SKIPPED;
    }
    let ok = is_valid_value(options, value);
    Verdict {
        is_valid: ok,
        outcome: if ok { Outcome::Success } else { Outcome::Error },
    }
}
