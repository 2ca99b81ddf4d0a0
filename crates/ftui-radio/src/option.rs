#![forbid(unsafe_code)]

//! Radio options and the membership check behind selection validity.
//!
//! Option ids are expected to be unique within a list. Duplicates are not
//! rejected; lookups return the first match.

use serde::Deserialize;

/// A single selectable choice in a radio group.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RadioOption {
    /// Stable identifier, compared by exact string equality.
    pub id: String,
    /// Display label.
    pub name: String,
    /// Disabled options cannot be selected through a change event.
    #[serde(default)]
    pub disabled: bool,
}

impl RadioOption {
    /// Create an enabled option.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            disabled: false,
        }
    }

    /// Mark this option as disabled.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Returns `true` iff `options` is non-empty and some option's id equals `value`.
///
/// Total over all inputs: an empty list or an absent value is never valid.
#[must_use]
pub fn is_valid_value(options: &[RadioOption], value: Option<&str>) -> bool {
    match value {
        Some(value) => find_option(options, value).is_some(),
        None => false,
    }
}

/// Look up the first option with the given id.
#[must_use]
pub fn find_option<'a>(options: &'a [RadioOption], id: &str) -> Option<&'a RadioOption> {
    options.iter().find(|option| option.id == id)
}
