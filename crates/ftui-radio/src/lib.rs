#![forbid(unsafe_code)]

//! Radio group selection state with an embedded validation engine.
//!
//! The engine is split into small pure stages composed by the interaction
//! state machine:
//!
//! - [`option`]: membership of a value in the option list
//! - [`rules`]: synchronous verdict (error / success / skipped)
//! - [`overlay`]: externally delivered async verdicts layered on top
//! - [`messages`]: localized default messages with fallback diagnostics
//! - [`group`]: focus/blur/change lifecycle and host notifications
//!
//! Rendering is left to the host; the state exposes a
//! [`ValidationSnapshot`] each frame can draw from.
//!
//! # Example
//!
//! ```rust
//! use ftui_radio::{
//!     Notification, RadioEvent, RadioGroup, RadioGroupState, RadioOption, ValidationConfig,
//! };
//!
//! let group = RadioGroup::new(vec![
//!     RadioOption::new("engineer", "Engineer"),
//!     RadioOption::new("teacher", "Teacher"),
//! ])
//! .config(ValidationConfig::new().with_name("job").with_required(true));
//!
//! let mut state = RadioGroupState::new();
//! state.handle_event(&group, &RadioEvent::Focus);
//! let out = state.handle_event(&group, &RadioEvent::Blur);
//! assert_eq!(out, vec![Notification::Blurred, Notification::Validated(false)]);
//! assert_eq!(state.snapshot().visible_message(), Some("Please select job."));
//!
//! state.handle_event(&group, &RadioEvent::Change("teacher".into()));
//! state.handle_event(&group, &RadioEvent::Blur);
//! assert!(state.snapshot().is_valid);
//! ```

pub mod config;
pub mod group;
pub mod messages;
pub mod option;
pub mod overlay;
pub mod rules;

pub use config::{ConfigError, ValidationConfig};
pub use group::{Notification, Phase, RadioEvent, RadioGroup, RadioGroupState};
pub use messages::{
    CATALOG_VERSION, DEFAULT_LOCALE, LocaleDiagnostic, MessageKind, Resolution, resolve,
};
pub use option::{RadioOption, find_option, is_valid_value};
pub use overlay::{AsyncResult, AsyncVerdict, Overlaid, ValidationSnapshot, overlay};
pub use rules::{Outcome, Verdict, evaluate, is_empty_value};
