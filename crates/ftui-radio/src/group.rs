#![forbid(unsafe_code)]

//! Radio group props and the interaction state machine.
//!
//! [`RadioGroup`] holds what the host supplies (options, validation config,
//! disabled flag, change policy). [`RadioGroupState`] holds what the
//! interaction produces: the selected value, the lifecycle [`Phase`], the
//! latest async result and the published [`ValidationSnapshot`].
//!
//! ```text
//!   Idle ──focus──▶ Focused ──blur──▶ Evaluated
//!    │                 ▲                 │
//!    └──blur/validate──┼────────────────▶│
//!                      └──────focus──────┘
//! ```
//!
//! Host callbacks are modeled as returned [`Notification`] values rather
//! than stored closures.
//!
//! # Invariants
//!
//! 1. Exactly one `Validated` notification per blur or forced validation.
//! 2. `Changed` is emitted for every accepted change, valid or not.
//! 3. Change-triggered evaluation never applies the stored async result.
//! 4. The snapshot after any event reflects the newest async result only.
//! 5. Once evaluated, the snapshot follows prop and value updates, so
//!    `check == false` (or optional and empty) is silent after any event.
//!
//! # Failure Modes
//!
//! | Scenario                          | Behavior                          |
//! |-----------------------------------|-----------------------------------|
//! | Change while group disabled       | Swallowed, no notification        |
//! | Change to a disabled option       | Swallowed, no notification        |
//! | Change to an unknown id           | Accepted; fails a required check  |
//! | Unsupported locale                | Fallback text, diagnostic kept    |
//! | Props swapped after evaluation    | Snapshot recomputed, phase kept   |

use crate::config::ValidationConfig;
use crate::messages::LocaleDiagnostic;
use crate::option::{RadioOption, find_option};
use crate::overlay::{AsyncResult, ValidationSnapshot, overlay};
use crate::rules::evaluate;

// ---------------------------------------------------------------------------
// RadioGroup – host-supplied props
// ---------------------------------------------------------------------------

/// Host-supplied configuration for a radio group.
///
/// Replace the whole value to update props. Once a snapshot exists, the
/// next event handled with the new props recomputes it.
#[derive(Debug, Clone, Default)]
pub struct RadioGroup {
    options: Vec<RadioOption>,
    config: ValidationConfig,
    disabled: bool,
    validate_on_change: bool,
}

impl RadioGroup {
    /// Create a group over the given options with default validation.
    #[must_use]
    pub fn new(options: Vec<RadioOption>) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    /// Set the validation config.
    #[must_use]
    pub fn config(mut self, config: ValidationConfig) -> Self {
        self.config = config;
        self
    }

    /// Suppress all change events.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Re-run synchronous validation on every accepted change.
    #[must_use]
    pub fn validate_on_change(mut self, enabled: bool) -> Self {
        self.validate_on_change = enabled;
        self
    }

    /// Available options.
    #[must_use]
    pub fn options(&self) -> &[RadioOption] {
        &self.options
    }

    /// Validation config.
    #[must_use]
    pub fn validation_config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Whether change events are suppressed.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}

// ---------------------------------------------------------------------------
// Events and notifications
// ---------------------------------------------------------------------------

/// Lifecycle phase of the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No interaction yet; nothing shown.
    #[default]
    Idle,
    /// The user is interacting; the last snapshot (if any) persists.
    Focused,
    /// A snapshot has been computed and published.
    Evaluated,
}

/// Input delivered by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RadioEvent {
    Focus,
    Blur,
    Click,
    /// The user selected the option with this id.
    Change(String),
    /// Host-forced revalidation, independent of focus.
    Validate,
    /// Controlled value update from the host.
    SetValue(Option<String>),
    /// A newly delivered async result.
    AsyncResult(AsyncResult),
}

/// Output for the host, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Focused,
    Blurred,
    Clicked,
    /// The selection changed to this id.
    Changed(String),
    /// An evaluation completed with this validity.
    Validated(bool),
}

#[derive(Debug, Clone, Copy)]
enum Trigger {
    Blur,
    Forced,
    Change,
    HostValue,
    AsyncDelivery,
    Props,
}

impl Trigger {
    fn as_str(self) -> &'static str {
        match self {
            Self::Blur => "blur",
            Self::Forced => "forced",
            Self::Change => "change",
            Self::HostValue => "host_value",
            Self::AsyncDelivery => "async",
            Self::Props => "props",
        }
    }

    fn applies_async(self) -> bool {
        !matches!(self, Self::Change | Self::HostValue)
    }

    /// Refreshes keep the current phase; only interaction moves it.
    fn advances_phase(self) -> bool {
        !matches!(self, Self::HostValue | Self::Props)
    }
}

// ---------------------------------------------------------------------------
// RadioGroupState
// ---------------------------------------------------------------------------

/// Mutable state for a [`RadioGroup`].
#[derive(Debug, Clone, Default)]
pub struct RadioGroupState {
    value: Option<String>,
    phase: Phase,
    snapshot: ValidationSnapshot,
    async_result: AsyncResult,
    diagnostic: Option<LocaleDiagnostic>,
    /// Config and options behind the current snapshot; `None` until the
    /// first evaluation.
    evaluated_props: Option<(ValidationConfig, Vec<RadioOption>)>,
}

impl RadioGroupState {
    /// Create state with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state with an initial selection.
    #[must_use]
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::default()
        }
    }

    /// Currently selected option id.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Most recently published snapshot.
    #[must_use]
    pub fn snapshot(&self) -> &ValidationSnapshot {
        &self.snapshot
    }

    /// Latest async result delivered by the host.
    #[must_use]
    pub fn async_result(&self) -> &AsyncResult {
        &self.async_result
    }

    /// Diagnostic raised by the most recent evaluation, if any.
    #[must_use]
    pub fn diagnostic(&self) -> Option<&LocaleDiagnostic> {
        self.diagnostic.as_ref()
    }

    /// Whether a snapshot has been computed since construction.
    #[must_use]
    pub fn is_evaluated(&self) -> bool {
        self.evaluated_props.is_some()
    }

    /// Handle an event and return the notifications for the host.
    ///
    /// If `group` carries a different config or option list than the one
    /// behind the current snapshot, the snapshot is recomputed afterwards.
    pub fn handle_event(&mut self, group: &RadioGroup, event: &RadioEvent) -> Vec<Notification> {
        let notifications = self.dispatch(group, event);
        if self.props_changed(group) {
            self.publish(group, Trigger::Props);
        }
        notifications
    }

    fn dispatch(&mut self, group: &RadioGroup, event: &RadioEvent) -> Vec<Notification> {
        match event {
            RadioEvent::Focus => {
                self.phase = Phase::Focused;
                vec![Notification::Focused]
            }
            RadioEvent::Click => vec![Notification::Clicked],
            RadioEvent::Change(id) => self.change(group, id),
            RadioEvent::Blur => {
                let is_valid = self.publish(group, Trigger::Blur);
                vec![Notification::Blurred, Notification::Validated(is_valid)]
            }
            RadioEvent::Validate => {
                let is_valid = self.publish(group, Trigger::Forced);
                vec![Notification::Validated(is_valid)]
            }
            RadioEvent::SetValue(value) => {
                self.value.clone_from(value);
                if self.is_evaluated() {
                    self.publish(group, Trigger::HostValue);
                }
                Vec::new()
            }
            RadioEvent::AsyncResult(result) => {
                self.async_result = result.clone();
                self.publish(group, Trigger::AsyncDelivery);
                Vec::new()
            }
        }
    }

    fn change(&mut self, group: &RadioGroup, id: &str) -> Vec<Notification> {
        if group.disabled {
            tracing::trace!(target: "ftui_radio::group", id, "change ignored: group disabled");
            return Vec::new();
        }
        if find_option(&group.options, id).is_some_and(|option| option.disabled) {
            tracing::trace!(target: "ftui_radio::group", id, "change ignored: option disabled");
            return Vec::new();
        }

        self.value = Some(id.to_string());
        if group.config.check && group.validate_on_change {
            self.publish(group, Trigger::Change);
        }
        vec![Notification::Changed(id.to_string())]
    }

    fn props_changed(&self, group: &RadioGroup) -> bool {
        self.evaluated_props
            .as_ref()
            .is_some_and(|(config, options)| {
                *config != group.config || options.as_slice() != group.options.as_slice()
            })
    }

    /// Evaluate, overlay and publish. Returns the published validity.
    fn publish(&mut self, group: &RadioGroup, trigger: Trigger) -> bool {
        let _span = tracing::debug_span!(
            target: "ftui_radio::group",
            "radio_validate",
            trigger = trigger.as_str()
        )
        .entered();

        let base = evaluate(&group.config, self.value.as_deref(), &group.options);
        let pending = AsyncResult::Pending;
        let async_result = if trigger.applies_async() {
            &self.async_result
        } else {
            &pending
        };
        let out = overlay(base, async_result, &group.config);

        tracing::debug!(
            target: "ftui_radio::group",
            outcome = ?base.outcome,
            is_valid = out.snapshot.is_valid,
            visible = out.snapshot.visible,
            "published validation snapshot"
        );
        self.snapshot = out.snapshot;
        self.diagnostic = out.diagnostic;
        self.evaluated_props = Some((group.config.clone(), group.options.clone()));
        if trigger.advances_phase() {
            self.phase = Phase::Evaluated;
        }
        self.snapshot.is_valid
    }
}
