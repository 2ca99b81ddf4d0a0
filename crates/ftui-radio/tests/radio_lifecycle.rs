#![forbid(unsafe_code)]

//! End-to-end lifecycle scenarios for a radio group driven by host events.

use ftui_radio::{
    AsyncResult, Notification, RadioEvent, RadioGroup, RadioGroupState, RadioOption,
    ValidationConfig,
};

fn option_list() -> Vec<RadioOption> {
    vec![
        RadioOption::new("engineer", "engineer"),
        RadioOption::new("teacher", "teacher"),
        RadioOption::new("student", "student"),
    ]
}

fn required() -> ValidationConfig {
    ValidationConfig::new().with_required(true)
}

/// Drive a sequence of events, collecting every notification.
fn drive(
    group: &RadioGroup,
    state: &mut RadioGroupState,
    events: &[RadioEvent],
) -> Vec<Notification> {
    events
        .iter()
        .flat_map(|event| state.handle_event(group, event))
        .collect()
}

fn validated(notifications: &[Notification]) -> Vec<bool> {
    notifications
        .iter()
        .filter_map(|n| match n {
            Notification::Validated(v) => Some(*v),
            _ => None,
        })
        .collect()
}

#[test]
fn forced_validate_shows_error_message() {
    let group = RadioGroup::new(option_list()).config(required());
    let mut state = RadioGroupState::new();
    assert!(!state.snapshot().visible);

    state.handle_event(&group, &RadioEvent::Validate);
    assert!(state.snapshot().visible);
    assert!(!state.snapshot().message.is_empty());
}

#[test]
fn msg_on_error_replaces_default_message() {
    let group = RadioGroup::new(option_list()).config(required().with_msg_on_error("msgOnError"));
    let mut state = RadioGroupState::new();
    drive(&group, &mut state, &[RadioEvent::Click, RadioEvent::Blur]);
    assert_eq!(state.snapshot().visible_message(), Some("msgOnError"));
}

#[test]
fn msg_on_success_shown_for_valid_selection() {
    let config = ValidationConfig::new()
        .with_name("foobar")
        .with_check(true)
        .with_required(true)
        .with_show_msg(true)
        .with_msg_on_success("msgOnSuccess");
    let group = RadioGroup::new(option_list()).config(config);
    let mut state = RadioGroupState::with_value("student");
    drive(&group, &mut state, &[RadioEvent::Click, RadioEvent::Blur]);
    assert!(state.snapshot().is_valid);
    assert_eq!(state.snapshot().visible_message(), Some("msgOnSuccess"));
}

#[test]
fn validation_callback_receives_true_for_matching_value() {
    let group = RadioGroup::new(option_list()).config(required());
    let mut state = RadioGroupState::with_value("engineer");
    let out = drive(&group, &mut state, &[RadioEvent::Click, RadioEvent::Blur]);
    assert_eq!(validated(&out), vec![true]);
    assert!(state.snapshot().is_valid);
}

#[test]
fn validation_callback_fires_once_per_evaluation() {
    let group = RadioGroup::new(option_list()).config(required());
    let mut state = RadioGroupState::new();
    let out = drive(
        &group,
        &mut state,
        &[
            RadioEvent::Focus,
            RadioEvent::Change("teacher".into()),
            RadioEvent::AsyncResult(AsyncResult::error("taken")),
            RadioEvent::Blur,
            RadioEvent::Validate,
        ],
    );
    assert_eq!(validated(&out), vec![false, false]);
}

#[test]
fn optional_group_stays_silent_on_blur() {
    let group = RadioGroup::new(option_list());
    let mut state = RadioGroupState::new();
    let out = drive(&group, &mut state, &[RadioEvent::Focus, RadioEvent::Blur]);
    assert_eq!(validated(&out), vec![true]);
    assert!(!state.snapshot().visible);
}

#[test]
fn empty_group_without_props_stays_silent() {
    let group = RadioGroup::default();
    let mut state = RadioGroupState::new();
    drive(&group, &mut state, &[RadioEvent::Focus, RadioEvent::Blur]);
    assert!(!state.snapshot().visible);
}

#[test]
fn check_off_never_shows_message() {
    let group = RadioGroup::new(option_list()).config(required().with_check(false));
    let mut state = RadioGroupState::new();
    drive(
        &group,
        &mut state,
        &[
            RadioEvent::Focus,
            RadioEvent::Blur,
            RadioEvent::AsyncResult(AsyncResult::error("has error")),
            RadioEvent::Validate,
        ],
    );
    assert!(state.snapshot().is_valid);
    assert!(!state.snapshot().visible);
}

#[test]
fn disabled_change_shows_nothing_and_forwards_nothing() {
    let group = RadioGroup::new(option_list()).disabled(true).validate_on_change(true);
    let mut state = RadioGroupState::new();
    let out = state.handle_event(&group, &RadioEvent::Change("teacher".into()));
    assert!(out.is_empty());
    assert!(!state.snapshot().visible);
}

#[test]
fn change_forwards_selected_id() {
    let group = RadioGroup::new(option_list());
    let mut state = RadioGroupState::new();
    let out = state.handle_event(&group, &RadioEvent::Change("teacher".into()));
    assert_eq!(out, vec![Notification::Changed("teacher".into())]);
}

#[test]
fn focus_and_click_are_forwarded() {
    let group = RadioGroup::default();
    let mut state = RadioGroupState::new();
    let out = drive(&group, &mut state, &[RadioEvent::Click, RadioEvent::Focus]);
    assert_eq!(out, vec![Notification::Clicked, Notification::Focused]);
}

#[test]
fn async_error_after_successful_evaluation() {
    let group = RadioGroup::new(option_list()).config(required());
    let mut state = RadioGroupState::with_value("teacher");
    drive(&group, &mut state, &[RadioEvent::Focus, RadioEvent::Blur]);
    assert!(state.snapshot().is_valid);

    state.handle_event(&group, &RadioEvent::AsyncResult(AsyncResult::error("has error")));
    assert!(!state.snapshot().is_valid);
    assert_eq!(state.snapshot().message, "has error");
    assert!(state.snapshot().visible);
}

#[test]
fn async_error_hidden_when_show_on_error_off() {
    let group = RadioGroup::new(option_list()).config(required());
    let mut state = RadioGroupState::with_value("teacher");
    drive(&group, &mut state, &[RadioEvent::Focus, RadioEvent::Blur]);

    let json = r#"{"error":true,"message":"has error","showOnError":false}"#;
    let result = AsyncResult::from_json(json).unwrap();
    state.handle_event(&group, &RadioEvent::AsyncResult(result));
    assert!(!state.snapshot().visible);
}

#[test]
fn async_success_shown_when_requested() {
    let group = RadioGroup::new(option_list()).config(required());
    let mut state = RadioGroupState::with_value("teacher");
    drive(&group, &mut state, &[RadioEvent::Focus, RadioEvent::Blur]);

    let json = r#"{"error":false,"message":"success","showOnSuccess":true}"#;
    let result = AsyncResult::from_json(json).unwrap();
    state.handle_event(&group, &RadioEvent::AsyncResult(result));
    assert_eq!(state.snapshot().visible_message(), Some("success"));
}

#[test]
fn async_error_cannot_bypass_required_gating() {
    let group = RadioGroup::new(option_list());
    let mut state = RadioGroupState::new();
    drive(&group, &mut state, &[RadioEvent::Focus, RadioEvent::Blur]);
    state.handle_event(&group, &RadioEvent::AsyncResult(AsyncResult::error("has error")));
    assert!(state.snapshot().is_valid);
    assert!(!state.snapshot().visible);
}

#[test]
fn redelivering_async_result_is_idempotent() {
    let group = RadioGroup::new(option_list()).config(required());
    let mut state = RadioGroupState::with_value("teacher");
    let event = RadioEvent::AsyncResult(AsyncResult::error("has error"));
    state.handle_event(&group, &event);
    let first = state.snapshot().clone();
    state.handle_event(&group, &event);
    assert_eq!(state.snapshot(), &first);
}

#[test]
fn unsupported_locale_falls_back_to_default_messages() {
    let group = RadioGroup::new(option_list()).config(required().with_locale("foobar"));
    let mut state = RadioGroupState::new();
    drive(&group, &mut state, &[RadioEvent::Click, RadioEvent::Blur]);
    assert_eq!(state.snapshot().visible_message(), Some("Please select an option."));
    assert!(state.diagnostic().is_some());
}

#[test]
fn json_config_drives_group() {
    let json = r#"{"name":"职业","required":true,"locale":"zh_CN"}"#;
    let config = ValidationConfig::from_json(json).unwrap();
    let group = RadioGroup::new(option_list()).config(config);
    let mut state = RadioGroupState::new();
    state.handle_event(&group, &RadioEvent::Validate);
    assert_eq!(state.snapshot().visible_message(), Some("请选择职业"));
    assert_eq!(state.diagnostic(), None);
}

#[test]
fn disabling_check_after_blur_hides_message() {
    let group = RadioGroup::new(option_list()).config(required());
    let mut state = RadioGroupState::new();
    drive(&group, &mut state, &[RadioEvent::Focus, RadioEvent::Blur]);
    assert!(state.snapshot().visible);

    let unchecked = RadioGroup::new(option_list()).config(required().with_check(false));
    drive(
        &unchecked,
        &mut state,
        &[
            RadioEvent::Focus,
            RadioEvent::Click,
            RadioEvent::Change("teacher".into()),
        ],
    );
    assert!(state.snapshot().is_valid);
    assert!(!state.snapshot().visible);
}

#[test]
fn host_value_while_focused_clears_stale_error() {
    let group = RadioGroup::new(option_list()).config(required());
    let mut state = RadioGroupState::new();
    drive(
        &group,
        &mut state,
        &[
            RadioEvent::Blur,
            RadioEvent::Focus,
            RadioEvent::SetValue(Some("teacher".into())),
        ],
    );
    assert!(state.snapshot().is_valid);
}
