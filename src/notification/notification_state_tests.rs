//! Tests for notification_state

use super::*;
use proptest::prelude::*;
use std::thread;

#[test]
fn test_info_notification() {
    let notif = Notification::new("Saved", NotificationKind::Info);
    assert_eq!(notif.message, "Saved");
    assert_eq!(notif.duration, Duration::from_millis(1500));
    assert_eq!(notif.kind.colors().bg, INFO.bg);
    assert!(!notif.is_expired());
}

#[test]
fn test_warning_outlives_info() {
    assert!(NotificationKind::Warning.duration() > NotificationKind::Info.duration());
    assert_eq!(NotificationKind::Warning.colors().bg, WARNING.bg);
}

#[test]
fn test_notification_expiration() {
    let mut notif = Notification::new("Expiring", NotificationKind::Info);
    notif.duration = Duration::from_millis(10);
    assert!(!notif.is_expired());
    thread::sleep(Duration::from_millis(20));
    assert!(notif.is_expired());
}

#[test]
fn test_show_warning_sets_kind() {
    let mut state = NotificationState::new();
    assert!(state.current().is_none());

    state.show_warning("Config invalid");

    let notif = state.current().unwrap();
    assert_eq!(notif.message, "Config invalid");
    assert_eq!(notif.kind, NotificationKind::Warning);
}

#[test]
fn test_clear_if_expired() {
    let mut state = NotificationState::new();
    state.show("Test");
    if let Some(notif) = state.current_mut() {
        notif.duration = Duration::from_millis(10);
    }

    assert!(!state.clear_if_expired());
    thread::sleep(Duration::from_millis(20));
    assert!(state.clear_if_expired());
    assert!(state.current().is_none());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_latest_notification_wins(messages in prop::collection::vec("[a-zA-Z0-9 ]{1,50}", 1..10)) {
        let mut state = NotificationState::new();
        for msg in &messages {
            state.show(msg);
        }
        prop_assert_eq!(state.current_message(), messages.last().map(String::as_str));
    }
}
