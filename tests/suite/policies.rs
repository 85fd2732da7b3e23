//! Behavior of the three commit policies through the key handler.

use cardfolio_engine::{CommitPolicy, Mode};
use crossterm::event::KeyCode;

use crate::common::{app_with_policy, fill_card, press};

#[test]
fn silent_guard_ignores_incomplete_save_quietly() {
    let mut app = app_with_policy(CommitPolicy::SilentGuard);
    fill_card(&mut app, "Sam", "", "30");
    assert!(app.form().can_commit());
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.mode(), Mode::Editable);
    assert!(app.toast().is_none());
}

#[test]
fn disable_when_incomplete_reports_unavailable_save() {
    let mut app = app_with_policy(CommitPolicy::DisableWhenIncomplete);
    fill_card(&mut app, "Sam", "", "30");
    assert!(!app.form().can_commit());
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.mode(), Mode::Editable);
    assert!(app.toast().is_none());
}

#[test]
fn every_policy_locks_a_complete_card() {
    for policy in CommitPolicy::ALL {
        let mut app = app_with_policy(policy);
        fill_card(&mut app, "Sam", "Chess", "30");
        assert!(app.form().can_commit(), "{policy:?}");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode(), Mode::Locked, "{policy:?}");
        assert_eq!(app.toast().is_some(), policy.reports(), "{policy:?}");
    }
}
