//! End-to-end keyboard flows on the profile card.

use cardfolio_engine::{CommitPolicy, Field, Mode};
use crossterm::event::KeyCode;
use insta::assert_snapshot;

use crate::common::{app_with_policy, ctrl, fill_card, press, toast_text, type_str};

#[test]
fn save_edit_save_cycle() {
    let mut app = app_with_policy(CommitPolicy::Messaging);
    fill_card(&mut app, "Sam", "Chess", "30");

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.mode(), Mode::Locked);
    assert_snapshot!(toast_text(&app).unwrap_or_default(), @"Profile saved");

    ctrl(&mut app, 'e');
    assert_eq!(app.mode(), Mode::Editable);

    // Focus wrapped back to Name after the third Tab.
    assert_eq!(app.focus(), Field::Name);
    press(&mut app, KeyCode::End);
    type_str(&mut app, "antha");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.mode(), Mode::Locked);
    assert_eq!(app.state().display(Field::Name), "Samantha");
}

#[test]
fn missing_age_is_reported() {
    let mut app = app_with_policy(CommitPolicy::Messaging);
    fill_card(&mut app, "Sam", "Chess", "");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.mode(), Mode::Editable);
    assert_snapshot!(toast_text(&app).unwrap_or_default(), @"Please fill: Age");
}

#[test]
fn missing_name_and_hobby_are_reported() {
    let mut app = app_with_policy(CommitPolicy::Messaging);
    fill_card(&mut app, "", "", "5");
    press(&mut app, KeyCode::Enter);
    assert_snapshot!(toast_text(&app).unwrap_or_default(), @"Please fill: Name and Hobby");
}

#[test]
fn empty_card_reports_every_field() {
    let mut app = app_with_policy(CommitPolicy::Messaging);
    press(&mut app, KeyCode::Enter);
    assert_snapshot!(
        toast_text(&app).unwrap_or_default(),
        @"Please fill: Name, Hobby, and Age"
    );
}

#[test]
fn letters_typed_into_age_never_land() {
    let mut app = app_with_policy(CommitPolicy::Messaging);
    fill_card(&mut app, "Sam", "Chess", "2o5");
    assert_eq!(app.state().age(), "25");
}

#[test]
fn locked_card_ignores_typing_and_deletes() {
    let mut app = app_with_policy(CommitPolicy::Messaging);
    fill_card(&mut app, "Sam", "Chess", "30");
    press(&mut app, KeyCode::Enter);
    let before = app.snapshot();

    type_str(&mut app, "zzz");
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Delete);
    ctrl(&mut app, 'u');

    assert_eq!(app.snapshot(), before);
}

#[test]
fn toggle_chip_unlocks_and_relocks() {
    let mut app = app_with_policy(CommitPolicy::Messaging);
    fill_card(&mut app, "Sam", "Chess", "30");
    ctrl(&mut app, 't');
    assert_eq!(app.mode(), Mode::Locked);
    ctrl(&mut app, 't');
    assert_eq!(app.mode(), Mode::Editable);
    ctrl(&mut app, 't');
    assert_eq!(app.mode(), Mode::Locked);
}

#[test]
fn unlock_twice_matches_once() {
    let mut app = app_with_policy(CommitPolicy::Messaging);
    fill_card(&mut app, "Sam", "Chess", "30");
    press(&mut app, KeyCode::Enter);
    ctrl(&mut app, 'e');
    let once = app.snapshot();
    ctrl(&mut app, 'e');
    assert_eq!(app.snapshot(), once);
}
