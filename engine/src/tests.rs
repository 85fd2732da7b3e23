//! Unit tests for the engine crate.

use std::time::{Duration, Instant};

use super::*;

fn test_app(policy: CommitPolicy) -> App {
    App::new(&ResolvedSettings {
        commit_policy: policy,
        notice_ttl: Duration::from_millis(500),
        ui_options: UiOptions::default(),
    })
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.insert_char(c);
    }
}

fn fill(app: &mut App, name: &str, hobby: &str, age: &str) {
    app.focus_field(Field::Name);
    type_text(app, name);
    app.focus_field(Field::Hobby);
    type_text(app, hobby);
    app.focus_field(Field::Age);
    type_text(app, age);
}

fn toast_text(app: &App) -> Option<String> {
    app.toast().map(Toast::text)
}

#[test]
fn starts_on_name_with_empty_form() {
    let app = App::default();
    assert_eq!(app.focus(), Field::Name);
    assert_eq!(app.cursor(), 0);
    assert_eq!(app.mode(), Mode::Editable);
    assert!(app.toast().is_none());
    assert!(!app.should_quit());
}

#[test]
fn typing_fills_focused_field() {
    let mut app = App::default();
    type_text(&mut app, "Sam");
    assert_eq!(app.state().name(), "Sam");
    assert_eq!(app.cursor(), 3);
}

#[test]
fn rejected_age_keystroke_keeps_cursor_and_value() {
    let mut app = App::default();
    app.focus_field(Field::Age);
    type_text(&mut app, "4");
    assert!(!app.insert_char('x'));
    assert_eq!(app.state().age(), "4");
    assert_eq!(app.cursor(), 1);
    assert!(app.insert_char('2'));
    assert_eq!(app.state().age(), "42");
}

#[test]
fn pasting_mixed_text_into_age_is_rejected_whole() {
    let mut app = App::default();
    app.focus_field(Field::Age);
    assert!(!app.insert_text("3 years"));
    assert_eq!(app.state().age(), "");
}

#[test]
fn cursor_editing_in_middle() {
    let mut app = App::default();
    type_text(&mut app, "Sm");
    app.move_cursor_left();
    app.insert_char('a');
    assert_eq!(app.state().name(), "Sam");
    assert_eq!(app.cursor(), 2);

    app.move_cursor_home();
    assert!(app.delete_char_forward());
    assert_eq!(app.state().name(), "am");
    assert_eq!(app.cursor(), 0);
    assert!(!app.delete_char());

    app.move_cursor_end();
    assert!(app.delete_char());
    assert_eq!(app.state().name(), "a");
}

#[test]
fn cursor_right_stops_at_end() {
    let mut app = App::default();
    type_text(&mut app, "ab");
    app.move_cursor_right();
    assert_eq!(app.cursor(), 2);
}

#[test]
fn focus_moves_cursor_to_end_of_field() {
    let mut app = App::default();
    fill(&mut app, "Sam", "Chess", "30");
    app.focus_next();
    assert_eq!(app.focus(), Field::Name);
    assert_eq!(app.cursor(), 3);
    app.focus_prev();
    assert_eq!(app.focus(), Field::Age);
    assert_eq!(app.cursor(), 2);
}

#[test]
fn incomplete_commit_shows_missing_fields() {
    let mut app = test_app(CommitPolicy::Messaging);
    fill(&mut app, "Sam", "Chess", "");
    app.commit();
    assert_eq!(app.mode(), Mode::Editable);
    assert_eq!(toast_text(&app).as_deref(), Some("Please fill: Age"));
}

#[test]
fn complete_commit_locks_and_confirms() {
    let mut app = test_app(CommitPolicy::Messaging);
    fill(&mut app, "Sam", "Chess", "30");
    app.commit();
    assert_eq!(app.mode(), Mode::Locked);
    assert_eq!(toast_text(&app).as_deref(), Some("Profile saved"));
}

#[test]
fn next_notice_replaces_previous() {
    let mut app = test_app(CommitPolicy::Messaging);
    app.commit();
    assert_eq!(
        toast_text(&app).as_deref(),
        Some("Please fill: Name, Hobby, and Age")
    );
    fill(&mut app, "Sam", "", "");
    app.commit();
    assert_eq!(
        toast_text(&app).as_deref(),
        Some("Please fill: Hobby and Age")
    );
}

#[test]
fn silent_policy_never_shows_toast() {
    let mut app = test_app(CommitPolicy::SilentGuard);
    app.commit();
    assert!(app.toast().is_none());
    fill(&mut app, "Sam", "Chess", "30");
    app.commit();
    assert_eq!(app.mode(), Mode::Locked);
    assert!(app.toast().is_none());
}

#[test]
fn locked_app_ignores_typing() {
    let mut app = test_app(CommitPolicy::Messaging);
    fill(&mut app, "Sam", "Chess", "30");
    app.commit();
    let before = app.snapshot();
    app.focus_field(Field::Name);
    assert!(!app.insert_char('!'));
    assert!(!app.delete_char());
    assert!(!app.clear_field());
    assert_eq!(app.snapshot(), before);
}

#[test]
fn unlock_then_edit_again() {
    let mut app = test_app(CommitPolicy::Messaging);
    fill(&mut app, "Sam", "Chess", "30");
    app.commit();
    app.unlock();
    assert_eq!(app.mode(), Mode::Editable);
    app.focus_field(Field::Hobby);
    assert!(app.clear_field());
    assert_eq!(app.state().hobby(), "");
    assert_eq!(app.cursor(), 0);
}

#[test]
fn toggle_mode_goes_through_commit() {
    let mut app = test_app(CommitPolicy::Messaging);
    app.toggle_mode();
    assert_eq!(app.mode(), Mode::Editable);
    fill(&mut app, "Sam", "Chess", "30");
    app.toggle_mode();
    assert_eq!(app.mode(), Mode::Locked);
    app.toggle_mode();
    assert_eq!(app.mode(), Mode::Editable);
}

#[test]
fn toast_expires_on_tick() {
    let mut app = test_app(CommitPolicy::Messaging);
    let now = Instant::now();
    app.handle_at(FormEvent::Commit, now);
    app.tick_at(now + Duration::from_millis(499));
    assert!(app.toast().is_some());
    app.tick_at(now + Duration::from_millis(500));
    assert!(app.toast().is_none());
}

#[test]
fn external_edit_event_moves_cursor_to_end() {
    let mut app = App::default();
    app.handle(FormEvent::Edit {
        field: Field::Name,
        text: "Grace".to_string(),
    });
    assert_eq!(app.state().name(), "Grace");
    assert_eq!(app.cursor(), 5);
}

#[test]
fn request_quit_sets_flag() {
    let mut app = App::default();
    app.request_quit();
    assert!(app.should_quit());
}
