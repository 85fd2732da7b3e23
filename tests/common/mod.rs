//! Shared test utilities and fixtures
//!
//! Drive an [`App`] through the same key handler the terminal uses.

#![allow(dead_code)]

use std::time::Duration;

use cardfolio_engine::{App, CommitPolicy, ResolvedSettings, UiOptions};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn app_with_policy(policy: CommitPolicy) -> App {
    App::new(&ResolvedSettings {
        commit_policy: policy,
        notice_ttl: Duration::from_secs(5),
        ui_options: UiOptions::default(),
    })
}

pub fn press(app: &mut App, code: KeyCode) {
    cardfolio_tui::handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

pub fn ctrl(app: &mut App, c: char) {
    cardfolio_tui::handle_key(app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
}

pub fn type_str(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Type into Name, Hobby, and Age in order, starting from the Name field.
pub fn fill_card(app: &mut App, name: &str, hobby: &str, age: &str) {
    type_str(app, name);
    press(app, KeyCode::Tab);
    type_str(app, hobby);
    press(app, KeyCode::Tab);
    type_str(app, age);
    press(app, KeyCode::Tab);
}

pub fn toast_text(app: &App) -> Option<String> {
    app.toast().map(|toast| toast.text())
}
