//! Core engine for Cardfolio - form state machine and screen state.
//!
//! This crate contains the [`App`] state without TUI dependencies. The TUI
//! reads from it through accessors and writes through the editing and
//! transition methods; every write goes through [`ProfileForm`].

use std::time::{Duration, Instant};

use tracing::debug;

mod edit;
mod form;
mod toast;

pub use cardfolio_config::{CardfolioConfig, ConfigError, ResolvedSettings};
pub use cardfolio_types::{
    CommitPolicy, Field, MissingFields, Mode, Notice,
    ui::{AGE_HINT, UiOptions, placeholder},
};
pub use form::{FormEvent, FormState, ProfileForm};
pub use toast::Toast;

/// Screen state: the form plus focus, cursor, and the current toast.
#[derive(Debug)]
pub struct App {
    form: ProfileForm,
    focus: Field,
    /// Grapheme index into the focused field.
    cursor: usize,
    toast: Option<Toast>,
    notice_ttl: Duration,
    ui_options: UiOptions,
    should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new(&ResolvedSettings::default())
    }
}

impl App {
    #[must_use]
    pub fn new(settings: &ResolvedSettings) -> Self {
        debug!(
            policy = settings.commit_policy.as_str(),
            ttl_ms = settings.notice_ttl.as_millis() as u64,
            "Creating profile form"
        );
        Self {
            form: ProfileForm::new(settings.commit_policy),
            focus: Field::Name,
            cursor: 0,
            toast: None,
            notice_ttl: settings.notice_ttl,
            ui_options: settings.ui_options,
            should_quit: false,
        }
    }

    // ========================================================================
    // Read side
    // ========================================================================

    #[must_use]
    pub fn form(&self) -> &ProfileForm {
        &self.form
    }

    #[must_use]
    pub fn state(&self) -> &FormState {
        self.form.state()
    }

    #[must_use]
    pub fn snapshot(&self) -> FormState {
        self.form.snapshot()
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.form.mode()
    }

    #[must_use]
    pub fn focus(&self) -> Field {
        self.focus
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    fn focused_text(&self) -> &str {
        self.form.state().value(self.focus)
    }

    // ========================================================================
    // Focus and cursor
    // ========================================================================

    pub fn focus_field(&mut self, field: Field) {
        self.focus = field;
        self.cursor = edit::grapheme_count(self.focused_text());
    }

    pub fn focus_next(&mut self) {
        self.focus_field(self.focus.next());
    }

    pub fn focus_prev(&mut self) {
        self.focus_field(self.focus.prev());
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        let max = edit::grapheme_count(self.focused_text());
        self.cursor = self.cursor.saturating_add(1).min(max);
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = edit::grapheme_count(self.focused_text());
    }

    // ========================================================================
    // Editing
    // ========================================================================

    /// Submit a candidate value for the focused field; move the cursor only if accepted.
    fn submit_edit(&mut self, text: String, cursor: usize) -> bool {
        let accepted = self.form.set(self.focus, text);
        if accepted {
            self.cursor = cursor;
        }
        accepted
    }

    pub fn insert_char(&mut self, c: char) -> bool {
        let mut buf = [0; 4];
        self.insert_text(c.encode_utf8(&mut buf))
    }

    pub fn insert_text(&mut self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        let (candidate, cursor) = edit::insert_at(self.focused_text(), self.cursor, text);
        self.submit_edit(candidate, cursor)
    }

    /// Backspace.
    pub fn delete_char(&mut self) -> bool {
        match edit::remove_before(self.focused_text(), self.cursor) {
            Some((candidate, cursor)) => self.submit_edit(candidate, cursor),
            None => false,
        }
    }

    /// Delete.
    pub fn delete_char_forward(&mut self) -> bool {
        match edit::remove_at(self.focused_text(), self.cursor) {
            Some(candidate) => self.submit_edit(candidate, self.cursor),
            None => false,
        }
    }

    pub fn clear_field(&mut self) -> bool {
        self.submit_edit(String::new(), 0)
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Apply an event from the presentation layer, showing any resulting notice.
    pub fn handle(&mut self, event: FormEvent) {
        self.handle_at(event, Instant::now());
    }

    pub fn handle_at(&mut self, event: FormEvent, now: Instant) {
        let edited = match &event {
            FormEvent::Edit { field, .. } => Some(*field),
            _ => None,
        };
        if let Some(notice) = self.form.apply(event) {
            self.show(notice, now);
        }
        if edited == Some(self.focus) {
            self.move_cursor_end();
        }
    }

    pub fn commit(&mut self) {
        self.handle(FormEvent::Commit);
    }

    pub fn unlock(&mut self) {
        self.handle(FormEvent::Unlock);
    }

    pub fn toggle_mode(&mut self) {
        self.handle(FormEvent::ToggleMode);
    }

    fn show(&mut self, notice: Notice, now: Instant) {
        debug!(notice = %notice, "Showing notice");
        self.toast = Some(Toast::new(notice, now, self.notice_ttl));
    }

    /// Advance time: drop the toast once it has expired.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    pub fn tick_at(&mut self, now: Instant) {
        if self.toast.as_ref().is_some_and(|toast| toast.is_expired(now)) {
            self.toast = None;
        }
    }
}

#[cfg(test)]
mod tests;
