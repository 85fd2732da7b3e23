//! Profile form controller.
//!
//! Owns the three profile fields and the editable/locked mode. All mutation
//! goes through [`ProfileForm`], which enforces:
//! - `age` only ever holds ASCII digits
//! - fields change only while the form is editable
//! - the form locks only when no field is blank

use serde::Serialize;
use tracing::{debug, info};

use cardfolio_types::{
    CommitPolicy, Field, MissingFields, Mode, Notice, is_blank, ui::placeholder, validate_age,
};

/// Read-only view of the form, handed to the presentation layer after every write.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormState {
    name: String,
    hobby: String,
    age: String,
    mode: Mode,
}

impl FormState {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn hobby(&self) -> &str {
        &self.hobby
    }

    #[must_use]
    pub fn age(&self) -> &str {
        &self.age
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Hobby => &self.hobby,
            Field::Age => &self.age,
        }
    }

    /// Blank fields in `[Name, Hobby, Age]` order.
    #[must_use]
    pub fn missing(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| is_blank(self.value(*field)))
            .collect()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        Field::ALL
            .into_iter()
            .all(|field| !is_blank(self.value(field)))
    }

    /// Header text for a field: its value, or the placeholder label when blank.
    #[must_use]
    pub fn display(&self, field: Field) -> &str {
        let value = self.value(field);
        if is_blank(value) {
            placeholder(field)
        } else {
            value
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Hobby => &mut self.hobby,
            Field::Age => &mut self.age,
        }
    }
}

/// Discrete inputs from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// Replace a field's text.
    Edit { field: Field, text: String },
    /// Save button.
    Commit,
    /// Edit button.
    Unlock,
    /// Mode chip: commits when editable, unlocks when locked.
    ToggleMode,
}

#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    state: FormState,
    policy: CommitPolicy,
}

impl ProfileForm {
    #[must_use]
    pub fn new(policy: CommitPolicy) -> Self {
        Self {
            state: FormState::default(),
            policy,
        }
    }

    #[must_use]
    pub fn policy(&self) -> CommitPolicy {
        self.policy
    }

    #[must_use]
    pub fn state(&self) -> &FormState {
        &self.state
    }

    #[must_use]
    pub fn snapshot(&self) -> FormState {
        self.state.clone()
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    /// Whether the save button should be enabled.
    #[must_use]
    pub fn can_commit(&self) -> bool {
        match self.policy {
            CommitPolicy::DisableWhenIncomplete => {
                self.state.mode.is_editable() && self.state.is_complete()
            }
            CommitPolicy::SilentGuard | CommitPolicy::Messaging => self.state.mode.is_editable(),
        }
    }

    /// Whether the edit button should be enabled.
    #[must_use]
    pub fn can_unlock(&self) -> bool {
        !self.state.mode.is_editable()
    }

    /// Apply one event. Returns the notice to show, if any.
    pub fn apply(&mut self, event: FormEvent) -> Option<Notice> {
        match event {
            FormEvent::Edit { field, text } => {
                self.set(field, text);
                None
            }
            FormEvent::Commit => self.commit(),
            FormEvent::Unlock => {
                self.unlock();
                None
            }
            FormEvent::ToggleMode => self.toggle_mode(),
        }
    }

    pub fn set_name(&mut self, text: impl Into<String>) -> bool {
        self.set(Field::Name, text)
    }

    pub fn set_hobby(&mut self, text: impl Into<String>) -> bool {
        self.set(Field::Hobby, text)
    }

    pub fn set_age(&mut self, text: impl Into<String>) -> bool {
        self.set(Field::Age, text)
    }

    /// Replace a field's text. Returns true if the edit was accepted.
    ///
    /// Ignored while locked; age edits containing a non-digit are dropped.
    pub fn set(&mut self, field: Field, text: impl Into<String>) -> bool {
        if !self.state.mode.is_editable() {
            debug!(?field, "Edit ignored: form is locked");
            return false;
        }
        let text = text.into();
        if field == Field::Age
            && let Err(err) = validate_age(&text)
        {
            debug!(%err, "Age edit rejected");
            return false;
        }
        *self.state.slot_mut(field) = text;
        true
    }

    /// Return to editable mode. No-op when already editable.
    pub fn unlock(&mut self) {
        if self.state.mode == Mode::Locked {
            self.state.mode = Mode::Editable;
            info!("Profile unlocked");
        }
    }

    /// Try to lock the form.
    ///
    /// Only the messaging policy produces notices; the silent policies lock a
    /// complete form and otherwise do nothing.
    pub fn commit(&mut self) -> Option<Notice> {
        if !self.state.mode.is_editable() {
            return None;
        }

        if let Some(missing) = MissingFields::new(self.state.missing()) {
            debug!(missing = %missing.summary(), policy = self.policy.as_str(), "Commit refused");
            return self
                .policy
                .reports()
                .then_some(Notice::Incomplete(missing));
        }

        self.state.mode = Mode::Locked;
        info!("Profile saved");
        self.policy.reports().then_some(Notice::Saved)
    }

    pub fn toggle_mode(&mut self) -> Option<Notice> {
        match self.state.mode {
            Mode::Editable => self.commit(),
            Mode::Locked => {
                self.unlock();
                None
            }
        }
    }
}
