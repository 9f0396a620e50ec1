//! Validation state handling for the field model.

use super::model::Model;
use super::types::{
    validation_cmd, Appearance, FieldId, InputOutcome, TextChange, ValidationEvent,
    ValidationObserver,
};
use crate::error::ConfigError;
use crate::validation::{FieldKind, Rules, ValidationResult};
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};

impl Model {
    /// The field's identity.
    pub fn id(&self) -> FieldId {
        self.id
    }

    /// The rule this field is checked against.
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Changes the field kind. The previous verdict no longer applies, so the
    /// result is reset to `Unset`.
    pub fn set_kind(&mut self, kind: FieldKind) -> Option<ValidationEvent> {
        self.kind = kind;
        self.set_result(ValidationResult::Unset)
    }

    /// Changes the field kind from an integer mode code.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownFieldKind`] for codes outside `0..=3`;
    /// the field is left untouched.
    pub fn set_mode(&mut self, code: i32) -> Result<Option<ValidationEvent>, ConfigError> {
        let kind = FieldKind::try_from(code)?;
        Ok(self.set_kind(kind))
    }

    /// Current text.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Caret position as a character index.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Current validation result.
    pub fn result(&self) -> ValidationResult {
        self.result
    }

    /// `true` only when the result is `Valid`.
    pub fn is_valid(&self) -> bool {
        self.result.is_valid()
    }

    /// Validation parameters.
    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// Replaces the validation parameters. Takes effect at the next validation.
    pub fn set_rules(&mut self, rules: Rules) {
        self.rules = rules;
    }

    /// Shortest accepted password.
    pub fn min_password_length(&self) -> usize {
        self.rules.min_password_length
    }

    /// Sets the shortest accepted password. Takes effect at the next validation.
    pub fn set_min_password_length(&mut self, len: usize) {
        self.rules.min_password_length = len;
    }

    /// The message shown when the field is invalid.
    pub fn error_message(&self) -> String {
        match &self.error_message {
            Some(message) => message.clone(),
            None => self.kind.default_error_message(self.rules.min_password_length),
        }
    }

    /// Overrides the error message. `None` restores the kind's default.
    pub fn set_error_message(&mut self, message: Option<String>) {
        self.error_message = message;
    }

    /// Whether the error message is suppressed.
    pub fn hide_error(&self) -> bool {
        self.hide_error
    }

    /// Suppresses or restores the error message.
    pub fn set_hide_error(&mut self, hide: bool) {
        self.hide_error = hide;
    }

    /// Registers the observer notified whenever the result changes.
    pub fn set_observer<O>(&mut self, observer: O)
    where
        O: ValidationObserver + Send + 'static,
    {
        self.observer = Some(Box::new(observer));
    }

    /// Removes the observer.
    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    /// The rendering directive for the current result.
    pub fn appearance(&self) -> Appearance {
        self.styles.appearance(self.result, self.hide_error)
    }

    /// Snapshot of the current result as an observer event.
    pub fn event(&self) -> ValidationEvent {
        ValidationEvent {
            field: self.id,
            result: self.result,
            is_valid: self.result.is_valid(),
            error_message: self
                .result
                .is_invalid()
                .then(|| self.error_message()),
        }
    }

    /// Replaces the text as if the user had typed it.
    ///
    /// The field drops back to its neutral look. A confirmation field is
    /// checked against `companion` right away and turns valid as soon as the
    /// two match; every other kind waits for [`on_edit_committed`].
    ///
    /// [`on_edit_committed`]: Model::on_edit_committed
    pub fn on_text_changed(&mut self, text: &str, companion: Option<&str>) -> TextChange {
        self.set_value_chars(text);
        self.apply_text_change(companion)
    }

    /// Runs the text-changed handling for the text already in the editor.
    pub fn apply_text_change(&mut self, companion: Option<&str>) -> TextChange {
        let next = match self.kind {
            FieldKind::ConfirmPassword => {
                match self.rules.validate(self.kind, &self.value(), companion) {
                    ValidationResult::Valid => ValidationResult::Valid,
                    _ => ValidationResult::Unset,
                }
            }
            _ => ValidationResult::Unset,
        };
        TextChange {
            event: self.set_result(next),
            clear_companion: self.kind == FieldKind::Password,
        }
    }

    /// Validates the current text and stores the verdict.
    pub fn on_edit_committed(&mut self, companion: Option<&str>) -> Option<ValidationEvent> {
        let verdict = self.rules.validate(self.kind, &self.value(), companion);
        tracing::trace!(field = %self.id, kind = %self.kind, %verdict, "edit committed");
        self.set_result(verdict)
    }

    /// Stores a result and notifies the observer when it changed.
    ///
    /// Colors, icon and error visibility follow from the stored result, so
    /// they always change together.
    pub fn set_result(&mut self, result: ValidationResult) -> Option<ValidationEvent> {
        if self.result == result {
            return None;
        }
        tracing::debug!(field = %self.id, kind = %self.kind, from = %self.result, to = %result, "validation changed");
        self.result = result;

        let event = self.event();
        if let Some(observer) = self.observer.as_mut() {
            observer.on_validation_changed(&event);
        }
        Some(event)
    }

    /// Empties the field and resets the result to `Unset`.
    pub fn clear(&mut self) -> Option<ValidationEvent> {
        self.value.clear();
        self.pos = 0;
        self.set_result(ValidationResult::Unset)
    }

    /// Whether the field accepts key input.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Gives the field keyboard focus and starts the caret.
    pub fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        self.cursor.focus()
    }

    /// Removes keyboard focus.
    ///
    /// Losing focus does not validate on its own: the owner decides, because
    /// a confirmation needs its companion's text. See [`crate::form`].
    pub fn blur(&mut self) {
        self.focus = false;
        self.cursor.blur();
    }

    /// Handles a message for a standalone field.
    ///
    /// Key presses edit the text; enter validates. A field inside a
    /// [`crate::form::Model`] is driven by the form instead, which supplies the
    /// companion's text. When the result changes, the returned command
    /// delivers a [`ValidationMsg`](super::ValidationMsg).
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if !self.focus {
            return None;
        }

        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            let event = match self.handle_key(key) {
                InputOutcome::Edited => self.apply_text_change(None).event,
                InputOutcome::Committed => self.on_edit_committed(None),
                InputOutcome::Moved | InputOutcome::Ignored => None,
            };
            return event.map(validation_cmd);
        }

        self.cursor.update(&msg)
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus()
    }

    fn blur(&mut self) {
        self.blur()
    }

    fn focused(&self) -> bool {
        self.focused()
    }
}
