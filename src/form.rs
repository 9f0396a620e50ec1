//! A group of validation fields with focus handling and password pairing.
//!
//! The form owns its fields and the companion relation between a password
//! field and its confirmation. Fields never hold references to each other:
//! whenever a field needs its companion's text, the form looks it up by
//! [`FieldId`] and passes it in.
//!
//! ```rust
//! use bubbletea_validation_field::field;
//! use bubbletea_validation_field::form;
//! use bubbletea_validation_field::validation::{FieldKind, ValidationResult};
//!
//! let mut form = form::new();
//! let pw = form.add_field(field::new(FieldKind::Password).with_title("Password"));
//! let confirm = form.add_field(field::new(FieldKind::ConfirmPassword).with_title("Confirm"));
//! form.set_companion(pw, confirm).unwrap();
//! assert_eq!(form.companion(confirm), Some(pw));
//!
//! form.set_text(pw, "secret").unwrap();
//! form.commit(pw).unwrap();
//! form.set_text(confirm, "secret").unwrap();
//! assert_eq!(form.field(confirm).unwrap().result(), ValidationResult::Valid);
//!
//! // Editing the password invalidates the confirmation.
//! form.set_text(pw, "secret!").unwrap();
//! assert_eq!(form.field(confirm).unwrap().value(), "");
//! assert_eq!(form.field(confirm).unwrap().result(), ValidationResult::Unset);
//! ```

use crate::error::FormError;
use crate::field::{
    FieldId, InputOutcome, Model as Field, TextChange, ValidationEvent, ValidationObserver,
};
use crate::key::{self, new_binding, with_help, with_keys_str, Binding};
use crate::validation::FieldKind;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use std::collections::HashMap;

/// Message delivered when one or more field results changed during an update.
#[derive(Debug, Clone)]
pub struct FormValidationMsg {
    /// The changes, in the order they happened.
    pub events: Vec<ValidationEvent>,
    /// Whether every field is valid after the changes.
    pub all_valid: bool,
}

impl From<FormValidationMsg> for Msg {
    fn from(msg: FormValidationMsg) -> Self {
        Box::new(msg) as Msg
    }
}

/// Focus navigation bindings.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Validate the current field and move to the next one.
    pub next_field: Binding,
    /// Validate the current field and move to the previous one.
    pub prev_field: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            next_field: new_binding(vec![with_keys_str(&["tab"]), with_help("tab", "next field")]),
            prev_field: new_binding(vec![
                with_keys_str(&["shift+tab"]),
                with_help("shift+tab", "previous field"),
            ]),
        }
    }
}

impl key::KeyMap for KeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.next_field, &self.prev_field]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![vec![&self.next_field, &self.prev_field]]
    }
}

/// An ordered set of fields plus the companion relation between them.
pub struct Model {
    /// Focus navigation bindings.
    pub key_map: KeyMap,
    fields: Vec<Field>,
    companions: HashMap<FieldId, FieldId>,
    focus: Option<usize>,
    observer: Option<Box<dyn ValidationObserver + Send>>,
    // Caret tick held back while a FormValidationMsg is in flight.
    deferred: Option<Cmd>,
}

/// Creates an empty form.
pub fn new() -> Model {
    Model {
        key_map: KeyMap::default(),
        fields: Vec::new(),
        companions: HashMap::new(),
        focus: None,
        observer: None,
        deferred: None,
    }
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

impl Model {
    /// Adds a field and returns the form, for chained construction.
    pub fn with_field(mut self, field: Field) -> Self {
        self.add_field(field);
        self
    }

    /// Registers an observer that sees every field's changes.
    pub fn with_observer<O>(mut self, observer: O) -> Self
    where
        O: ValidationObserver + Send + 'static,
    {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Registers an observer that sees every field's changes.
    pub fn set_observer<O>(&mut self, observer: O)
    where
        O: ValidationObserver + Send + 'static,
    {
        self.observer = Some(Box::new(observer));
    }

    /// Appends a field in focus order and returns its id.
    pub fn add_field(&mut self, field: Field) -> FieldId {
        let id = field.id();
        self.fields.push(field);
        id
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the form has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// All fields in focus order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Looks up a field.
    pub fn field(&self, id: FieldId) -> Option<&Field> {
        self.fields.iter().find(|f| f.id() == id)
    }

    /// Looks up a field for configuration.
    ///
    /// Editing text through the returned reference bypasses companion
    /// handling; use [`set_text`](Model::set_text) for that. Changing the
    /// kind here leaves the pairing recorded, but a pair stops counting as
    /// soon as either side is no longer a password kind; use
    /// [`set_kind`](Model::set_kind) to drop it outright.
    pub fn field_mut(&mut self, id: FieldId) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.id() == id)
    }

    fn index_of(&self, id: FieldId) -> Result<usize, FormError> {
        self.fields
            .iter()
            .position(|f| f.id() == id)
            .ok_or(FormError::UnknownField(id))
    }

    /// Pairs a password field with its confirmation.
    ///
    /// `b` is pointed back at `a` unless it is already paired with another
    /// field, in which case that earlier pairing is kept.
    ///
    /// # Errors
    ///
    /// Fails when either id is unknown, when `a == b`, or when either field is
    /// not a password or confirm-password field.
    pub fn set_companion(&mut self, a: FieldId, b: FieldId) -> Result<(), FormError> {
        if a == b {
            return Err(FormError::SelfCompanion(a));
        }
        for id in [a, b] {
            let kind = self.fields[self.index_of(id)?].kind();
            if !kind.is_secure() {
                return Err(FormError::CompanionKind { id, kind });
            }
        }

        if let Some(old) = self.companions.get(&a).copied() {
            if old != b && self.companions.get(&old) == Some(&a) {
                self.companions.remove(&old);
            }
        }
        self.companions.insert(a, b);

        match self.companions.get(&b).copied() {
            None => {
                self.companions.insert(b, a);
            }
            Some(existing) if existing != a => {
                tracing::debug!(field = %b, keeps = %existing, "companion already set");
            }
            Some(_) => {}
        }
        tracing::debug!(%a, %b, "companions linked");
        Ok(())
    }

    /// The field paired with `id`, if any.
    ///
    /// Pairs whose fields are no longer both password kinds are ignored.
    pub fn companion(&self, id: FieldId) -> Option<FieldId> {
        let other = self.companions.get(&id).copied()?;
        let secure = |f: FieldId| self.field(f).is_some_and(|f| f.kind().is_secure());
        (secure(id) && secure(other)).then_some(other)
    }

    /// Changes a field's kind, unpairing it when the new kind cannot have a
    /// companion.
    ///
    /// # Errors
    ///
    /// Fails when `id` is not part of the form.
    pub fn set_kind(
        &mut self,
        id: FieldId,
        kind: FieldKind,
    ) -> Result<Option<ValidationEvent>, FormError> {
        let idx = self.index_of(id)?;
        if !kind.is_secure() {
            self.unlink(id);
        }
        let event = self.fields[idx].set_kind(kind);
        self.notify(event.as_slice());
        Ok(event)
    }

    fn unlink(&mut self, id: FieldId) {
        if let Some(other) = self.companions.remove(&id) {
            tracing::debug!(field = %id, %other, "companion unlinked");
        }
        self.companions.retain(|_, to| *to != id);
    }

    fn companion_text(&self, id: FieldId) -> Option<String> {
        self.companion(id)
            .and_then(|c| self.field(c))
            .map(Field::value)
    }

    /// Replaces a field's text as if the user had typed it.
    ///
    /// Returns the result changes this caused, including the reset of a
    /// confirmation field when a password changes.
    ///
    /// # Errors
    ///
    /// Fails when `id` is not part of the form.
    pub fn set_text(&mut self, id: FieldId, text: &str) -> Result<Vec<ValidationEvent>, FormError> {
        let idx = self.index_of(id)?;
        let companion = self.companion_text(id);
        let change = self.fields[idx].on_text_changed(text, companion.as_deref());
        let events = self.settle(id, change);
        self.notify(&events);
        Ok(events)
    }

    /// Validates a field against its rule and, for confirmations, its companion.
    ///
    /// # Errors
    ///
    /// Fails when `id` is not part of the form.
    pub fn commit(&mut self, id: FieldId) -> Result<Option<ValidationEvent>, FormError> {
        let idx = self.index_of(id)?;
        let event = self.commit_index(idx);
        self.notify(event.as_slice());
        Ok(event)
    }

    fn commit_index(&mut self, idx: usize) -> Option<ValidationEvent> {
        let companion = self.companion_text(self.fields[idx].id());
        self.fields[idx].on_edit_committed(companion.as_deref())
    }

    // Applies the cross-field side effects of a text change.
    fn settle(&mut self, id: FieldId, change: TextChange) -> Vec<ValidationEvent> {
        let mut events: Vec<ValidationEvent> = change.event.into_iter().collect();
        if change.clear_companion {
            if let Some(other) = self.companion(id).and_then(|c| self.field_mut(c)) {
                events.extend(other.clear());
            }
        }
        events
    }

    fn notify(&mut self, events: &[ValidationEvent]) {
        if let Some(observer) = self.observer.as_mut() {
            for event in events {
                observer.on_validation_changed(event);
            }
        }
    }

    /// Whether the form has fields and every one of them is valid.
    pub fn all_valid(&self) -> bool {
        !self.fields.is_empty() && self.fields.iter().all(Field::is_valid)
    }

    /// The focused field.
    pub fn focused(&self) -> Option<FieldId> {
        self.focus.map(|i| self.fields[i].id())
    }

    /// Focuses a field, validating the one that loses focus.
    ///
    /// # Errors
    ///
    /// Fails when `id` is not part of the form.
    pub fn focus(&mut self, id: FieldId) -> Result<Option<Cmd>, FormError> {
        let idx = self.index_of(id)?;
        Ok(self.move_focus(Some(idx)))
    }

    /// Validates the focused field and moves to the next one, wrapping around.
    pub fn focus_next(&mut self) -> Option<Cmd> {
        if self.fields.is_empty() {
            return None;
        }
        let next = self.focus.map_or(0, |i| (i + 1) % self.fields.len());
        self.move_focus(Some(next))
    }

    /// Validates the focused field and moves to the previous one, wrapping around.
    pub fn focus_prev(&mut self) -> Option<Cmd> {
        if self.fields.is_empty() {
            return None;
        }
        let len = self.fields.len();
        let prev = self.focus.map_or(len - 1, |i| (i + len - 1) % len);
        self.move_focus(Some(prev))
    }

    /// Validates the focused field and leaves no field focused.
    pub fn blur(&mut self) -> Option<Cmd> {
        self.move_focus(None)
    }

    fn move_focus(&mut self, target: Option<usize>) -> Option<Cmd> {
        // A tick held for an earlier field is stale once focus moves again.
        self.deferred = None;
        let mut events = Vec::new();
        if let Some(current) = self.focus {
            if Some(current) != target {
                events.extend(self.commit_index(current));
                self.fields[current].blur();
            }
        }

        self.focus = target;
        let caret = target.and_then(|i| self.fields[i].focus());
        tracing::trace!(focused = ?self.focused(), "focus moved");
        self.finish(events, caret)
    }

    fn finish(&mut self, events: Vec<ValidationEvent>, follow_up: Option<Cmd>) -> Option<Cmd> {
        self.notify(&events);
        if events.is_empty() {
            return follow_up;
        }
        if follow_up.is_some() {
            self.deferred = follow_up;
        }
        let msg = FormValidationMsg {
            events,
            all_valid: self.all_valid(),
        };
        Some(Box::pin(async move { Some(Msg::from(msg)) }))
    }

    /// Routes a message to the form.
    ///
    /// Tab and shift+tab move focus; other keys go to the focused field, and
    /// the resulting edit or commit is applied with companion context. When
    /// results change, the returned command delivers a [`FormValidationMsg`].
    ///
    /// The host must pass every [`FormValidationMsg`] back into this method
    /// after inspecting it. A focus move that changed results holds the new
    /// field's caret tick until then; a host that swallows the message leaves
    /// the caret drawn but not blinking.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if msg.downcast_ref::<FormValidationMsg>().is_some() {
            return self.deferred.take();
        }

        let Some(idx) = self.focus else {
            return None;
        };

        let Some(key) = msg.downcast_ref::<KeyMsg>() else {
            return self.fields[idx].update(msg);
        };

        if key::matches_binding(key, &self.key_map.next_field) {
            return self.focus_next();
        }
        if key::matches_binding(key, &self.key_map.prev_field) {
            return self.focus_prev();
        }

        let id = self.fields[idx].id();
        let events = match self.fields[idx].handle_key(key) {
            InputOutcome::Edited => {
                let companion = self.companion_text(id);
                let change = self.fields[idx].apply_text_change(companion.as_deref());
                self.settle(id, change)
            }
            InputOutcome::Committed => self.commit_index(idx).into_iter().collect(),
            InputOutcome::Moved | InputOutcome::Ignored => Vec::new(),
        };
        self.finish(events, None)
    }

    /// Renders all fields, top to bottom.
    pub fn view(&self) -> String {
        self.fields
            .iter()
            .map(Field::view)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field;
    use crate::validation::{FieldKind, ValidationResult};
    use crossterm::event::{KeyCode, KeyModifiers};
    use proptest::prelude::*;
    use std::sync::{Arc, Mutex};

    fn key(code: KeyCode) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn type_str(form: &mut Model, s: &str) {
        for ch in s.chars() {
            let _ = form.update(key(KeyCode::Char(ch)));
        }
    }

    fn password_pair() -> (Model, FieldId, FieldId) {
        let mut form = new();
        let pw = form.add_field(field::new(FieldKind::Password));
        let confirm = form.add_field(field::new(FieldKind::ConfirmPassword));
        (form, pw, confirm)
    }

    #[test]
    fn test_companion_is_symmetric() {
        let (mut form, pw, confirm) = password_pair();
        form.set_companion(confirm, pw).unwrap();
        assert_eq!(form.companion(confirm), Some(pw));
        assert_eq!(form.companion(pw), Some(confirm));
    }

    #[test]
    fn test_first_companion_wins() {
        let (mut form, pw, confirm) = password_pair();
        let other = form.add_field(field::new(FieldKind::ConfirmPassword));
        form.set_companion(pw, confirm).unwrap();
        form.set_companion(other, pw).unwrap();

        assert_eq!(form.companion(other), Some(pw));
        assert_eq!(form.companion(pw), Some(confirm));
        assert_eq!(form.companion(confirm), Some(pw));
    }

    #[test]
    fn test_repointing_drops_stale_back_link() {
        let (mut form, pw, confirm) = password_pair();
        let other = form.add_field(field::new(FieldKind::ConfirmPassword));
        form.set_companion(pw, confirm).unwrap();
        form.set_companion(pw, other).unwrap();

        assert_eq!(form.companion(pw), Some(other));
        assert_eq!(form.companion(other), Some(pw));
        assert_eq!(form.companion(confirm), None);
    }

    #[test]
    fn test_companion_errors() {
        let (mut form, pw, _) = password_pair();
        let name = form.add_field(field::new(FieldKind::Name));
        let stranger = field::new(FieldKind::Password).id();

        assert_eq!(form.set_companion(pw, pw), Err(FormError::SelfCompanion(pw)));
        assert_eq!(
            form.set_companion(pw, stranger),
            Err(FormError::UnknownField(stranger))
        );
        assert_eq!(
            form.set_companion(pw, name),
            Err(FormError::CompanionKind {
                id: name,
                kind: FieldKind::Name
            })
        );
        assert_eq!(form.companion(pw), None);
    }

    #[test]
    fn test_password_edit_clears_confirmation() {
        let (mut form, pw, confirm) = password_pair();
        form.set_companion(pw, confirm).unwrap();

        form.set_text(pw, "secret").unwrap();
        form.commit(pw).unwrap();
        form.set_text(confirm, "secret").unwrap();
        form.commit(confirm).unwrap();
        assert!(form.all_valid());

        let events = form.set_text(pw, "secret2").unwrap();
        let confirm_field = form.field(confirm).unwrap();
        assert_eq!(confirm_field.value(), "");
        assert_eq!(confirm_field.result(), ValidationResult::Unset);
        assert!(events.iter().any(|e| e.field == confirm && !e.is_valid));
        assert!(!form.all_valid());
    }

    #[test]
    fn test_confirmation_against_companion() {
        let (mut form, pw, confirm) = password_pair();
        form.set_companion(pw, confirm).unwrap();
        form.set_text(pw, "secret").unwrap();

        form.set_text(confirm, "secreT").unwrap();
        assert_eq!(form.field(confirm).unwrap().result(), ValidationResult::Unset);
        form.commit(confirm).unwrap();
        assert_eq!(form.field(confirm).unwrap().result(), ValidationResult::Invalid);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let mut form = new();
        let stranger = field::new(FieldKind::Name).id();
        assert_eq!(
            form.set_text(stranger, "x"),
            Err(FormError::UnknownField(stranger))
        );
        assert!(form.commit(stranger).is_err());
        assert!(form.focus(stranger).is_err());
    }

    #[test]
    fn test_focus_cycles_and_commits() {
        let mut form = new()
            .with_field(field::new(FieldKind::Name))
            .with_field(field::new(FieldKind::Email));
        let name = form.fields()[0].id();
        let email = form.fields()[1].id();

        let _ = form.focus_next();
        assert_eq!(form.focused(), Some(name));
        type_str(&mut form, "Jane");
        assert_eq!(form.field(name).unwrap().value(), "Jane");

        let cmd = form.update(key(KeyCode::Tab));
        assert!(cmd.is_some());
        assert_eq!(form.focused(), Some(email));
        assert!(form.field(name).unwrap().is_valid());
        assert!(!form.field(name).unwrap().focused());

        let _ = form.update(Box::new(KeyMsg {
            key: KeyCode::BackTab,
            modifiers: KeyModifiers::SHIFT,
        }));
        assert_eq!(form.focused(), Some(name));

        let _ = form.focus_prev();
        assert_eq!(form.focused(), Some(email));
        let _ = form.blur();
        assert_eq!(form.focused(), None);
    }

    #[test]
    fn test_keys_ignored_without_focus() {
        let mut form = new().with_field(field::new(FieldKind::Name));
        assert!(form.update(key(KeyCode::Char('a'))).is_none());
        assert_eq!(form.fields()[0].value(), "");
    }

    #[test]
    fn test_typing_in_confirmation_validates_live() {
        let (mut form, pw, confirm) = password_pair();
        form.set_companion(pw, confirm).unwrap();
        form.set_text(pw, "abc123").unwrap();
        form.focus(confirm).unwrap();

        type_str(&mut form, "abc12");
        assert_eq!(form.field(confirm).unwrap().result(), ValidationResult::Unset);
        let cmd = form.update(key(KeyCode::Char('3')));
        assert!(cmd.is_some());
        assert_eq!(form.field(confirm).unwrap().result(), ValidationResult::Valid);
    }

    #[tokio::test]
    async fn test_update_delivers_form_validation_msg() {
        let mut form = new().with_field(field::new(FieldKind::Email));
        let _ = form.focus_next();
        type_str(&mut form, "jane@example.com");

        let cmd = form.update(key(KeyCode::Enter)).expect("result changed");
        let msg = cmd.await.expect("message");
        let form_msg = msg
            .downcast_ref::<FormValidationMsg>()
            .cloned()
            .expect("form validation msg");
        assert_eq!(form_msg.events.len(), 1);
        assert!(form_msg.events[0].is_valid);
        assert!(form_msg.all_valid);

        // Nothing was deferred by a plain commit.
        assert!(form.update(msg).is_none());
    }

    #[tokio::test]
    async fn test_focus_change_defers_caret_tick() {
        let mut form = new()
            .with_field(field::new(FieldKind::Name))
            .with_field(field::new(FieldKind::Name));
        let _ = form.focus_next();
        type_str(&mut form, "Jane");

        let cmd = form.focus_next().expect("commit reported");
        let msg = cmd.await.expect("message");
        assert!(msg.downcast_ref::<FormValidationMsg>().is_some());
        assert!(form.update(msg).is_some(), "caret tick handed back");
    }

    #[tokio::test]
    async fn test_later_focus_move_drops_stale_caret_tick() {
        let mut form = new()
            .with_field(field::new(FieldKind::Name))
            .with_field(field::new(FieldKind::Name))
            .with_field(field::new(FieldKind::Name));
        let _ = form.focus_next();
        type_str(&mut form, "Jane");

        let msg = form.focus_next().expect("commit reported").await.expect("message");
        // Leaving the empty second field changes nothing, so its tick comes back directly.
        assert!(form.focus_next().is_some());
        assert!(form.update(msg).is_none(), "held tick was for a field no longer focused");
    }

    #[test]
    fn test_set_kind_unpairs_when_no_longer_secure() {
        let (mut form, pw, confirm) = password_pair();
        form.set_companion(pw, confirm).unwrap();

        form.set_kind(confirm, FieldKind::Password).unwrap();
        assert_eq!(form.companion(pw), Some(confirm));

        form.set_kind(confirm, FieldKind::Email).unwrap();
        assert_eq!(form.companion(pw), None);
        assert_eq!(form.companion(confirm), None);

        form.set_text(confirm, "jane@example.com").unwrap();
        form.set_text(pw, "secret").unwrap();
        assert_eq!(form.field(confirm).unwrap().value(), "jane@example.com");

        form.set_kind(confirm, FieldKind::ConfirmPassword).unwrap();
        assert_eq!(form.companion(pw), None, "pairing is not restored");
    }

    #[test]
    fn test_kind_change_through_field_mut_suspends_pairing() {
        let (mut form, pw, confirm) = password_pair();
        form.set_companion(pw, confirm).unwrap();
        form.set_text(confirm, "keep me").unwrap();

        let _ = form.field_mut(confirm).unwrap().set_kind(FieldKind::Name);
        assert_eq!(form.companion(pw), None);
        form.set_text(pw, "secret").unwrap();
        assert_eq!(form.field(confirm).unwrap().value(), "keep me");
    }

    #[test]
    fn test_set_kind_unknown_field() {
        let mut form = new();
        let stranger = field::new(FieldKind::Name).id();
        assert_eq!(
            form.set_kind(stranger, FieldKind::Email),
            Err(FormError::UnknownField(stranger))
        );
    }

    #[test]
    fn test_form_observer() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let (form, pw, confirm) = password_pair();
        let mut form = form.with_observer(move |e: &ValidationEvent| {
            sink.lock().unwrap().push((e.field, e.result));
        });
        form.set_companion(pw, confirm).unwrap();

        form.set_text(pw, "secret").unwrap();
        form.set_text(confirm, "secret").unwrap();
        form.set_text(pw, "other").unwrap();

        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                (confirm, ValidationResult::Valid),
                (confirm, ValidationResult::Unset),
            ]
        );
    }

    #[test]
    fn test_all_valid_requires_fields() {
        assert!(!new().all_valid());
    }

    #[test]
    fn test_view_stacks_fields() {
        let form = new()
            .with_field(field::new(FieldKind::Name).with_title("First"))
            .with_field(field::new(FieldKind::Name).with_title("Last"));
        let view = lipgloss_extras::lipgloss::strip_ansi(&form.view());
        let first = view.find("First").expect("first title");
        let last = view.find("Last").expect("last title");
        assert!(first < last);
    }

    proptest! {
        #[test]
        fn prop_fresh_pairs_are_symmetric(a_is_password in any::<bool>(), b_is_password in any::<bool>()) {
            let kind = |p: bool| if p { FieldKind::Password } else { FieldKind::ConfirmPassword };
            let mut form = new();
            let a = form.add_field(field::new(kind(a_is_password)));
            let b = form.add_field(field::new(kind(b_is_password)));
            prop_assert!(form.set_companion(a, b).is_ok());
            prop_assert_eq!(form.companion(a), Some(b));
            prop_assert_eq!(form.companion(b), Some(a));
        }

        #[test]
        fn prop_password_edit_always_resets_confirmation(first in ".{0,12}", second in ".{0,12}") {
            let (mut form, pw, confirm) = password_pair();
            form.set_companion(pw, confirm).unwrap();
            form.set_text(pw, &first).unwrap();
            form.set_text(confirm, &first).unwrap();
            form.set_text(pw, &second).unwrap();
            let c = form.field(confirm).unwrap();
            prop_assert_eq!(c.value(), "");
            prop_assert_eq!(c.result(), ValidationResult::Unset);
        }
    }
}
