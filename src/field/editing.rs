//! Single-line editing: caret movement and deletion.
//!
//! These methods only touch the text buffer and caret. Deciding what an edit
//! means for the validation result is left to the callers in `methods.rs`
//! and the form, which know about companion fields.

use super::model::Model;
use super::types::InputOutcome;
use crate::key::matches_binding;
use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

#[derive(Debug, Clone, Copy)]
enum Action {
    Commit,
    DeleteWordBackward,
    DeleteCharBackward,
    DeleteCharForward,
    DeleteAfterCursor,
    DeleteBeforeCursor,
    WordBackward,
    CharBackward,
    WordForward,
    CharForward,
    LineStart,
    LineEnd,
}

impl Model {
    fn action_for(&self, msg: &KeyMsg) -> Option<Action> {
        let km = &self.key_map;
        let table = [
            (&km.commit, Action::Commit),
            (&km.delete_word_backward, Action::DeleteWordBackward),
            (&km.delete_character_backward, Action::DeleteCharBackward),
            (&km.delete_character_forward, Action::DeleteCharForward),
            (&km.delete_after_cursor, Action::DeleteAfterCursor),
            (&km.delete_before_cursor, Action::DeleteBeforeCursor),
            (&km.word_backward, Action::WordBackward),
            (&km.character_backward, Action::CharBackward),
            (&km.word_forward, Action::WordForward),
            (&km.character_forward, Action::CharForward),
            (&km.line_start, Action::LineStart),
            (&km.line_end, Action::LineEnd),
        ];
        table
            .into_iter()
            .find(|(binding, _)| matches_binding(msg, binding))
            .map(|(_, action)| action)
    }

    /// Applies a key press to the editor without validating.
    ///
    /// Returns what kind of change happened so the caller can run the
    /// text-changed or edit-committed handling.
    pub fn handle_key(&mut self, msg: &KeyMsg) -> InputOutcome {
        let edited = match self.action_for(msg) {
            Some(Action::Commit) => return InputOutcome::Committed,
            Some(Action::DeleteWordBackward) => self.delete_word_backward(),
            Some(Action::DeleteCharBackward) => self.delete_char_backward(),
            Some(Action::DeleteCharForward) => self.delete_char_forward(),
            Some(Action::DeleteAfterCursor) => self.delete_after_cursor(),
            Some(Action::DeleteBeforeCursor) => self.delete_before_cursor(),
            Some(movement) => {
                self.move_caret(movement);
                return InputOutcome::Moved;
            }
            None => match msg.key {
                // Shift is already folded into the character.
                KeyCode::Char(ch)
                    if !msg
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    self.insert_char(ch);
                    true
                }
                _ => false,
            },
        };

        if edited {
            tracing::trace!(field = %self.id, len = self.value.len(), "edited");
            InputOutcome::Edited
        } else {
            InputOutcome::Ignored
        }
    }

    fn move_caret(&mut self, action: Action) {
        match action {
            Action::WordBackward => self.word_backward(),
            Action::CharBackward => self.pos = self.pos.saturating_sub(1),
            Action::WordForward => self.word_forward(),
            Action::CharForward => self.pos = (self.pos + 1).min(self.value.len()),
            Action::LineStart => self.pos = 0,
            Action::LineEnd => self.pos = self.value.len(),
            _ => {}
        }
    }

    pub(super) fn insert_char(&mut self, ch: char) {
        self.value.insert(self.pos, ch);
        self.pos += 1;
    }

    pub(super) fn set_value_chars(&mut self, text: &str) {
        self.value = text.chars().collect();
        self.pos = self.value.len();
    }

    fn delete_char_backward(&mut self) -> bool {
        if self.pos == 0 {
            return false;
        }
        self.pos -= 1;
        self.value.remove(self.pos);
        true
    }

    fn delete_char_forward(&mut self) -> bool {
        if self.pos >= self.value.len() {
            return false;
        }
        self.value.remove(self.pos);
        true
    }

    fn delete_before_cursor(&mut self) -> bool {
        if self.pos == 0 {
            return false;
        }
        self.value.drain(..self.pos);
        self.pos = 0;
        true
    }

    fn delete_after_cursor(&mut self) -> bool {
        if self.pos >= self.value.len() {
            return false;
        }
        self.value.truncate(self.pos);
        true
    }

    // Masked input hides word boundaries, so word deletion clears to the start.
    fn delete_word_backward(&mut self) -> bool {
        if self.pos == 0 {
            return false;
        }
        if self.kind.is_secure() {
            return self.delete_before_cursor();
        }

        let end = self.pos;
        let mut start = end;
        while start > 0 && self.value[start - 1].is_whitespace() {
            start -= 1;
        }
        while start > 0 && !self.value[start - 1].is_whitespace() {
            start -= 1;
        }
        self.value.drain(start..end);
        self.pos = start;
        true
    }

    fn word_backward(&mut self) {
        if self.kind.is_secure() {
            self.pos = 0;
            return;
        }
        while self.pos > 0 && self.value[self.pos - 1].is_whitespace() {
            self.pos -= 1;
        }
        while self.pos > 0 && !self.value[self.pos - 1].is_whitespace() {
            self.pos -= 1;
        }
    }

    fn word_forward(&mut self) {
        if self.kind.is_secure() {
            self.pos = self.value.len();
            return;
        }
        while self.pos < self.value.len() && self.value[self.pos].is_whitespace() {
            self.pos += 1;
        }
        while self.pos < self.value.len() && !self.value[self.pos].is_whitespace() {
            self.pos += 1;
        }
    }
}
