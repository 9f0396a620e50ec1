//! Key bindings for the validation field.

use crate::key::{self, new_binding, with_help, with_keys_str, Binding};

/// Bindings for editing and committing a field.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Finish editing and validate.
    pub commit: Binding,
    /// Move one character right.
    pub character_forward: Binding,
    /// Move one character left.
    pub character_backward: Binding,
    /// Move one word right.
    pub word_forward: Binding,
    /// Move one word left.
    pub word_backward: Binding,
    /// Delete the word before the caret.
    pub delete_word_backward: Binding,
    /// Delete everything after the caret.
    pub delete_after_cursor: Binding,
    /// Delete everything before the caret.
    pub delete_before_cursor: Binding,
    /// Delete one character backward.
    pub delete_character_backward: Binding,
    /// Delete one character forward.
    pub delete_character_forward: Binding,
    /// Jump to the start of the text.
    pub line_start: Binding,
    /// Jump to the end of the text.
    pub line_end: Binding,
}

/// Default bindings.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        commit: new_binding(vec![with_keys_str(&["enter"]), with_help("enter", "validate")]),
        character_forward: new_binding(vec![with_keys_str(&["right", "ctrl+f"])]),
        character_backward: new_binding(vec![with_keys_str(&["left", "ctrl+b"])]),
        word_forward: new_binding(vec![with_keys_str(&["alt+right", "ctrl+right", "alt+f"])]),
        word_backward: new_binding(vec![with_keys_str(&["alt+left", "ctrl+left", "alt+b"])]),
        delete_word_backward: new_binding(vec![
            with_keys_str(&["alt+backspace", "ctrl+w"]),
            with_help("ctrl+w", "delete word"),
        ]),
        delete_after_cursor: new_binding(vec![with_keys_str(&["ctrl+k"])]),
        delete_before_cursor: new_binding(vec![
            with_keys_str(&["ctrl+u"]),
            with_help("ctrl+u", "clear"),
        ]),
        delete_character_backward: new_binding(vec![with_keys_str(&["backspace", "ctrl+h"])]),
        delete_character_forward: new_binding(vec![with_keys_str(&["delete", "ctrl+d"])]),
        line_start: new_binding(vec![with_keys_str(&["home", "ctrl+a"])]),
        line_end: new_binding(vec![with_keys_str(&["end", "ctrl+e"])]),
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        default_key_map()
    }
}

impl key::KeyMap for KeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.commit, &self.delete_before_cursor]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![&self.commit],
            vec![
                &self.delete_character_backward,
                &self.delete_word_backward,
                &self.delete_before_cursor,
                &self.delete_after_cursor,
            ],
            vec![
                &self.character_backward,
                &self.character_forward,
                &self.line_start,
                &self.line_end,
            ],
        ]
    }
}
