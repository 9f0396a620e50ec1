//! The validation field model and its configuration.

use super::keymap::{default_key_map, KeyMap};
use super::style::Styles;
use super::types::{FieldId, ValidationObserver};
use crate::cursor::{new as cursor_new, Model as Cursor};
use crate::error::ConfigError;
use crate::validation::{FieldKind, Rules, ValidationResult};
use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};

/// A labeled single-line input that validates itself.
///
/// The model keeps the text, the tri-state [`ValidationResult`] and the
/// configuration of one field. Rendering is derived from the result on every
/// [`view`](Model::view), so colors, icon and error message always agree with
/// the stored verdict.
///
/// # Examples
///
/// ```rust
/// use bubbletea_validation_field::field::new;
/// use bubbletea_validation_field::validation::{FieldKind, ValidationResult};
///
/// let mut email = new(FieldKind::Email).with_title("Email");
/// email.on_text_changed("jane@example.com", None);
/// email.on_edit_committed(None);
/// assert_eq!(email.result(), ValidationResult::Valid);
/// ```
pub struct Model {
    /// Label shown above the input.
    pub title: String,
    /// Text shown while the input is empty.
    pub placeholder: String,
    /// Colors, icons and text styles.
    pub styles: Styles,
    /// Key bindings.
    pub key_map: KeyMap,
    /// The caret.
    pub cursor: Cursor,
    /// Inner width of the input box in cells. 0 sizes the box to its content.
    pub width: usize,
    /// Mask character for password kinds.
    pub echo_character: char,

    pub(super) id: FieldId,
    pub(super) kind: FieldKind,
    pub(super) rules: Rules,
    pub(super) error_message: Option<String>,
    pub(super) hide_error: bool,
    pub(super) result: ValidationResult,
    pub(super) value: Vec<char>,
    pub(super) pos: usize,
    pub(super) focus: bool,
    pub(super) observer: Option<Box<dyn ValidationObserver + Send>>,
}

/// Creates an unfocused field of the given kind with default settings.
pub fn new(kind: FieldKind) -> Model {
    Model {
        title: String::new(),
        placeholder: String::new(),
        styles: Styles::default(),
        key_map: default_key_map(),
        cursor: cursor_new(),
        width: 24,
        echo_character: '•',
        id: FieldId::next(),
        kind,
        rules: Rules::default(),
        error_message: None,
        hide_error: false,
        result: ValidationResult::Unset,
        value: Vec::new(),
        pos: 0,
        focus: false,
        observer: None,
    }
}

/// Creates a field from an integer mode code (`0` name, `1` email, `2`
/// password, `3` confirm password).
///
/// # Errors
///
/// Returns [`ConfigError::UnknownFieldKind`] for any other code.
pub fn from_mode(code: i32) -> Result<Model, ConfigError> {
    Ok(new(FieldKind::try_from(code)?))
}

impl Default for Model {
    fn default() -> Self {
        new(FieldKind::default())
    }
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("title", &self.title)
            .field("result", &self.result)
            .field("focus", &self.focus)
            .finish_non_exhaustive()
    }
}

impl Model {
    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the placeholder.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Overrides the kind's default error message.
    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    /// Sets the minimum password length.
    pub fn with_min_password_length(mut self, len: usize) -> Self {
        self.rules.min_password_length = len;
        self
    }

    /// Replaces the validation parameters.
    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    /// Sets the input width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Replaces the styles.
    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    /// Keeps the error message hidden.
    pub fn with_hidden_error(mut self) -> Self {
        self.hide_error = true;
        self
    }

    /// Registers the observer notified whenever the result changes.
    pub fn with_observer<O>(mut self, observer: O) -> Self
    where
        O: ValidationObserver + Send + 'static,
    {
        self.observer = Some(Box::new(observer));
        self
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        let mut model = Model::default();
        let cmd = model.focus();
        (model, cmd)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
