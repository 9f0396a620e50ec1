//! Identity, events and rendering directives for validation fields.

use crate::validation::ValidationResult;
use bubbletea_rs::{Cmd, Msg};
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

static LAST_ID: AtomicUsize = AtomicUsize::new(0);

/// Process-unique identity of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(usize);

impl FieldId {
    pub(crate) fn next() -> Self {
        FieldId(LAST_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw numeric id.
    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Reported whenever a field's validation result changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationEvent {
    /// The field whose result changed.
    pub field: FieldId,
    /// The new result.
    pub result: ValidationResult,
    /// `result == Valid`.
    pub is_valid: bool,
    /// Human-readable reason, present only when the result is `Invalid`.
    pub error_message: Option<String>,
}

/// Receives validation changes synchronously.
///
/// Implemented for every `FnMut(&ValidationEvent) + Send` closure.
pub trait ValidationObserver {
    /// Called after the field's result has changed.
    fn on_validation_changed(&mut self, event: &ValidationEvent);
}

impl<F> ValidationObserver for F
where
    F: FnMut(&ValidationEvent) + Send,
{
    fn on_validation_changed(&mut self, event: &ValidationEvent) {
        self(event)
    }
}

/// Message delivered to the program when a field's result changes during `update`.
#[derive(Debug, Clone)]
pub struct ValidationMsg(pub ValidationEvent);

impl From<ValidationMsg> for Msg {
    fn from(msg: ValidationMsg) -> Self {
        Box::new(msg) as Msg
    }
}

pub(crate) fn validation_cmd(event: ValidationEvent) -> Cmd {
    Box::pin(async move { Some(Msg::from(ValidationMsg(event))) })
}

/// Which status icon sits next to the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusIcon {
    /// No icon.
    #[default]
    None,
    /// The "valid" icon.
    Valid,
    /// The "invalid" icon.
    Invalid,
}

/// Everything the host needs to draw a field in its current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appearance {
    /// Foreground color of the typed text.
    pub text_color: String,
    /// Color of the input border.
    pub border_color: String,
    /// Background color of the input. Empty means the terminal default.
    pub background_color: String,
    /// Icon next to the input.
    pub icon: StatusIcon,
    /// Whether the error message is shown.
    pub error_visible: bool,
}

/// What a key press did to the field's editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// The key is not bound to anything.
    Ignored,
    /// The caret moved; the text is unchanged.
    Moved,
    /// The text changed.
    Edited,
    /// The user finished editing.
    Committed,
}

/// Result of applying a text change.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextChange {
    /// Emitted when the change moved the field's result.
    pub event: Option<ValidationEvent>,
    /// A password changed, so any confirmation paired with it is stale.
    pub clear_companion: bool,
}
