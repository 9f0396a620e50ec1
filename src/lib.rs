#![warn(missing_docs)]

//! # bubbletea-validation-field
//!
//! Self-validating text fields for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! applications.
//!
//! ## Overview
//!
//! A validation field is a labeled single-line input bound to one of four
//! kinds: name, email, password or password confirmation. It keeps a
//! tri-state result (`Valid`, `Invalid` or `Unset`) and renders text, border,
//! background, status icon and error message from that result alone, so the
//! pieces can never disagree.
//!
//! - Typing resets a field to `Unset`; a confirmation field turns `Valid` as
//!   soon as it matches its password.
//! - Pressing enter, or moving focus away inside a form, validates the field.
//! - Editing a password clears its paired confirmation.
//! - Observers hear about every change of result.
//!
//! ## Components
//!
//! - [`field`]: a single validation field.
//! - [`form`]: an ordered group of fields with focus navigation and
//!   password/confirmation pairing.
//! - [`validation`]: the rules themselves, usable without any UI.
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use bubbletea_validation_field::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     form: Form,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut form = form_new()
//!             .with_field(field_new(FieldKind::Name).with_title("Name"))
//!             .with_field(field_new(FieldKind::Email).with_title("Email"));
//!         let cmd = form.focus_next();
//!         (Self { form }, cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if let Some(done) = msg.downcast_ref::<FormValidationMsg>() {
//!             if done.all_valid {
//!                 // submit
//!             }
//!         }
//!         self.form.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.form.view()
//!     }
//! }
//! ```

pub mod cursor;
pub mod error;
pub mod field;
pub mod form;
pub mod key;
pub mod validation;

use bubbletea_rs::Cmd;

/// Components that take keyboard focus.
///
/// ```rust
/// use bubbletea_validation_field::prelude::*;
///
/// fn toggle<T: Component>(component: &mut T) {
///     let _ = component.focus();
///     assert!(component.focused());
///     component.blur();
///     assert!(!component.focused());
/// }
///
/// toggle(&mut field_new(FieldKind::Email));
/// ```
pub trait Component {
    /// Takes focus. May return a command, such as a caret blink.
    fn focus(&mut self) -> Option<Cmd>;

    /// Gives up focus.
    fn blur(&mut self);

    /// Whether the component has focus.
    fn focused(&self) -> bool;
}

pub use cursor::Model as Cursor;
pub use error::{ConfigError, FormError};
pub use field::{
    from_mode as field_from_mode, new as field_new, Appearance, FieldId, Model as ValidationField,
    StatusIcon, ValidationEvent, ValidationMsg, ValidationObserver,
};
pub use form::{new as form_new, FormValidationMsg, Model as Form};
pub use key::{
    matches, matches_binding, new_binding, with_disabled, with_help, with_keys_str, Binding,
    Help as KeyHelp, KeyMap, KeyPress,
};
pub use validation::{FieldKind, Rules, ValidationResult};

/// Common imports.
///
/// ```rust
/// use bubbletea_validation_field::prelude::*;
///
/// let mut email = field_new(FieldKind::Email);
/// email.on_text_changed("jane@example.com", None);
/// assert_eq!(email.on_edit_committed(None).map(|e| e.is_valid), Some(true));
/// ```
pub mod prelude {
    pub use crate::cursor::Model as Cursor;
    pub use crate::error::{ConfigError, FormError};
    pub use crate::field::{
        from_mode as field_from_mode, new as field_new, Appearance, FieldId,
        Model as ValidationField, StatusIcon, ValidationEvent, ValidationMsg, ValidationObserver,
    };
    pub use crate::form::{new as form_new, FormValidationMsg, Model as Form};
    pub use crate::key::{Binding, KeyMap};
    pub use crate::validation::{FieldKind, Rules, ValidationResult};
    pub use crate::Component;
}
