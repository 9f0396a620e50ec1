//! Labeled text input with inline validation feedback.
//!
//! A validation field is a single-line input bound to one of the four
//! [`FieldKind`](crate::validation::FieldKind)s. Typing puts the field back in
//! its neutral look; pressing enter (or the owning form moving focus away)
//! validates it and switches text, border and background colors, the status
//! icon and the error message in one step.
//!
//! # Standalone use
//!
//! ```rust
//! use bubbletea_validation_field::field::{new, StatusIcon};
//! use bubbletea_validation_field::validation::{FieldKind, ValidationResult};
//!
//! let mut pw = new(FieldKind::Password).with_title("Password").with_min_password_length(8);
//! pw.on_text_changed("hunter2", None);
//! let event = pw.on_edit_committed(None).expect("result changed");
//! assert!(!event.is_valid);
//! assert_eq!(event.error_message.as_deref(), Some("Password must be at least 8 characters"));
//! assert_eq!(pw.appearance().icon, StatusIcon::Invalid);
//! ```
//!
//! # Observing results
//!
//! An observer is called synchronously every time the result changes,
//! including when it drops back to `Unset`:
//!
//! ```rust
//! use bubbletea_validation_field::field::{new, ValidationEvent};
//! use bubbletea_validation_field::validation::FieldKind;
//! use std::sync::{Arc, Mutex};
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//! let mut name = new(FieldKind::Name).with_observer(move |e: &ValidationEvent| {
//!     sink.lock().unwrap().push(e.is_valid);
//! });
//! name.on_text_changed("Jane", None);
//! name.on_edit_committed(None);
//! name.on_text_changed("Jan", None);
//! assert_eq!(*seen.lock().unwrap(), vec![true, false]);
//! ```
//!
//! Password confirmation needs the text of a second field; use
//! [`crate::form::Model`] to pair the two.

pub mod editing;
pub mod keymap;
pub mod methods;
pub mod model;
pub mod style;
pub mod types;
pub mod view;


pub use keymap::{default_key_map, KeyMap};
pub use model::{from_mode, new, Model};
pub use style::{Palette, Styles};
pub use types::{
    Appearance, FieldId, InputOutcome, StatusIcon, TextChange, ValidationEvent,
    ValidationMsg, ValidationObserver,
};
