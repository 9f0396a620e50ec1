//! Configuration errors.
//!
//! A failed validation is not an error: it is the `Invalid` outcome and is
//! reported through the observer. These types cover misconfiguration, which
//! is rejected at construction time.

use crate::field::FieldId;
use crate::validation::FieldKind;
use thiserror::Error;

/// Errors raised while configuring a single field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Integer mode code outside `0..=3`.
    #[error("unknown field kind code {0} (expected 0..=3)")]
    UnknownFieldKind(i32),

    /// Field kind name that is not one of the four supported kinds.
    #[error("unknown field kind '{0}' (expected name, email, password or confirm-password)")]
    UnknownFieldKindName(String),
}

/// Errors raised while wiring fields together in a form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// The id does not belong to this form.
    #[error("field {0} is not part of this form")]
    UnknownField(FieldId),

    /// A field cannot confirm itself.
    #[error("field {0} cannot be its own companion")]
    SelfCompanion(FieldId),

    /// Only password and confirm-password fields take part in pairing.
    #[error("field {id} has kind {kind}, which cannot have a companion")]
    CompanionKind {
        /// The offending field.
        id: FieldId,
        /// Its kind.
        kind: FieldKind,
    },
}
