//! Validation rules for the four field kinds.
//!
//! [`validate`] is a pure function of the field kind, the current text, the
//! companion text (only meaningful for confirmations) and the minimum password
//! length. It never fails: empty input has no verdict and yields
//! [`ValidationResult::Unset`].
//!
//! ```rust
//! use bubbletea_validation_field::validation::{validate, FieldKind, ValidationResult};
//!
//! assert_eq!(validate(FieldKind::Name, "Jane Doe", None, 6), ValidationResult::Valid);
//! assert_eq!(validate(FieldKind::Email, "a@b", None, 6), ValidationResult::Invalid);
//! assert_eq!(validate(FieldKind::ConfirmPassword, "x", Some("x"), 6), ValidationResult::Valid);
//! assert_eq!(validate(FieldKind::Password, "", None, 6), ValidationResult::Unset);
//! ```

use crate::error::ConfigError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use unicode_segmentation::UnicodeSegmentation;

/// Minimum password length used when none is configured.
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;

const EMAIL_PATTERN: &str = r"^[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?$";

// ASCII-only case folding: `(?i)` would also fold letters such as U+212A.
static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&EMAIL_PATTERN.replace("a-z", "a-zA-Z")).expect("email pattern compiles")
});

static EMAIL_STRICT_CASE: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"));

static DECIMAL_DIGIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\p{Nd}").expect("digit class compiles"));

/// Which rule a field is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FieldKind {
    /// A person's name: anything without digits that is not only spaces.
    #[default]
    Name,
    /// An email address.
    Email,
    /// A password with a minimum length.
    Password,
    /// Must repeat the companion password field exactly.
    ConfirmPassword,
}

impl FieldKind {
    /// All kinds, in mode-code order.
    pub const ALL: [FieldKind; 4] = [
        FieldKind::Name,
        FieldKind::Email,
        FieldKind::Password,
        FieldKind::ConfirmPassword,
    ];

    /// Password and confirmation fields mask their input and may be paired.
    pub fn is_secure(self) -> bool {
        matches!(self, FieldKind::Password | FieldKind::ConfirmPassword)
    }

    /// Integer mode code (`0..=3`).
    pub fn code(self) -> i32 {
        match self {
            FieldKind::Name => 0,
            FieldKind::Email => 1,
            FieldKind::Password => 2,
            FieldKind::ConfirmPassword => 3,
        }
    }

    /// Message shown under an invalid field when no custom message is set.
    pub fn default_error_message(self, min_password_length: usize) -> String {
        match self {
            FieldKind::Name => "Names cannot be blank or contain digits".to_string(),
            FieldKind::Email => "Please enter a valid email address".to_string(),
            FieldKind::Password => {
                format!("Password must be at least {min_password_length} characters")
            }
            FieldKind::ConfirmPassword => "Passwords do not match".to_string(),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FieldKind::Name => "name",
            FieldKind::Email => "email",
            FieldKind::Password => "password",
            FieldKind::ConfirmPassword => "confirm-password",
        })
    }
}

impl TryFrom<i32> for FieldKind {
    type Error = ConfigError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(FieldKind::Name),
            1 => Ok(FieldKind::Email),
            2 => Ok(FieldKind::Password),
            3 => Ok(FieldKind::ConfirmPassword),
            other => Err(ConfigError::UnknownFieldKind(other)),
        }
    }
}

impl FromStr for FieldKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(FieldKind::Name),
            "email" => Ok(FieldKind::Email),
            "password" => Ok(FieldKind::Password),
            "confirm-password" | "confirm_password" => Ok(FieldKind::ConfirmPassword),
            _ => Err(ConfigError::UnknownFieldKindName(s.to_string())),
        }
    }
}

/// Tri-state verdict on a field's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValidationResult {
    /// No verdict yet, e.g. the field is empty or was just edited.
    #[default]
    Unset,
    /// The text satisfies the field's rule.
    Valid,
    /// The text violates the field's rule.
    Invalid,
}

impl ValidationResult {
    /// `true` only for [`ValidationResult::Valid`].
    pub fn is_valid(self) -> bool {
        self == ValidationResult::Valid
    }

    /// `true` only for [`ValidationResult::Invalid`].
    pub fn is_invalid(self) -> bool {
        self == ValidationResult::Invalid
    }

    fn from_check(ok: bool) -> Self {
        if ok {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValidationResult::Unset => "unset",
            ValidationResult::Valid => "valid",
            ValidationResult::Invalid => "invalid",
        })
    }
}

/// Parameters shared by all rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    /// Shortest accepted password, in user-perceived characters.
    pub min_password_length: usize,
    /// Reject upper-case letters in email addresses.
    pub case_sensitive_email: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
            case_sensitive_email: false,
        }
    }
}

impl Rules {
    /// Default rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum password length.
    pub fn with_min_password_length(mut self, len: usize) -> Self {
        self.min_password_length = len;
        self
    }

    /// Restricts email addresses to lower case.
    pub fn with_case_sensitive_email(mut self, strict: bool) -> Self {
        self.case_sensitive_email = strict;
        self
    }

    /// Checks `text` against the rule for `kind`.
    ///
    /// `companion` is the text of the paired password field and is only
    /// consulted for [`FieldKind::ConfirmPassword`].
    pub fn validate(&self, kind: FieldKind, text: &str, companion: Option<&str>) -> ValidationResult {
        if text.is_empty() {
            return ValidationResult::Unset;
        }

        let ok = match kind {
            FieldKind::Name => is_valid_name(text),
            FieldKind::Email => self.is_valid_email(text),
            FieldKind::Password => text.graphemes(true).count() >= self.min_password_length,
            FieldKind::ConfirmPassword => companion == Some(text),
        };
        ValidationResult::from_check(ok)
    }

    fn is_valid_email(&self, text: &str) -> bool {
        if self.case_sensitive_email {
            EMAIL_STRICT_CASE.is_match(text)
        } else {
            EMAIL.is_match(text)
        }
    }
}

/// Checks `text` against the rule for `kind` using the default email policy.
pub fn validate(
    kind: FieldKind,
    text: &str,
    companion: Option<&str>,
    min_password_length: usize,
) -> ValidationResult {
    Rules::new()
        .with_min_password_length(min_password_length)
        .validate(kind, text, companion)
}

fn is_valid_name(text: &str) -> bool {
    text.chars().any(|c| c != ' ') && !DECIMAL_DIGIT.is_match(text)
}
