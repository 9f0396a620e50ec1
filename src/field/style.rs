//! Colors and icons for the three validation states.
//!
//! A field is drawn with one of three [`Palette`]s: neutral while it has no
//! verdict, and the valid or invalid palette once it has been checked. The
//! mapping from result to palette, icon and error visibility lives in
//! [`Styles::appearance`] so it is applied in one place.
//!
//! ```rust
//! use bubbletea_validation_field::field::{Styles, StatusIcon};
//! use bubbletea_validation_field::validation::ValidationResult;
//!
//! let styles = Styles::default();
//! let look = styles.appearance(ValidationResult::Invalid, false);
//! assert_eq!(look.icon, StatusIcon::Invalid);
//! assert!(look.error_visible);
//! assert_eq!(look.border_color, styles.invalid.border);
//! ```

use super::types::{Appearance, StatusIcon};
use crate::validation::ValidationResult;
use lipgloss_extras::prelude::*;

/// Text, border and background colors for one state, as hex strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Typed text color.
    pub text: String,
    /// Border color.
    pub border: String,
    /// Background color; empty leaves the terminal default.
    pub background: String,
}

impl Palette {
    /// Builds a palette from three colors.
    pub fn new(text: &str, border: &str, background: &str) -> Self {
        Self {
            text: text.to_string(),
            border: border.to_string(),
            background: background.to_string(),
        }
    }
}

/// Visual configuration of a validation field.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Style of the title above the input.
    pub title: Style,
    /// Style of the error message below the input.
    pub error: Style,
    /// Style of the placeholder text.
    pub placeholder: Style,
    /// Colors before validation and while editing.
    pub neutral: Palette,
    /// Colors of a valid field.
    pub valid: Palette,
    /// Colors of an invalid field.
    pub invalid: Palette,
    /// Glyph shown next to a valid field.
    pub valid_icon: String,
    /// Glyph shown next to an invalid field.
    pub invalid_icon: String,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            title: Style::new().bold(true),
            error: Style::new().foreground(Color::from("#FF5F87")),
            placeholder: Style::new().foreground(Color::from("240")),
            neutral: Palette::new("#DDDDDD", "#626262", ""),
            valid: Palette::new("#04B575", "#04B575", "#0B2E13"),
            invalid: Palette::new("#FF5F87", "#FF5F87", "#3B0D0C"),
            valid_icon: "✓".to_string(),
            invalid_icon: "✗".to_string(),
        }
    }
}

impl Styles {
    /// Derives the rendering directive for a result.
    ///
    /// `hide_error` keeps the error message hidden even for invalid input; the
    /// colors and icon still change.
    pub fn appearance(&self, result: ValidationResult, hide_error: bool) -> Appearance {
        let (palette, icon) = match result {
            ValidationResult::Valid => (&self.valid, StatusIcon::Valid),
            ValidationResult::Invalid => (&self.invalid, StatusIcon::Invalid),
            ValidationResult::Unset => (&self.neutral, StatusIcon::None),
        };
        Appearance {
            text_color: palette.text.clone(),
            border_color: palette.border.clone(),
            background_color: palette.background.clone(),
            icon,
            error_visible: result == ValidationResult::Invalid && !hide_error,
        }
    }

    /// The glyph for an icon; empty for [`StatusIcon::None`].
    pub fn icon_glyph(&self, icon: StatusIcon) -> &str {
        match icon {
            StatusIcon::Valid => &self.valid_icon,
            StatusIcon::Invalid => &self.invalid_icon,
            StatusIcon::None => "",
        }
    }
}
