//! Type-safe key bindings.
//!
//! A [`Binding`] groups one or more [`KeyPress`]es under a single action and
//! carries the short help text shown to users. Components keep their bindings
//! in a `KeyMap` struct and test incoming `KeyMsg`s against them with
//! [`matches_binding`].
//!
//! ```rust
//! use bubbletea_validation_field::key::{matches_binding, new_binding, with_help, with_keys_str};
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let submit = new_binding(vec![with_keys_str(&["enter", "ctrl+s"]), with_help("enter", "submit")]);
//! let msg = KeyMsg { key: KeyCode::Char('s'), modifiers: KeyModifiers::CONTROL };
//! assert!(matches_binding(&msg, &submit));
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key combination: a key code plus its modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key that was pressed.
    pub code: KeyCode,
    /// Modifier keys held during the press.
    pub mods: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, mods): (KeyCode, KeyModifiers)) -> Self {
        Self { code, mods }
    }
}

impl KeyPress {
    /// Parses a key description such as `"enter"`, `"ctrl+u"` or `"alt+backspace"`.
    ///
    /// Returns `None` for names it does not know.
    pub fn parse(s: &str) -> Option<Self> {
        let mut mods = KeyModifiers::NONE;
        let mut parts: Vec<&str> = s.split('+').collect();
        // "+" on its own, or a trailing "+" as in "ctrl++"
        if s.ends_with('+') {
            parts.retain(|p| !p.is_empty());
            parts.push("+");
        }
        let name = parts.pop()?;
        for m in parts {
            match m {
                "ctrl" => mods |= KeyModifiers::CONTROL,
                "alt" => mods |= KeyModifiers::ALT,
                "shift" => mods |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }

        let code = match name {
            "enter" => KeyCode::Enter,
            "tab" if mods.contains(KeyModifiers::SHIFT) => KeyCode::BackTab,
            "tab" => KeyCode::Tab,
            "backspace" => KeyCode::Backspace,
            "delete" => KeyCode::Delete,
            "esc" => KeyCode::Esc,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "space" => KeyCode::Char(' '),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return None,
                }
            }
        };

        Some(Self { code, mods })
    }

    /// Whether this key press corresponds to the given message.
    ///
    /// Shift is ignored: terminals report it inconsistently and it is already
    /// encoded in the key code for characters and back-tab.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.code == msg.key
            && self.mods.difference(KeyModifiers::SHIFT) == msg.modifiers.difference(KeyModifiers::SHIFT)
    }
}

/// Help text attached to a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short key label, e.g. `"enter"`.
    pub key: String,
    /// What the binding does, e.g. `"validate"`.
    pub desc: String,
}

/// A set of key presses bound to one action.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding from key codes or `(KeyCode, KeyModifiers)` pairs.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help text.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// The key presses this binding responds to.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// The help text.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Whether the binding is active. A binding without keys is never enabled.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Whether the message triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.iter().any(|k| k.matches(msg))
    }
}

/// A deferred modification applied by [`new_binding`].
pub type BindingOpt = Box<dyn FnOnce(&mut Binding)>;

/// Builds a binding from a list of options.
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut b = Binding::default();
    for opt in opts {
        opt(&mut b);
    }
    b
}

/// Option adding keys by name. Unknown names are skipped.
pub fn with_keys_str(keys: &[&str]) -> BindingOpt {
    let parsed: Vec<KeyPress> = keys.iter().filter_map(|k| KeyPress::parse(k)).collect();
    Box::new(move |b| b.keys.extend(parsed))
}

/// Option setting help text.
pub fn with_help(key: &str, desc: &str) -> BindingOpt {
    let help = Help {
        key: key.to_string(),
        desc: desc.to_string(),
    };
    Box::new(move |b| b.help = help)
}

/// Option creating the binding in a disabled state.
pub fn with_disabled() -> BindingOpt {
    Box::new(|b| b.disabled = true)
}

/// Reports whether the key message triggers the binding.
pub fn matches_binding(msg: &KeyMsg, binding: &Binding) -> bool {
    binding.matches(msg)
}

/// Reports whether the key message triggers any of the bindings.
pub fn matches(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(msg))
}

/// Components expose their bindings for help rendering through this trait.
pub trait KeyMap {
    /// Essential bindings for a one-line help view.
    fn short_help(&self) -> Vec<&Binding>;

    /// All bindings, grouped into columns.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers,
        }
    }

    #[test]
    fn test_parse_named_keys() {
        assert_eq!(KeyPress::parse("enter"), Some(KeyCode::Enter.into()));
        assert_eq!(
            KeyPress::parse("ctrl+u"),
            Some((KeyCode::Char('u'), KeyModifiers::CONTROL).into())
        );
        assert_eq!(
            KeyPress::parse("shift+tab").map(|k| k.code),
            Some(KeyCode::BackTab)
        );
        assert_eq!(KeyPress::parse("hyper+x"), None);
        assert_eq!(KeyPress::parse("nonsense"), None);
    }

    #[test]
    fn test_binding_matches_ignores_shift() {
        let b = new_binding(vec![with_keys_str(&["shift+tab"])]);
        assert!(matches_binding(
            &key(KeyCode::BackTab, KeyModifiers::SHIFT),
            &b
        ));
        assert!(matches_binding(&key(KeyCode::BackTab, KeyModifiers::NONE), &b));
        assert!(!matches_binding(&key(KeyCode::Tab, KeyModifiers::NONE), &b));
    }

    #[test]
    fn test_modifiers_must_match() {
        let b = new_binding(vec![with_keys_str(&["ctrl+w"])]);
        assert!(matches_binding(&key(KeyCode::Char('w'), KeyModifiers::CONTROL), &b));
        assert!(!matches_binding(&key(KeyCode::Char('w'), KeyModifiers::NONE), &b));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut b = new_binding(vec![with_keys_str(&["enter"]), with_disabled()]);
        assert!(!b.enabled());
        assert!(!b.matches(&key(KeyCode::Enter, KeyModifiers::NONE)));
        b.set_enabled(true);
        assert!(b.matches(&key(KeyCode::Enter, KeyModifiers::NONE)));
    }

    #[test]
    fn test_help_text() {
        let b = Binding::new(vec![KeyCode::Enter]).with_help("enter", "validate");
        assert_eq!(b.help().key, "enter");
        assert_eq!(b.help().desc, "validate");
    }
}
