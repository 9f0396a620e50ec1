//! Blinking caret used by the validation field's editor.
//!
//! The caret is a sub-component: the owning field forwards messages to
//! [`Model::update`] and asks for [`Model::view`] when drawing the character
//! under the caret.

use bubbletea_rs::{tick, Cmd, Msg};
use lipgloss_extras::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

// Blink messages carry the id of the caret that scheduled them.
static LAST_ID: AtomicUsize = AtomicUsize::new(0);

fn next_id() -> usize {
    LAST_ID.fetch_add(1, Ordering::Relaxed)
}

const DEFAULT_BLINK_SPEED: Duration = Duration::from_millis(530);

/// Toggles the caret of the instance named by `id`.
#[derive(Debug, Clone)]
pub struct BlinkMsg {
    /// Caret instance the message is addressed to.
    pub id: usize,
    /// Sequence number; stale ticks are dropped.
    pub tag: usize,
}

/// How the caret is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Alternates between shown and hidden while focused.
    Blink,
    /// Always shown while focused.
    Static,
    /// Never shown.
    Hide,
}

/// Caret state.
#[derive(Debug, Clone)]
pub struct Model {
    /// Interval between blinks.
    pub blink_speed: Duration,
    /// Style of the caret block.
    pub style: Style,
    /// Style of the character under the caret while the block is hidden.
    pub text_style: Style,

    ch: String,
    id: usize,
    focus: bool,
    shown: bool,
    tag: usize,
    mode: Mode,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            blink_speed: DEFAULT_BLINK_SPEED,
            style: Style::new(),
            text_style: Style::new(),
            ch: " ".to_string(),
            id: next_id(),
            focus: false,
            shown: false,
            tag: 0,
            mode: Mode::Blink,
        }
    }
}

impl Model {
    /// Creates an unfocused blinking caret.
    pub fn new() -> Self {
        Self::default()
    }

    /// Instance id used to address blink messages.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Current drawing mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Changes the drawing mode, returning the first blink tick when switching to `Blink`.
    pub fn set_mode(&mut self, mode: Mode) -> Option<Cmd> {
        self.mode = mode;
        self.shown = self.focus && mode != Mode::Hide;
        self.schedule()
    }

    /// Shows the caret and starts blinking.
    pub fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        self.shown = self.mode != Mode::Hide;
        self.schedule()
    }

    /// Hides the caret.
    pub fn blur(&mut self) {
        self.focus = false;
        self.shown = false;
    }

    /// Whether the owning field has focus.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Whether the caret block is currently drawn.
    pub fn shown(&self) -> bool {
        self.shown
    }

    /// Sets the character drawn under the caret.
    pub fn set_char(&mut self, s: &str) {
        self.ch = s.to_string();
    }

    /// Handles blink ticks addressed to this caret.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        let blink = msg.downcast_ref::<BlinkMsg>()?;
        if self.mode != Mode::Blink || !self.focus {
            return None;
        }
        if blink.id != self.id || blink.tag != self.tag {
            return None;
        }
        self.shown = !self.shown;
        self.schedule()
    }

    fn schedule(&mut self) -> Option<Cmd> {
        if self.mode != Mode::Blink || !self.focus {
            return None;
        }
        self.tag += 1;
        let (id, tag) = (self.id, self.tag);
        Some(tick(self.blink_speed, move |_| {
            Box::new(BlinkMsg { id, tag }) as Msg
        }))
    }

    /// Renders the character under the caret, reversed while the block is shown.
    pub fn view(&self) -> String {
        if self.shown {
            self.style.clone().inline(true).reverse(true).render(&self.ch)
        } else {
            self.text_style.clone().inline(true).render(&self.ch)
        }
    }
}

/// Creates a caret. Equivalent to [`Model::new`].
pub fn new() -> Model {
    Model::new()
}
