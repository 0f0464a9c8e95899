#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! This module defines the host-independent events a carousel reacts to.
//! Hosts translate their native stimuli (DOM events, terminal input, test
//! scripts) into these values and hand them to the
//! [`Controller`](crate::controller::Controller).
//!
//! # Design Notes
//!
//! - Slide and indicator events carry the slide index, not a position
//! - Touch coordinates are horizontal screen pixels and may be fractional
//! - `KeyEventKind` defaults to `Press` when not available from the host
//! - `Modifiers` use bitflags for easy combination

use bitflags::bitflags;

/// Canonical input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A keyboard event.
    Key(KeyEvent),

    /// Pointer interaction with one slide.
    Slide(SlideEvent),

    /// Pointer entered or left the whole widget.
    Pointer(PointerEvent),

    /// One end of a touch sequence.
    Touch(TouchEvent),

    /// Indicator dot `i` was activated.
    Indicator(usize),

    /// A prev/next control was activated.
    Button(ButtonAction),
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key code that was pressed.
    pub code: KeyCode,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,

    /// The type of key event (press, repeat, or release).
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// Create a new key event with default modifiers and Press kind.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
            kind: KeyEventKind::Press,
        }
    }

    /// Create a key event with modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Create a key event with a specific kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: KeyEventKind) -> Self {
        self.kind = kind;
        self
    }

    /// Press or auto-repeat; releases are not actionable.
    #[must_use]
    pub const fn is_press(&self) -> bool {
        matches!(self.kind, KeyEventKind::Press | KeyEventKind::Repeat)
    }
}

/// Key codes for keyboard events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A regular character key.
    Char(char),

    /// Enter/Return key.
    Enter,

    /// Escape key.
    Escape,

    /// Tab key.
    Tab,

    /// Home key.
    Home,

    /// End key.
    End,

    /// Up arrow key.
    Up,

    /// Down arrow key.
    Down,

    /// Left arrow key.
    Left,

    /// Right arrow key.
    Right,

    /// Unrecognized key.
    Null,
}

/// The type of key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEventKind {
    /// Key was pressed (default when not distinguishable).
    #[default]
    Press,

    /// Key is being held (repeat event).
    Repeat,

    /// Key was released.
    Release,
}

bitflags! {
    /// Modifier keys that can be held during a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
        /// Super/Meta/Command key.
        const SUPER = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

/// Pointer interaction with a single slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideEvent {
    /// Index of the slide.
    pub index: usize,
    /// What happened.
    pub kind: SlideEventKind,
}

impl SlideEvent {
    /// Pointer entered slide `index`.
    #[must_use]
    pub const fn enter(index: usize) -> Self {
        Self {
            index,
            kind: SlideEventKind::Enter,
        }
    }

    /// Slide `index` was clicked.
    #[must_use]
    pub const fn click(index: usize) -> Self {
        Self {
            index,
            kind: SlideEventKind::Click,
        }
    }
}

/// The type of slide event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlideEventKind {
    /// Pointer moved onto the slide.
    Enter,
    /// Slide was clicked or tapped.
    Click,
}

/// Pointer crossing the widget boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEvent {
    /// Pointer entered the widget.
    Enter,
    /// Pointer left the widget.
    Leave,
}

/// One end of a touch sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    /// Start or end of the sequence.
    pub phase: TouchPhase,
    /// Horizontal screen coordinate in pixels.
    pub x: f32,
}

impl TouchEvent {
    /// Touch began at `x`.
    #[must_use]
    pub const fn start(x: f32) -> Self {
        Self {
            phase: TouchPhase::Start,
            x,
        }
    }

    /// Touch ended at `x`.
    #[must_use]
    pub const fn end(x: f32) -> Self {
        Self {
            phase: TouchPhase::End,
            x,
        }
    }
}

/// Touch sequence phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    /// First contact.
    Start,
    /// Contact lifted.
    End,
}

/// Explicit prev/next controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonAction {
    /// Previous slide.
    Prev,
    /// Next slide.
    Next,
}
