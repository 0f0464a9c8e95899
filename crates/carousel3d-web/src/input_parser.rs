#![forbid(unsafe_code)]

//! JSON input parser for host-encoded DOM events.
//!
//! The JS shim serializes each DOM event it forwards as a small JSON object
//! with a `kind` discriminator. [`parse_encoded_input_to_event`] turns that
//! into a [`carousel3d_core::event::Event`]. Kinds the carousel has no use for
//! return `Ok(None)`.
//!
//! | `kind`      | Fields                                  |
//! |-------------|-----------------------------------------|
//! | `key`       | `phase` (`down`/`up`), `key`/`code`, `mods`, `repeat` |
//! | `pointer`   | `phase` (`enter`/`leave`)               |
//! | `slide`     | `phase` (`enter`/`click`), `index`      |
//! | `touch`     | `phase` (`start`/`end`), `x`            |
//! | `indicator` | `index`                                 |
//! | `button`    | `action` (`prev`/`next`)                |
//!
//! # Design
//!
//! Uses `serde_json` for robustness and is feature-gated behind
//! `input-parser` so embeddings that build events natively do not pay for it.

use carousel3d_core::event::{
    ButtonAction, Event, KeyCode, KeyEvent, KeyEventKind, Modifiers, PointerEvent, SlideEvent,
    TouchEvent,
};
use serde::Deserialize;

/// Errors from parsing encoded input JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputParseError {
    /// Malformed JSON.
    Json(String),
    /// Missing required field.
    MissingField(&'static str),
    /// Unknown phase or action value.
    UnknownPhase(String),
}

impl core::fmt::Display for InputParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Json(msg) => write!(f, "JSON parse error: {msg}"),
            Self::MissingField(field) => write!(f, "missing required field: {field}"),
            Self::UnknownPhase(phase) => write!(f, "unknown phase: {phase}"),
        }
    }
}

impl std::error::Error for InputParseError {}

/// Internal deserialization target matching the shim's JSON schema.
#[derive(Debug, Deserialize)]
struct RawInput {
    kind: String,
    #[serde(default)]
    phase: Option<String>,
    #[serde(default)]
    key: Option<String>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    mods: Option<i32>,
    #[serde(default)]
    repeat: Option<bool>,
    #[serde(default)]
    index: Option<usize>,
    #[serde(default)]
    x: Option<f32>,
    #[serde(default)]
    action: Option<String>,
}

/// Parse a JSON-encoded host event into an [`Event`].
///
/// Returns `Ok(None)` for kinds with no carousel meaning (wheel, focus,
/// resize, ...). Returns `Err` for malformed JSON, missing required fields,
/// or unknown phases.
pub fn parse_encoded_input_to_event(json: &str) -> Result<Option<Event>, InputParseError> {
    let raw: RawInput =
        serde_json::from_str(json).map_err(|e| InputParseError::Json(e.to_string()))?;

    match raw.kind.as_str() {
        "key" => parse_key_event(&raw).map(Some),
        "pointer" => parse_pointer_event(&raw).map(Some),
        "slide" => parse_slide_event(&raw).map(Some),
        "touch" => parse_touch_event(&raw).map(Some),
        "indicator" => Ok(Some(Event::Indicator(required_index(&raw)?))),
        "button" => parse_button_event(&raw).map(Some),
        _ => Ok(None),
    }
}

fn parse_modifiers(mods: Option<i32>) -> Modifiers {
    let bits = mods.unwrap_or(0).clamp(0, i32::from(u8::MAX)) as u8;
    Modifiers::from_bits_truncate(bits)
}

fn parse_key_code(code: &str) -> Option<KeyCode> {
    match code {
        "Enter" | "NumpadEnter" => Some(KeyCode::Enter),
        "Escape" | "Esc" => Some(KeyCode::Escape),
        "Tab" => Some(KeyCode::Tab),
        "Home" => Some(KeyCode::Home),
        "End" => Some(KeyCode::End),
        "Up" | "ArrowUp" => Some(KeyCode::Up),
        "Down" | "ArrowDown" => Some(KeyCode::Down),
        "Left" | "ArrowLeft" => Some(KeyCode::Left),
        "Right" | "ArrowRight" => Some(KeyCode::Right),
        "Space" | "Spacebar" => Some(KeyCode::Char(' ')),
        other => {
            // DOM KeyboardEvent.code fallback: KeyA..KeyZ
            if let Some(tail) = other.strip_prefix("Key") {
                let mut chars = tail.chars();
                if let Some(c) = chars.next()
                    && chars.next().is_none()
                {
                    return Some(KeyCode::Char(c.to_ascii_lowercase()));
                }
            }
            let mut chars = other.chars();
            if let Some(c) = chars.next()
                && chars.next().is_none()
            {
                return Some(KeyCode::Char(c));
            }
            None
        }
    }
}

fn parse_key_event(raw: &RawInput) -> Result<Event, InputParseError> {
    let phase = raw.phase.as_deref().unwrap_or("down");
    let kind = match phase {
        "down" if raw.repeat.unwrap_or(false) => KeyEventKind::Repeat,
        "down" => KeyEventKind::Press,
        "up" => KeyEventKind::Release,
        other => return Err(InputParseError::UnknownPhase(other.to_string())),
    };

    let key_str = raw.key.as_deref().filter(|s| !s.is_empty());
    let code_str = raw.code.as_deref().filter(|s| !s.is_empty());
    if key_str.is_none() && code_str.is_none() {
        return Err(InputParseError::MissingField("key"));
    }

    // Prefer the logical `key`; fall back to the physical `code`.
    let code = key_str
        .and_then(parse_key_code)
        .or_else(|| code_str.and_then(parse_key_code))
        .unwrap_or(KeyCode::Null);

    Ok(Event::Key(KeyEvent {
        code,
        modifiers: parse_modifiers(raw.mods),
        kind,
    }))
}

fn parse_pointer_event(raw: &RawInput) -> Result<Event, InputParseError> {
    match required_phase(raw)? {
        "enter" => Ok(Event::Pointer(PointerEvent::Enter)),
        "leave" => Ok(Event::Pointer(PointerEvent::Leave)),
        other => Err(InputParseError::UnknownPhase(other.to_string())),
    }
}

fn parse_slide_event(raw: &RawInput) -> Result<Event, InputParseError> {
    let phase = required_phase(raw)?;
    let index = required_index(raw)?;
    match phase {
        "enter" => Ok(Event::Slide(SlideEvent::enter(index))),
        "click" => Ok(Event::Slide(SlideEvent::click(index))),
        other => Err(InputParseError::UnknownPhase(other.to_string())),
    }
}

fn parse_touch_event(raw: &RawInput) -> Result<Event, InputParseError> {
    let phase = required_phase(raw)?;
    let x = raw.x.ok_or(InputParseError::MissingField("x"))?;
    match phase {
        "start" => Ok(Event::Touch(TouchEvent::start(x))),
        "end" => Ok(Event::Touch(TouchEvent::end(x))),
        other => Err(InputParseError::UnknownPhase(other.to_string())),
    }
}

fn parse_button_event(raw: &RawInput) -> Result<Event, InputParseError> {
    let action = raw
        .action
        .as_deref()
        .ok_or(InputParseError::MissingField("action"))?;
    match action {
        "prev" => Ok(Event::Button(ButtonAction::Prev)),
        "next" => Ok(Event::Button(ButtonAction::Next)),
        other => Err(InputParseError::UnknownPhase(other.to_string())),
    }
}

fn required_phase(raw: &RawInput) -> Result<&str, InputParseError> {
    raw.phase
        .as_deref()
        .ok_or(InputParseError::MissingField("phase"))
}

fn required_index(raw: &RawInput) -> Result<usize, InputParseError> {
    raw.index.ok_or(InputParseError::MissingField("index"))
}
