//! Input Module - Terminal event conversion
//!
//! Bridges crossterm's event system with the event types the behaviors
//! understand, so widgets built on this crate can be driven from a terminal.
//!
//! # API
//!
//! - `convert_key_event` - Convert crossterm KeyEvent to our KeyboardEvent
//! - `convert_event` - Convert any crossterm Event to our Event (if relevant)
//! - `poll_event` - Non-blocking event check with timeout
//!
//! `poll_event` is the entry point for a terminal host: the host's event loop
//! calls it and dispatches the result to the focused element's props. Nothing
//! in this crate calls it; the behaviors only see the converted `Event`.
//!
//! # Example
//!
//! ```ignore
//! use spark_aria::state::input::poll_event;
//! use std::time::Duration;
//!
//! loop {
//!     if let Ok(Some(event)) = poll_event(Duration::from_millis(16), root_index) {
//!         if let Some(handler) = props.get(event.handler_name()).and_then(|p| p.as_handler()) {
//!             handler.call(&event);
//!         }
//!     }
//! }
//! ```

use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent as CrosstermKeyEvent, KeyEventKind,
    KeyModifiers, poll, read,
};
use std::time::Duration;

use super::event::Event;
use super::focus::FocusEvent;
use super::keyboard::{KeyState, KeyboardEvent, Modifiers};

// =============================================================================
// KEY EVENT CONVERSION
// =============================================================================

/// Convert crossterm KeyEvent to our KeyboardEvent
pub fn convert_key_event(event: CrosstermKeyEvent) -> KeyboardEvent {
    let key = match event.code {
        KeyCode::Char(' ') => " ".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab | KeyCode::BackTab => "Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Esc => "Escape".to_string(),
        KeyCode::Up => "ArrowUp".to_string(),
        KeyCode::Down => "ArrowDown".to_string(),
        KeyCode::Left => "ArrowLeft".to_string(),
        KeyCode::Right => "ArrowRight".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        KeyCode::Insert => "Insert".to_string(),
        _ => "Unidentified".to_string(),
    };

    let state = match event.kind {
        KeyEventKind::Press => KeyState::Press,
        KeyEventKind::Repeat => KeyState::Repeat,
        KeyEventKind::Release => KeyState::Release,
    };

    let mut modifiers = convert_modifiers(event.modifiers);
    // BackTab is how terminals report Shift+Tab
    if event.code == KeyCode::BackTab {
        modifiers |= Modifiers::SHIFT;
    }

    KeyboardEvent {
        key,
        modifiers,
        state,
    }
}

/// Convert crossterm KeyModifiers to our Modifiers
fn convert_modifiers(mods: KeyModifiers) -> Modifiers {
    let mut out = Modifiers::NONE;
    if mods.contains(KeyModifiers::CONTROL) {
        out |= Modifiers::CTRL;
    }
    if mods.contains(KeyModifiers::ALT) {
        out |= Modifiers::ALT;
    }
    if mods.contains(KeyModifiers::SHIFT) {
        out |= Modifiers::SHIFT;
    }
    if mods.intersects(KeyModifiers::META | KeyModifiers::SUPER) {
        out |= Modifiers::META;
    }
    out
}

// =============================================================================
// EVENT CONVERSION
// =============================================================================

/// Convert a crossterm event into an element event.
///
/// Terminal focus gained/lost is reported against `root`, the index of the
/// element that stands for the whole terminal window. Mouse, paste and resize
/// events have no counterpart here and yield `None`.
pub fn convert_event(event: CrosstermEvent, root: usize) -> Option<Event> {
    match event {
        CrosstermEvent::Key(key) => Some(Event::Key(convert_key_event(key))),
        CrosstermEvent::FocusGained => Some(Event::Focus(FocusEvent::focus(root))),
        CrosstermEvent::FocusLost => Some(Event::Focus(FocusEvent::blur(root))),
        _ => None,
    }
}

// =============================================================================
// EVENT POLLING
// =============================================================================

/// Poll for an event with timeout.
///
/// Returns `Ok(None)` if nothing arrived within the timeout, or if what
/// arrived has no element-event counterpart.
pub fn poll_event(timeout: Duration, root: usize) -> std::io::Result<Option<Event>> {
    if poll(timeout)? {
        Ok(convert_event(read()?, root))
    } else {
        Ok(None)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::focus::FocusKind;

    #[test]
    fn test_convert_char_key() {
        let event =
            convert_key_event(CrosstermKeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE));
        assert_eq!(event.key, "a");
        assert!(event.is_press());
        assert!(event.modifiers.is_empty());
    }

    #[test]
    fn test_convert_named_keys() {
        let cases = [
            (KeyCode::Enter, "Enter"),
            (KeyCode::Esc, "Escape"),
            (KeyCode::Up, "ArrowUp"),
            (KeyCode::F(5), "F5"),
            (KeyCode::Char(' '), " "),
        ];
        for (code, expected) in cases {
            let event = convert_key_event(CrosstermKeyEvent::new(code, KeyModifiers::NONE));
            assert_eq!(event.key, expected);
        }
    }

    #[test]
    fn test_convert_modifiers() {
        let event = convert_key_event(CrosstermKeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL | KeyModifiers::ALT,
        ));
        assert_eq!(event.modifiers, Modifiers::CTRL | Modifiers::ALT);
    }

    #[test]
    fn test_back_tab_is_shift_tab() {
        let event = convert_key_event(CrosstermKeyEvent::new(KeyCode::BackTab, KeyModifiers::NONE));
        assert_eq!(event.key, "Tab");
        assert!(event.modifiers.contains(Modifiers::SHIFT));
    }

    #[test]
    fn test_release_kind() {
        let mut raw = CrosstermKeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        raw.kind = KeyEventKind::Release;
        assert!(convert_key_event(raw).is_release());
    }

    #[test]
    fn test_convert_terminal_focus() {
        let gained = convert_event(CrosstermEvent::FocusGained, 0);
        assert_eq!(
            gained.as_ref().and_then(|e| e.as_focus()).map(|f| f.kind),
            Some(FocusKind::Focus)
        );

        let lost = convert_event(CrosstermEvent::FocusLost, 0);
        assert_eq!(
            lost.as_ref().and_then(|e| e.as_focus()).map(|f| f.kind),
            Some(FocusKind::Blur)
        );
    }

    #[test]
    fn test_resize_has_no_counterpart() {
        assert!(convert_event(CrosstermEvent::Resize(80, 24), 0).is_none());
    }
}
