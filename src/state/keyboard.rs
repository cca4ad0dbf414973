//! Keyboard Module - Keyboard event types
//!
//! The event value handed to `onKeyDown` / `onKeyUp` handlers.
//! Does NOT own stdin or any dispatch loop (the host does that).
//!
//! # Example
//!
//! ```ignore
//! use spark_aria::state::keyboard::{KeyboardEvent, Modifiers};
//!
//! let event = KeyboardEvent::with_modifiers("c", Modifiers::CTRL);
//! assert!(event.modifiers.contains(Modifiers::CTRL));
//! ```

// =============================================================================
// TYPES
// =============================================================================

bitflags::bitflags! {
    /// Keyboard modifier state.
    ///
    /// Combine with bitwise OR: `Modifiers::CTRL | Modifiers::SHIFT`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Modifiers: u8 {
        const NONE = 0;
        const CTRL = 1 << 0;
        const ALT = 1 << 1;
        const SHIFT = 1 << 2;
        const META = 1 << 3;
    }
}

/// Key event state (press, repeat, release)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyState {
    #[default]
    Press,
    Repeat,
    Release,
}

/// Keyboard event
#[derive(Clone, Debug, PartialEq)]
pub struct KeyboardEvent {
    /// The key value (e.g., "a", "Enter", "ArrowUp")
    pub key: String,
    /// Modifier keys state
    pub modifiers: Modifiers,
    /// Press/repeat/release state
    pub state: KeyState,
}

impl KeyboardEvent {
    /// Create a simple key press event
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::NONE,
            state: KeyState::Press,
        }
    }

    /// Create a key press with modifiers
    pub fn with_modifiers(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
            state: KeyState::Press,
        }
    }

    /// Create a key release event
    pub fn release(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::NONE,
            state: KeyState::Release,
        }
    }

    /// Check if this is a press event
    pub fn is_press(&self) -> bool {
        self.state == KeyState::Press
    }

    /// Check if this is an auto-repeat of a held key
    pub fn is_repeat(&self) -> bool {
        self.state == KeyState::Repeat
    }

    /// Check if this is a release event
    pub fn is_release(&self) -> bool {
        self.state == KeyState::Release
    }
}

// =============================================================================
// TESTS
// =============================================================================
