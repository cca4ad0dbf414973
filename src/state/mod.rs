//! State Module - Event types the behaviors react to
//!
//! - **Keyboard** - Key events and modifier flags
//! - **Focus** - Focus / blur events
//! - **Event** - The single event value handlers receive
//! - **Input** - Conversion from terminal (crossterm) events

pub mod event;
pub mod focus;
pub mod input;
pub mod keyboard;

pub use event::Event;
pub use focus::{FocusEvent, FocusKind};
pub use input::{convert_event, convert_key_event, poll_event};
pub use keyboard::{KeyState, KeyboardEvent, Modifiers};
