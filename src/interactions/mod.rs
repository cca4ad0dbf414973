//! Interactions Module - Behaviors that turn element events into callbacks.
//!
//! - [`create_keyboard`] - key down / key up
//! - [`create_focus`] - focus / blur, with current focus state

mod focus;
mod keyboard;

pub use focus::{create_focus, FocusProps, FocusResult};
pub use keyboard::{create_keyboard, KeyboardProps, KeyboardResult};
