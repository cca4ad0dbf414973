//! Primitives - The value shapes every behavior is built from.
//!
//! Props can be:
//! - Static values: `is_disabled: Some(true.into())`
//! - Signals: `is_disabled: Some(disabled_signal.into())` (stays connected!)
//! - Getters: `is_disabled: Some(PropValue::getter(|| compute()))`
//!
//! The key is to pass props directly - don't extract values before handing
//! them to a behavior!
//!
//! ```ignore
//! // CORRECT - signal stays connected
//! create_keyboard(KeyboardProps { is_disabled: Some(disabled.into()), ..Default::default() });
//!
//! // WRONG - extracts value, breaks reactivity
//! create_keyboard(KeyboardProps { is_disabled: Some(disabled.get().into()), ..Default::default() });
//! ```

mod types;

pub use types::*;
