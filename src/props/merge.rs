//! Prop merging.
//!
//! Several behaviors contribute props to the same element. Merging them must
//! not let one behavior's `onKeyDown` silently replace another's, so handler
//! keys chain while everything else is last-wins.

use super::{ElementProps, EventHandler, Prop};

/// Whether `name` follows the event-handler naming convention
/// (`on` followed by an uppercase letter, e.g. `onKeyDown`).
pub fn is_handler_key(name: &str) -> bool {
    let bytes = name.as_bytes();
    bytes.len() > 2 && bytes[0] == b'o' && bytes[1] == b'n' && bytes[2].is_ascii_uppercase()
}

/// Merge prop maps in order.
///
/// - Handler keys: when the merged value so far and the incoming value are
///   both handlers, the result is a new handler that calls each of them in
///   source order with the same event.
/// - Every other case is last-wins by key presence, so a later
///   [`Prop::Unset`] clears an earlier value and the key stays present.
///
/// Key order follows first appearance.
pub fn merge_props<I>(sources: I) -> ElementProps
where
    I: IntoIterator<Item = ElementProps>,
{
    let mut merged = ElementProps::new();
    // Handlers collected per key, flattened into one chain at the end.
    let mut chains: Vec<(String, Vec<EventHandler>)> = Vec::new();

    for source in sources {
        for (name, prop) in source {
            let chain_index = chains.iter().position(|(key, _)| *key == name);

            match (prop, chain_index) {
                (Prop::Handler(handler), Some(index)) if is_handler_key(&name) => {
                    tracing::trace!(prop = %name, "chaining event handler");
                    chains[index].1.push(handler);
                }
                (Prop::Handler(handler), None) if is_handler_key(&name) => {
                    merged.insert(name.clone(), Prop::Handler(handler.clone()));
                    chains.push((name, vec![handler]));
                }
                (prop, chain_index) => {
                    // A non-handler value breaks any chain under this key.
                    if let Some(index) = chain_index {
                        chains.remove(index);
                    }
                    merged.insert(name, prop);
                }
            }
        }
    }

    for (name, handlers) in chains {
        if handlers.len() > 1 {
            merged.insert(name, EventHandler::chain(handlers));
        }
    }

    merged
}

// =============================================================================
// Tests
// =============================================================================
