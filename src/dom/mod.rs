//! DOM Module - The element side of the behaviors.
//!
//! - [`Element`] / [`ElementHandle`] - what a rendered element exposes
//! - [`NodeRef`] - reactive reference filled in by the renderer
//! - [`registry`] - which element ids are attached

mod element;
pub mod registry;

pub use element::{Element, ElementHandle, FocusError, NodeRef};
