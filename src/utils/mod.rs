//! Utilities shared by the behaviors.

pub mod id;

pub use id::{
    create_id, create_slot_id, create_unique_id, id_prefix, reset_id_counter, set_id_prefix,
    ID_PREFIX,
};
