pub mod wire_case;

pub use wire_case::{canonical_wire_key, to_wire_key, to_wire_keys, to_wire_map};
