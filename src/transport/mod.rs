//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod body;
mod casing;

pub use body::{decode_json_response, encode_payload, server_message};
pub use casing::{camel_case, normalize_keys, normalize_keys_in_place};
