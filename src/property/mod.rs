mod codec;
mod error;
mod kind;
mod numeric;
mod raw;
mod record;
mod wire;

/// Classification and canonical rendering entry points.
pub use codec::{COLLECTION_SEPARATOR, classify, encode, render, render_element, split_collection};
/// Error and result aliases.
pub use error::{PropertyError, Result};
/// Payload kind and its wire names.
pub use kind::PropertyKind;
/// Canonical numeric formatting.
pub use numeric::{Decimal, MAX_SCALE, format_f32, format_f64};
/// Raw input value accepted by records.
pub use raw::RawValue;
/// Property record type.
pub use record::PropertyRecord;
/// JSON transport helpers.
pub use wire::{from_json, from_json_list, to_json, to_json_list};
