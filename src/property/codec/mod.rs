//! Value classification and canonical string rendering.
//!
//! Classification precedence is fixed: text, real, integer, boolean,
//! sequence, then the textual fallback. Sequences flatten exactly one level;
//! their elements are rendered as single values joined by
//! [`COLLECTION_SEPARATOR`]. Tabs inside elements are not escaped.

use tracing::{debug, trace};

use crate::property::{PropertyKind, RawValue, format_f32, format_f64};

/// Separator between rendered `Collection` elements.
pub const COLLECTION_SEPARATOR: char = '\t';

/// Classify a raw value into its payload kind.
pub fn classify(value: &RawValue) -> PropertyKind {
	match value {
		RawValue::Null | RawValue::Text(_) => PropertyKind::String,
		RawValue::F32(_) | RawValue::F64(_) | RawValue::Decimal(_) => PropertyKind::Real,
		RawValue::I64(_) | RawValue::U64(_) | RawValue::I128(_) | RawValue::U128(_) => PropertyKind::Integer,
		RawValue::Bool(_) => PropertyKind::Boolean,
		RawValue::List(_) => PropertyKind::Collection,
		RawValue::Other(_) => PropertyKind::String,
	}
}

/// Render a raw value into its canonical string.
pub fn render(value: &RawValue) -> String {
	match value {
		RawValue::List(items) => {
			let mut out = String::new();
			for (idx, item) in items.iter().enumerate() {
				if idx > 0 {
					out.push(COLLECTION_SEPARATOR);
				}
				out.push_str(&render_element(item));
			}
			out
		}
		scalar => render_element(scalar),
	}
}

/// Render one value with the single-value rule.
///
/// Never descends into sequences: a nested list renders through its
/// fallback textual form.
pub fn render_element(value: &RawValue) -> String {
	match value {
		RawValue::Null => String::new(),
		RawValue::Text(v) | RawValue::Other(v) => v.clone(),
		RawValue::F32(v) => format_f32(*v),
		RawValue::F64(v) => format_f64(*v),
		RawValue::Decimal(v) => v.to_string(),
		RawValue::I64(v) => v.to_string(),
		RawValue::U64(v) => v.to_string(),
		RawValue::I128(v) => v.to_string(),
		RawValue::U128(v) => v.to_string(),
		RawValue::Bool(v) => v.to_string(),
		RawValue::List(items) => {
			debug!(len = items.len(), "nested collection rendered as fallback text");
			value.to_string()
		}
	}
}

/// Normalize, classify, and render a raw value in one step.
pub fn encode(value: RawValue) -> (PropertyKind, String) {
	let value = if value.is_null() { RawValue::Text(String::new()) } else { value };
	let kind = classify(&value);
	if matches!(value, RawValue::Other(_)) {
		trace!("unclassified value stored through textual fallback");
	}
	let rendered = render(&value);
	(kind, rendered)
}

/// Split a rendered `Collection` value back into its elements.
///
/// An empty string has no elements.
pub fn split_collection(value: &str) -> impl Iterator<Item = &str> {
	let mut parts = (!value.is_empty()).then(|| value.split(COLLECTION_SEPARATOR));
	std::iter::from_fn(move || parts.as_mut()?.next())
}
