use serde::{Deserialize, Deserializer};
use tracing::trace;

use crate::property::{PropertyKind, RawValue, encode, split_collection};

/// Named, self-describing property of a scanned hardware component.
///
/// `kind` and `value` only change together through [`PropertyRecord::set_value`],
/// so the kind always matches the last value assigned. `Clone` copies fields
/// verbatim without reclassifying.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
	kind: PropertyKind,
	name: String,
	#[serde(default, deserialize_with = "null_as_empty")]
	value: String,
	#[serde(default)]
	is_identity_key: bool,
	#[serde(default, deserialize_with = "null_as_empty")]
	unit: String,
}

impl PropertyRecord {
	/// Create a plain property with no unit.
	pub fn new(name: impl Into<String>, value: impl Into<RawValue>) -> Self {
		Self::with_fields(name, value, false, String::new())
	}

	/// Create a property specifying every field.
	pub fn with_fields(name: impl Into<String>, value: impl Into<RawValue>, is_identity_key: bool, unit: impl Into<String>) -> Self {
		let mut record = Self {
			kind: PropertyKind::String,
			name: name.into(),
			value: String::new(),
			is_identity_key,
			unit: unit.into(),
		};
		record.set_value(value);
		record
	}

	/// Set the measurement unit.
	pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
		self.unit = unit.into();
		self
	}

	/// Mark this property as the component's identity key.
	pub fn identity_key(mut self) -> Self {
		self.is_identity_key = true;
		self
	}

	/// Reclassify and re-render from a new raw value.
	///
	/// Only `kind` and `value` change.
	pub fn set_value(&mut self, value: impl Into<RawValue>) {
		let (kind, rendered) = encode(value.into());
		trace!(name = %self.name, %kind, "property value set");
		self.kind = kind;
		self.value = rendered;
	}

	/// Classified payload kind.
	pub fn kind(&self) -> PropertyKind {
		self.kind
	}

	/// Display label.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Canonical string value.
	pub fn value(&self) -> &str {
		&self.value
	}

	/// Whether this property is flagged as the identity key.
	pub fn is_identity_key(&self) -> bool {
		self.is_identity_key
	}

	/// Measurement unit, empty when unitless.
	pub fn unit(&self) -> &str {
		&self.unit
	}

	/// Value to match components on, if this property can act as sole discriminator.
	///
	/// `None` when the flag is unset or the value is empty; callers then
	/// compare every field instead.
	pub fn identity_value(&self) -> Option<&str> {
		(self.is_identity_key && !self.value.is_empty()).then_some(self.value.as_str())
	}

	/// Rendered elements: collection members, or the single scalar value.
	///
	/// Flattening is lossy: an empty collection and a collection holding one
	/// empty string both render as `""` and read back as no elements, and a
	/// tab inside a member reads back as a member boundary.
	pub fn elements(&self) -> Vec<&str> {
		match self.kind {
			PropertyKind::Collection => split_collection(&self.value).collect(),
			_ => vec![self.value.as_str()],
		}
	}
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
