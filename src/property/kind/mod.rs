use std::fmt;
use std::str::FromStr;

use crate::property::{PropertyError, Result};

/// Classified payload kind of a property value.
///
/// Persisted by wire name, never by ordinal. Integer and Real keep their
/// historical wire names `Long` and `Double`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum PropertyKind {
	/// Single-level sequence flattened with tabs.
	Collection,
	/// Text, or the fallback textual form of anything unclassified.
	String,
	/// Fixed-width signed or unsigned integer (`Long`).
	Integer,
	/// Floating or fixed-point number (`Double`).
	Real,
	/// Boolean literal.
	Boolean,
}

impl PropertyKind {
	/// Every kind paired with its wire name.
	pub const ALL: [(Self, &'static str); 5] = [
		(Self::Collection, "Collection"),
		(Self::String, "String"),
		(Self::Integer, "Long"),
		(Self::Real, "Double"),
		(Self::Boolean, "Boolean"),
	];

	/// Stable wire name.
	pub fn as_str(self) -> &'static str {
		Self::ALL.iter().find(|(kind, _)| *kind == self).map_or("String", |(_, name)| *name)
	}

	/// Resolve a wire name back to its kind.
	pub fn from_name(name: &str) -> Result<Self> {
		Self::ALL
			.iter()
			.find(|(_, item)| *item == name)
			.map(|(kind, _)| *kind)
			.ok_or_else(|| PropertyError::UnknownKind { name: name.to_owned() })
	}
}

impl fmt::Display for PropertyKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for PropertyKind {
	type Err = PropertyError;

	fn from_str(s: &str) -> Result<Self> {
		Self::from_name(s)
	}
}

impl From<PropertyKind> for &'static str {
	fn from(kind: PropertyKind) -> Self {
		kind.as_str()
	}
}

impl TryFrom<String> for PropertyKind {
	type Error = PropertyError;

	fn try_from(name: String) -> Result<Self> {
		Self::from_name(&name)
	}
}
