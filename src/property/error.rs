use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, PropertyError>;

/// Errors produced while reading property records from wire input.
///
/// Building and re-setting records never fails; these only surface when
/// parsing text that claims to be a kind name, a decimal, or a record.
#[derive(Debug, Error)]
pub enum PropertyError {
	/// Kind name is not one of the five wire names.
	#[error("unknown property kind: {name:?}")]
	UnknownKind {
		/// Offending kind name.
		name: String,
	},
	/// Decimal literal is malformed or does not fit.
	#[error("invalid decimal literal: {input:?}")]
	InvalidDecimal {
		/// Original input text.
		input: String,
	},
	/// JSON encoding or decoding failure.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
}
