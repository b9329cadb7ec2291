use tracing::debug;

use crate::property::{PropertyRecord, Result};

/// Encode one record as a JSON object.
pub fn to_json(record: &PropertyRecord) -> Result<String> {
	Ok(serde_json::to_string(record)?)
}

/// Decode one record from a JSON object.
pub fn from_json(input: &str) -> Result<PropertyRecord> {
	Ok(serde_json::from_str(input)?)
}

/// Encode a component's properties as a JSON array.
pub fn to_json_list(records: &[PropertyRecord]) -> Result<String> {
	Ok(serde_json::to_string(records)?)
}

/// Decode a component's properties from a JSON array.
pub fn from_json_list(input: &str) -> Result<Vec<PropertyRecord>> {
	let records: Vec<PropertyRecord> = serde_json::from_str(input)?;
	debug!(count = records.len(), "decoded property records");
	Ok(records)
}
