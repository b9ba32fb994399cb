//! JSON Schemas for the core types, looked up by name.

use schemars::schema_for;

use crate::entities::{Charity, Crisis, FilterState};
use crate::errors::CoreError;

/// Names accepted by [`schema_for_name`].
pub const SCHEMA_NAMES: [&str; 3] = ["crisis", "charity", "filter"];

/// Return the JSON Schema for the named type.
///
/// # Errors
///
/// Returns [`CoreError::NotFound`] for an unknown name, or [`CoreError::Other`]
/// if the generated schema cannot be converted to JSON.
pub fn schema_for_name(name: &str) -> Result<serde_json::Value, CoreError> {
    let schema = match name.trim().to_ascii_lowercase().as_str() {
        "crisis" => schema_for!(Crisis),
        "charity" => schema_for!(Charity),
        "filter" | "filter_state" => schema_for!(FilterState),
        other => {
            return Err(CoreError::NotFound {
                entity_type: "schema".to_string(),
                id: other.to_string(),
            });
        }
    };
    serde_json::to_value(schema).map_err(|e| CoreError::Other(e.into()))
}
