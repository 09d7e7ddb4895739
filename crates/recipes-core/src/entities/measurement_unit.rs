use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A catalog measurement unit (gram, cup, ...).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MeasurementUnit {
    pub id: i64,
    pub name: String,
}
