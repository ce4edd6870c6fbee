use crate::estimators::{EstimateKind, EstimatorError};
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
pub struct GroupEstimatorParams {
    #[serde(default)]
    #[schemars(
        title = "Estimate",
        description = "Statistic computed for each group: mean or median."
    )]
    pub estimate: EstimateKind,
}

impl GroupEstimatorParams {
    pub fn new(estimate: EstimateKind) -> Self {
        Self { estimate }
    }

    /// JSON Schema describing the accepted configuration object.
    pub fn schema() -> Schema {
        schema_for!(GroupEstimatorParams)
    }

    /// Reads params from a JSON object such as `{"estimate": "median"}`.
    pub fn from_json(value: Value) -> Result<Self, EstimatorError> {
        serde_json::from_value(value)
            .map_err(|e| EstimatorError::InvalidConfiguration(e.to_string()))
    }
}
