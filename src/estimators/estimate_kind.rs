use crate::core::statistics::{MeanStatistic, MedianStatistic, summarize_groups};
use crate::estimators::EstimatorError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;
use strum_macros::{Display, EnumIter, EnumMessage, EnumString, IntoStaticStr};

/// Statistic learned per group.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    EnumIter,
    EnumString,
    Display,
    IntoStaticStr,
    EnumMessage,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EstimateKind {
    #[default]
    #[strum(
        message = "Mean",
        detailed_message = "Arithmetic mean of the group's target values."
    )]
    Mean,
    #[strum(
        message = "Median",
        detailed_message = "Middle target value of the group; average of the two central values for even sizes."
    )]
    Median,
}

impl EstimateKind {
    /// Parses `"mean"` or `"median"`. Matching is case-sensitive.
    pub fn from_name(name: &str) -> Result<Self, EstimatorError> {
        name.parse::<Self>().map_err(|_| {
            EstimatorError::InvalidConfiguration(format!(
                "estimate must be either 'mean' or 'median', got '{name}'"
            ))
        })
    }

    pub(crate) fn summarize<'a, K>(
        self,
        pairs: impl IntoIterator<Item = (&'a K, f64)>,
    ) -> HashMap<K, f64>
    where
        K: Eq + Hash + Clone + 'a,
    {
        match self {
            EstimateKind::Mean => summarize_groups::<K, MeanStatistic>(pairs),
            EstimateKind::Median => summarize_groups::<K, MedianStatistic>(pairs),
        }
    }
}
