//! Builder configuration.

use serde::{Deserialize, Serialize};
use structures_types::Point;

use crate::error::BuildError;

/// Values used by the pre-filled beam builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeamDefaults {
    pub start_point: Point,
    pub end_point: Point,
    pub profile: String,
    pub material: String,
    pub class: String,
}

impl Default for BeamDefaults {
    fn default() -> Self {
        Self {
            start_point: Point::planar(0.0, 0.0),
            end_point: Point::planar(6000.0, 0.0),
            profile: "D500".to_string(),
            material: "C245".to_string(),
            class: "0".to_string(),
        }
    }
}

impl BeamDefaults {
    /// Parse defaults from JSON. Missing fields keep their built-in values.
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        Ok(serde_json::from_str(json)?)
    }
}
