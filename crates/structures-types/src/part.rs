use serde::{Deserialize, Serialize};

/// Kind of native beam object. Fixed when the native object is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BeamType {
    #[default]
    Beam,
    Column,
    Panel,
    Strip,
    PadFooting,
    StripFooting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CastUnitType {
    #[default]
    Precast,
    CastInPlace,
}

/// Shortening, cambering and warping of a part.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DeformingData {
    pub angle: f64,
    pub angle2: f64,
    pub cambering: f64,
    pub shortening: f64,
}
