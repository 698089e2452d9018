use serde::{Deserialize, Serialize};

/// Placement of a part relative to its reference line.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub plane: PlaneEnum,
    pub plane_offset: f64,
    pub depth: DepthEnum,
    pub depth_offset: f64,
    pub rotation: RotationEnum,
    pub rotation_offset: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlaneEnum {
    #[default]
    Middle,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DepthEnum {
    #[default]
    Middle,
    Front,
    Behind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RotationEnum {
    #[default]
    Front,
    Top,
    Back,
    Below,
}
