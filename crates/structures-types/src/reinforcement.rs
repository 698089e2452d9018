use serde::{Deserialize, Serialize};

/// Bend shape at one end of a rebar run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HookShape {
    #[default]
    NoHook,
    Hook90Degrees,
    Hook135Degrees,
    Hook180Degrees,
    CustomHook,
}

/// Hook descriptor: shape plus the angle, length and bend radius used by custom hooks.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RebarHookData {
    pub shape: HookShape,
    pub angle: f64,
    pub length: f64,
    pub radius: f64,
}

impl RebarHookData {
    pub fn with_shape(shape: HookShape) -> Self {
        Self {
            shape,
            ..Self::default()
        }
    }

    pub fn custom(angle: f64, length: f64, radius: f64) -> Self {
        Self {
            shape: HookShape::CustomHook,
            angle,
            length,
            radius,
        }
    }
}

impl From<HookShape> for RebarHookData {
    fn from(shape: HookShape) -> Self {
        Self::with_shape(shape)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SpacingType {
    #[default]
    Undefined,
    ExactSpacings,
    ExactNumber,
    TargetSpace,
    ExactSpaceFlexAtStart,
    ExactSpaceFlexAtEnd,
    ExactSpaceFlexAtBoth,
    ExactSpaceFlexAtMiddle,
}

/// How a rebar end offset value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OffsetType {
    #[default]
    CoverThickness,
    LegLength,
}

/// Which bars of a group are left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ExcludeType {
    #[default]
    None,
    First,
    Last,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StirrupType {
    #[default]
    Polygonal,
    Spiral,
    TaperedCurved,
}

/// Whether rebar input points follow the deformation of the father part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DeformingType {
    #[default]
    NotDeformed,
    Deformed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hook_from_shape_zeroes_dimensions() {
        let hook = RebarHookData::from(HookShape::Hook90Degrees);
        assert_eq!(hook.shape, HookShape::Hook90Degrees);
        assert_eq!(hook.angle, 0.0);
        assert_eq!(hook.length, 0.0);
        assert_eq!(hook.radius, 0.0);
    }

    #[test]
    fn test_hook_serializes_with_tagged_shape() {
        let hook = RebarHookData::custom(35.0, 123.0, 80.0);
        let json = serde_json::to_string(&hook).unwrap();
        assert!(json.contains("\"CustomHook\""));
        let back: RebarHookData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hook);
    }
}
