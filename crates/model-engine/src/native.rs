//! Native object records: the host engine's own representation of each
//! model entity. Fields are public: the host API exposes them as mutable
//! properties, and wrappers forward every read and write here.

use serde::{Deserialize, Serialize};
use structures_types::*;

use crate::traits::ModelObject;
use crate::types::{ObjectKind, ObjectRef};

/// Cross-section descriptor, e.g. "HEA300" or "PL20*200".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Profile {
    pub profile_string: String,
}

impl Profile {
    pub fn new(profile_string: impl Into<String>) -> Self {
        Self {
            profile_string: profile_string.into(),
        }
    }
}

/// Material grade descriptor, e.g. "S355".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Material {
    pub material_string: String,
}

impl Material {
    pub fn new(material_string: impl Into<String>) -> Self {
        Self {
            material_string: material_string.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NativeBeam {
    pub beam_type: BeamType,
    pub identifier: Identifier,
    pub start_point: Point,
    pub end_point: Point,
    pub profile: Profile,
    pub material: Material,
    pub name: String,
    pub class: String,
    pub finish: String,
    pub assembly_number: NumberingSeries,
    pub part_number: NumberingSeries,
    pub position: Position,
    pub cast_unit_type: CastUnitType,
    pub deforming_data: DeformingData,
    pub pour_phase: i32,
    pub start_point_offset: Offset,
    pub end_point_offset: Offset,
}

impl NativeBeam {
    pub fn new(beam_type: BeamType) -> Self {
        Self {
            beam_type,
            identifier: Identifier::UNSET,
            start_point: Point::ORIGIN,
            end_point: Point::ORIGIN,
            profile: Profile::default(),
            material: Material::default(),
            name: String::new(),
            class: String::new(),
            finish: String::new(),
            assembly_number: NumberingSeries::default(),
            part_number: NumberingSeries::default(),
            position: Position::default(),
            cast_unit_type: CastUnitType::default(),
            deforming_data: DeformingData::default(),
            pour_phase: 0,
            start_point_offset: Offset::default(),
            end_point_offset: Offset::default(),
        }
    }
}

impl Default for NativeBeam {
    fn default() -> Self {
        Self::new(BeamType::Beam)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NativeContourPlate {
    pub identifier: Identifier,
    pub contour: Contour,
    pub profile: Profile,
    pub material: Material,
    pub name: String,
    pub class: String,
    pub assembly_number: NumberingSeries,
    pub part_number: NumberingSeries,
    pub position: Position,
}

/// Ordered point path. Not a model object on its own; used as rebar input.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NativePolygon {
    pub points: Vec<Point>,
}

impl NativePolygon {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NativeRebarGroup {
    pub identifier: Identifier,
    pub father: Option<ObjectRef>,
    pub polygons: Vec<NativePolygon>,
    pub start_point: Point,
    pub end_point: Point,
    pub grade: String,
    pub size: String,
    pub radius_values: Vec<f64>,
    pub class: i32,
    pub spacings: Vec<f64>,
    pub start_hook: RebarHookData,
    pub end_hook: RebarHookData,
    pub numbering_series: NumberingSeries,
    pub spacing_type: SpacingType,
    pub start_from_plane_offset: f64,
    pub end_from_plane_offset: f64,
    pub name: String,
    pub start_point_offset_value: f64,
    pub end_point_offset_value: f64,
    pub start_point_offset_type: OffsetType,
    pub end_point_offset_type: OffsetType,
    pub on_plane_offsets: Vec<f64>,
    pub exclude_type: ExcludeType,
    pub stirrup_type: StirrupType,
    pub input_point_deforming_state: DeformingType,
}

/// Any object the engine stores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NativeObject {
    Beam(NativeBeam),
    ContourPlate(NativeContourPlate),
    RebarGroup(NativeRebarGroup),
}

impl NativeObject {
    pub fn kind(&self) -> ObjectKind {
        match self {
            NativeObject::Beam(_) => ObjectKind::Beam,
            NativeObject::ContourPlate(_) => ObjectKind::ContourPlate,
            NativeObject::RebarGroup(_) => ObjectKind::RebarGroup,
        }
    }

    pub fn identifier(&self) -> Identifier {
        match self {
            NativeObject::Beam(b) => b.identifier,
            NativeObject::ContourPlate(p) => p.identifier,
            NativeObject::RebarGroup(r) => r.identifier,
        }
    }

    pub fn is_part(&self) -> bool {
        self.kind().is_part()
    }

    /// Part numbering of a part; numbering series of a rebar group.
    pub fn part_number(&self) -> &NumberingSeries {
        match self {
            NativeObject::Beam(b) => &b.part_number,
            NativeObject::ContourPlate(p) => &p.part_number,
            NativeObject::RebarGroup(r) => &r.numbering_series,
        }
    }

    /// Assembly numbering; parts only.
    pub fn assembly_number(&self) -> Option<&NumberingSeries> {
        match self {
            NativeObject::Beam(b) => Some(&b.assembly_number),
            NativeObject::ContourPlate(p) => Some(&p.assembly_number),
            NativeObject::RebarGroup(_) => None,
        }
    }

    pub fn father(&self) -> Option<ObjectRef> {
        match self {
            NativeObject::RebarGroup(r) => r.father,
            _ => None,
        }
    }
}

macro_rules! impl_model_object {
    ($native:ty, $kind:ident, $variant:ident) => {
        impl ModelObject for $native {
            fn kind(&self) -> ObjectKind {
                ObjectKind::$kind
            }

            fn identifier(&self) -> Identifier {
                self.identifier
            }

            fn set_identifier(&mut self, identifier: Identifier) {
                self.identifier = identifier;
            }

            fn to_native(&self) -> NativeObject {
                NativeObject::$variant(self.clone())
            }
        }
    };
}

impl_model_object!(NativeBeam, Beam, Beam);
impl_model_object!(NativeContourPlate, ContourPlate, ContourPlate);
impl_model_object!(NativeRebarGroup, RebarGroup, RebarGroup);
