//! Beam: a linear part between two points.
//!
//! Mandatory steps, in order: start point, end point, profile, material.
//! `start_and_end_point` sets both points in one step.

use model_engine::{
    Assembly, EngineError, ModelEngine, ModelObject, NativeBeam, NativeObject, ObjectKind,
};
use structures_types::*;
use tracing::debug;

use crate::builder::Staged;
use crate::config::BeamDefaults;

pub mod stage {
    pub struct Empty;
    pub struct WithStartPoint;
    pub struct WithStartAndEndPoints;
    pub struct WithProfile;
    /// All mandatory fields set. Optional setters and `build` are available.
    pub struct Completed;
}

use stage::*;

pub type BeamBuilder<S> = Staged<Beam, S>;

/// Wraps one native beam for the wrapper's whole lifetime.
/// Attributes are read straight from the native object.
#[derive(Debug, PartialEq)]
pub struct Beam {
    native: NativeBeam,
}

impl Beam {
    pub fn builder() -> BeamBuilder<Empty> {
        Self::builder_of_type(BeamType::Beam)
    }

    /// Start a builder whose native object is of the given beam type.
    pub fn builder_of_type(beam_type: BeamType) -> BeamBuilder<Empty> {
        Staged::start(Beam {
            native: NativeBeam::new(beam_type),
        })
    }

    /// A completed builder pre-filled with [`BeamDefaults::default`].
    pub fn default_builder() -> BeamBuilder<Completed> {
        Self::builder_from_defaults(&BeamDefaults::default())
    }

    pub fn builder_from_defaults(defaults: &BeamDefaults) -> BeamBuilder<Completed> {
        Self::builder()
            .start_and_end_point(defaults.start_point, defaults.end_point)
            .profile(defaults.profile.as_str())
            .material(defaults.material.as_str())
            .class(defaults.class.as_str())
    }

    /// A completed builder over a copy of this beam, identifier included,
    /// so the result can be pushed back with [`Beam::modify`].
    pub fn rebuild(&self) -> BeamBuilder<Completed> {
        Staged::start(Beam {
            native: self.native.clone(),
        })
    }

    pub fn insert(&mut self, engine: &mut dyn ModelEngine) -> bool {
        engine.insert(&mut self.native)
    }

    pub fn modify(&self, engine: &mut dyn ModelEngine) -> bool {
        engine.modify(&self.native)
    }

    pub fn delete(&mut self, engine: &mut dyn ModelEngine) -> bool {
        engine.delete(&mut self.native)
    }

    pub fn get_assembly(&self, engine: &dyn ModelEngine) -> Result<Assembly, EngineError> {
        engine.get_assembly(&self.native)
    }

    pub fn as_native(&self) -> &NativeBeam {
        &self.native
    }

    pub fn into_native(self) -> NativeBeam {
        self.native
    }

    pub fn beam_type(&self) -> BeamType {
        self.native.beam_type
    }

    pub fn start_point(&self) -> Point {
        self.native.start_point
    }

    pub fn end_point(&self) -> Point {
        self.native.end_point
    }

    pub fn profile(&self) -> &str {
        &self.native.profile.profile_string
    }

    pub fn material(&self) -> &str {
        &self.native.material.material_string
    }

    pub fn name(&self) -> &str {
        &self.native.name
    }

    pub fn class(&self) -> &str {
        &self.native.class
    }

    pub fn assembly_prefix(&self) -> &str {
        &self.native.assembly_number.prefix
    }

    pub fn assembly_start_number(&self) -> i32 {
        self.native.assembly_number.start_number
    }

    pub fn part_prefix(&self) -> &str {
        &self.native.part_number.prefix
    }

    pub fn part_start_number(&self) -> i32 {
        self.native.part_number.start_number
    }

    pub fn position(&self) -> Position {
        self.native.position
    }

    pub fn plane_position(&self) -> PlaneEnum {
        self.native.position.plane
    }

    pub fn plane_offset(&self) -> f64 {
        self.native.position.plane_offset
    }

    pub fn depth_position(&self) -> DepthEnum {
        self.native.position.depth
    }

    pub fn depth_offset(&self) -> f64 {
        self.native.position.depth_offset
    }

    pub fn rotation_position(&self) -> RotationEnum {
        self.native.position.rotation
    }

    pub fn rotation_offset(&self) -> f64 {
        self.native.position.rotation_offset
    }

    pub fn cast_unit_type(&self) -> CastUnitType {
        self.native.cast_unit_type
    }

    pub fn finish(&self) -> &str {
        &self.native.finish
    }

    pub fn deforming_data(&self) -> DeformingData {
        self.native.deforming_data
    }

    pub fn pour_phase(&self) -> i32 {
        self.native.pour_phase
    }

    pub fn start_point_offset(&self) -> Offset {
        self.native.start_point_offset
    }

    pub fn end_point_offset(&self) -> Offset {
        self.native.end_point_offset
    }
}

impl ModelObject for Beam {
    fn kind(&self) -> ObjectKind {
        ObjectKind::Beam
    }

    fn identifier(&self) -> Identifier {
        self.native.identifier
    }

    fn set_identifier(&mut self, identifier: Identifier) {
        self.native.identifier = identifier;
    }

    fn to_native(&self) -> NativeObject {
        NativeObject::Beam(self.native.clone())
    }
}

impl BeamBuilder<Empty> {
    pub fn start_point(self, start_point: Point) -> BeamBuilder<WithStartPoint> {
        self.step(|b| b.native.start_point = start_point)
    }

    pub fn start_and_end_point(
        self,
        start_point: Point,
        end_point: Point,
    ) -> BeamBuilder<WithStartAndEndPoints> {
        self.start_point(start_point).end_point(end_point)
    }
}

impl BeamBuilder<WithStartPoint> {
    pub fn end_point(self, end_point: Point) -> BeamBuilder<WithStartAndEndPoints> {
        self.step(|b| b.native.end_point = end_point)
    }
}

impl BeamBuilder<WithStartAndEndPoints> {
    pub fn profile(self, profile: impl Into<String>) -> BeamBuilder<WithProfile> {
        let profile = profile.into();
        self.step(|b| b.native.profile.profile_string = profile)
    }
}

impl BeamBuilder<WithProfile> {
    pub fn material(self, material: impl Into<String>) -> BeamBuilder<Completed> {
        let material = material.into();
        self.step(|b| b.native.material.material_string = material)
    }
}

impl BeamBuilder<Completed> {
    pub fn name(self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.set(|b| b.native.name = name)
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        let class = class.into();
        self.set(|b| b.native.class = class)
    }

    pub fn assembly_numbering(self, prefix: impl Into<String>, start_number: i32) -> Self {
        let series = NumberingSeries::new(prefix, start_number);
        self.set(|b| b.native.assembly_number = series)
    }

    pub fn part_numbering(self, prefix: impl Into<String>, start_number: i32) -> Self {
        let series = NumberingSeries::new(prefix, start_number);
        self.set(|b| b.native.part_number = series)
    }

    /// Replace plane, depth and rotation placement at once.
    pub fn position(self, position: Position) -> Self {
        self.set(|b| b.native.position = position)
    }

    pub fn plane_position(self, plane: PlaneEnum, offset: f64) -> Self {
        self.set(|b| {
            b.native.position.plane = plane;
            b.native.position.plane_offset = offset;
        })
    }

    pub fn depth_position(self, depth: DepthEnum, offset: f64) -> Self {
        self.set(|b| {
            b.native.position.depth = depth;
            b.native.position.depth_offset = offset;
        })
    }

    pub fn rotation_position(self, rotation: RotationEnum, offset: f64) -> Self {
        self.set(|b| {
            b.native.position.rotation = rotation;
            b.native.position.rotation_offset = offset;
        })
    }

    pub fn cast_unit_type(self, cast_unit_type: CastUnitType) -> Self {
        self.set(|b| b.native.cast_unit_type = cast_unit_type)
    }

    pub fn finish(self, finish: impl Into<String>) -> Self {
        let finish = finish.into();
        self.set(|b| b.native.finish = finish)
    }

    pub fn identifier(self, identifier: Identifier) -> Self {
        self.set(|b| b.native.identifier = identifier)
    }

    pub fn deforming_data(self, deforming_data: DeformingData) -> Self {
        self.set(|b| b.native.deforming_data = deforming_data)
    }

    pub fn pour_phase(self, pour_phase: i32) -> Self {
        self.set(|b| b.native.pour_phase = pour_phase)
    }

    pub fn start_point_offset(self, offset: Offset) -> Self {
        self.set(|b| b.native.start_point_offset = offset)
    }

    pub fn end_point_offset(self, offset: Offset) -> Self {
        self.set(|b| b.native.end_point_offset = offset)
    }

    pub fn build(self) -> Beam {
        let beam = self.into_target();
        debug!(
            profile = beam.profile(),
            material = beam.material(),
            "built beam"
        );
        beam
    }
}
