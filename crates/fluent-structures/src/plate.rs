//! Contour plate: a part defined by a closed outline.
//!
//! Mandatory steps: outline (points or contour), profile, material.

use model_engine::{
    Assembly, EngineError, ModelEngine, ModelObject, NativeContourPlate, NativeObject,
    ObjectKind, Value,
};
use structures_types::*;
use tracing::debug;

use crate::builder::Staged;
use crate::error::BuildError;
use crate::input::typed_values;

pub mod stage {
    pub struct Empty;
    pub struct WithPoints;
    pub struct WithProfile;
    pub struct Completed;
}

use stage::*;

pub type PlateBuilder<S> = Staged<Plate, S>;

#[derive(Debug, PartialEq)]
pub struct Plate {
    native: NativeContourPlate,
}

impl Plate {
    pub fn builder() -> PlateBuilder<Empty> {
        Staged::start(Plate {
            native: NativeContourPlate::default(),
        })
    }

    pub fn rebuild(&self) -> PlateBuilder<Completed> {
        Staged::start(Plate {
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

    pub fn as_native(&self) -> &NativeContourPlate {
        &self.native
    }

    pub fn into_native(self) -> NativeContourPlate {
        self.native
    }

    /// Copy of the outline.
    pub fn contour(&self) -> Contour {
        self.native.contour.clone()
    }

    /// Copy of the outline points, in path order.
    pub fn points(&self) -> Vec<ContourPoint> {
        self.native.contour.contour_points.clone()
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

    pub fn depth_position(&self) -> DepthEnum {
        self.native.position.depth
    }

    pub fn depth_offset(&self) -> f64 {
        self.native.position.depth_offset
    }
}

impl ModelObject for Plate {
    fn kind(&self) -> ObjectKind {
        ObjectKind::ContourPlate
    }

    fn identifier(&self) -> Identifier {
        self.native.identifier
    }

    fn set_identifier(&mut self, identifier: Identifier) {
        self.native.identifier = identifier;
    }

    fn to_native(&self) -> NativeObject {
        NativeObject::ContourPlate(self.native.clone())
    }
}

impl PlateBuilder<Empty> {
    /// Outline from points; plain [`Point`]s become unchamfered corners.
    pub fn points<P: Into<ContourPoint>>(
        self,
        points: impl IntoIterator<Item = P>,
    ) -> PlateBuilder<WithPoints> {
        let contour: Contour = points.into_iter().map(Into::<ContourPoint>::into).collect();
        self.contour(contour)
    }

    pub fn points_slice(self, points: &[ContourPoint]) -> PlateBuilder<WithPoints> {
        self.contour(Contour::new(points.to_vec()))
    }

    /// Fails on the first element that is not a contour point.
    pub fn points_from_values(
        self,
        values: &[Value],
    ) -> Result<PlateBuilder<WithPoints>, BuildError> {
        let points = typed_values::<ContourPoint>(values)?;
        Ok(self.contour(Contour::new(points)))
    }

    pub fn contour(self, contour: Contour) -> PlateBuilder<WithPoints> {
        self.step(|p| p.native.contour = contour)
    }
}

impl PlateBuilder<WithPoints> {
    pub fn profile(self, profile: impl Into<String>) -> PlateBuilder<WithProfile> {
        let profile = profile.into();
        self.step(|p| p.native.profile.profile_string = profile)
    }
}

impl PlateBuilder<WithProfile> {
    pub fn material(self, material: impl Into<String>) -> PlateBuilder<Completed> {
        let material = material.into();
        self.step(|p| p.native.material.material_string = material)
    }
}

impl PlateBuilder<Completed> {
    pub fn name(self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.set(|p| p.native.name = name)
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        let class = class.into();
        self.set(|p| p.native.class = class)
    }

    pub fn assembly_numbering(self, prefix: impl Into<String>, start_number: i32) -> Self {
        let series = NumberingSeries::new(prefix, start_number);
        self.set(|p| p.native.assembly_number = series)
    }

    pub fn part_numbering(self, prefix: impl Into<String>, start_number: i32) -> Self {
        let series = NumberingSeries::new(prefix, start_number);
        self.set(|p| p.native.part_number = series)
    }

    pub fn depth_position(self, depth: DepthEnum, offset: f64) -> Self {
        self.set(|p| {
            p.native.position.depth = depth;
            p.native.position.depth_offset = offset;
        })
    }

    pub fn build(self) -> Plate {
        let plate = self.into_target();
        debug!(
            points = plate.native.contour.contour_points.len(),
            profile = plate.profile(),
            "built plate"
        );
        plate
    }
}
