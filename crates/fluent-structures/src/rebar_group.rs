//! Rebar group: a set of bars laid out along polygons inside a father part.
//!
//! Mandatory steps, in order: father, polygons, start point, end point,
//! grade, size, radius values, class, spacings, start hook, end hook.
//! `start_and_end_points` and `start_and_end_hooks` each cover two steps.

use model_engine::{
    ModelEngine, ModelObject, NativeObject, NativePolygon, NativeRebarGroup, ObjectKind,
    ObjectRef, Value,
};
use structures_types::*;
use tracing::debug;

use crate::builder::Staged;
use crate::error::BuildError;
use crate::input::typed_values;
use crate::polygon::Polygon;

pub mod stage {
    pub struct Empty;
    pub struct WithFather;
    pub struct WithPolygons;
    pub struct WithStartPoint;
    pub struct WithStartAndEndPoints;
    pub struct WithGrade;
    pub struct WithSize;
    pub struct WithRadiusValues;
    pub struct WithClass;
    pub struct WithSpacings;
    pub struct WithStartHook;
    pub struct Completed;
}

use stage::*;

pub type RebarGroupBuilder<S> = Staged<RebarGroup, S>;

#[derive(Debug, PartialEq)]
pub struct RebarGroup {
    native: NativeRebarGroup,
}

impl RebarGroup {
    pub fn builder() -> RebarGroupBuilder<Empty> {
        Staged::start(RebarGroup {
            native: NativeRebarGroup::default(),
        })
    }

    pub fn rebuild(&self) -> RebarGroupBuilder<Completed> {
        Staged::start(RebarGroup {
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

    pub fn as_native(&self) -> &NativeRebarGroup {
        &self.native
    }

    pub fn into_native(self) -> NativeRebarGroup {
        self.native
    }

    /// Reference to the part the bars belong to. Does not own it.
    pub fn father(&self) -> Option<ObjectRef> {
        self.native.father
    }

    /// Copies of the polygons, in input order.
    pub fn polygons(&self) -> Vec<Polygon> {
        self.native.polygons.iter().map(Polygon::from_native).collect()
    }

    pub fn start_point(&self) -> Point {
        self.native.start_point
    }

    pub fn end_point(&self) -> Point {
        self.native.end_point
    }

    pub fn grade(&self) -> &str {
        &self.native.grade
    }

    pub fn size(&self) -> &str {
        &self.native.size
    }

    pub fn radius_values(&self) -> Vec<f64> {
        self.native.radius_values.clone()
    }

    pub fn class(&self) -> i32 {
        self.native.class
    }

    pub fn spacings(&self) -> Vec<f64> {
        self.native.spacings.clone()
    }

    pub fn start_hook(&self) -> RebarHookData {
        self.native.start_hook
    }

    pub fn end_hook(&self) -> RebarHookData {
        self.native.end_hook
    }

    pub fn numbering_series(&self) -> NumberingSeries {
        self.native.numbering_series.clone()
    }

    pub fn spacing_type(&self) -> SpacingType {
        self.native.spacing_type
    }

    pub fn start_from_plane_offset(&self) -> f64 {
        self.native.start_from_plane_offset
    }

    pub fn end_from_plane_offset(&self) -> f64 {
        self.native.end_from_plane_offset
    }

    pub fn name(&self) -> &str {
        &self.native.name
    }

    pub fn start_point_offset_value(&self) -> f64 {
        self.native.start_point_offset_value
    }

    pub fn end_point_offset_value(&self) -> f64 {
        self.native.end_point_offset_value
    }

    pub fn start_point_offset_type(&self) -> OffsetType {
        self.native.start_point_offset_type
    }

    pub fn end_point_offset_type(&self) -> OffsetType {
        self.native.end_point_offset_type
    }

    pub fn on_plane_offsets(&self) -> Vec<f64> {
        self.native.on_plane_offsets.clone()
    }

    pub fn exclude_type(&self) -> ExcludeType {
        self.native.exclude_type
    }

    pub fn stirrup_type(&self) -> StirrupType {
        self.native.stirrup_type
    }

    pub fn input_point_deforming_state(&self) -> DeformingType {
        self.native.input_point_deforming_state
    }
}

impl ModelObject for RebarGroup {
    fn kind(&self) -> ObjectKind {
        ObjectKind::RebarGroup
    }

    fn identifier(&self) -> Identifier {
        self.native.identifier
    }

    fn set_identifier(&mut self, identifier: Identifier) {
        self.native.identifier = identifier;
    }

    fn to_native(&self) -> NativeObject {
        NativeObject::RebarGroup(self.native.clone())
    }
}

impl RebarGroupBuilder<Empty> {
    /// Record a reference to the father part. The father is not copied.
    pub fn father(self, father: &dyn ModelObject) -> RebarGroupBuilder<WithFather> {
        let father = father.object_ref();
        self.step(|r| r.native.father = Some(father))
    }
}

impl RebarGroupBuilder<WithFather> {
    /// Fails on the first element that is not a polygon.
    pub fn polygons_from_values(
        self,
        values: &[Value],
    ) -> Result<RebarGroupBuilder<WithPolygons>, BuildError> {
        let natives = typed_values::<NativePolygon>(values)?;
        Ok(self.polygons(natives.iter().map(Polygon::from_native)))
    }

    pub fn polygons(
        self,
        polygons: impl IntoIterator<Item = Polygon>,
    ) -> RebarGroupBuilder<WithPolygons> {
        let natives: Vec<NativePolygon> = polygons.into_iter().map(Polygon::into_native).collect();
        self.step(|r| r.native.polygons = natives)
    }

    pub fn polygons_slice(self, polygons: &[Polygon]) -> RebarGroupBuilder<WithPolygons> {
        let natives: Vec<NativePolygon> = polygons.iter().map(Polygon::to_native).collect();
        self.step(|r| r.native.polygons = natives)
    }

    /// A single polygon built from `points`.
    pub fn polygon_points(
        self,
        points: impl IntoIterator<Item = Point>,
    ) -> RebarGroupBuilder<WithPolygons> {
        let polygon = Polygon::builder().points(points).build();
        self.polygons([polygon])
    }

    pub fn polygon_points_slice(self, points: &[Point]) -> RebarGroupBuilder<WithPolygons> {
        let polygon = Polygon::builder().points_slice(points).build();
        self.polygons([polygon])
    }
}

impl RebarGroupBuilder<WithPolygons> {
    pub fn start_point(self, start_point: Point) -> RebarGroupBuilder<WithStartPoint> {
        self.step(|r| r.native.start_point = start_point)
    }

    pub fn start_and_end_points(
        self,
        start_point: Point,
        end_point: Point,
    ) -> RebarGroupBuilder<WithStartAndEndPoints> {
        self.start_point(start_point).end_point(end_point)
    }
}

impl RebarGroupBuilder<WithStartPoint> {
    pub fn end_point(self, end_point: Point) -> RebarGroupBuilder<WithStartAndEndPoints> {
        self.step(|r| r.native.end_point = end_point)
    }
}

impl RebarGroupBuilder<WithStartAndEndPoints> {
    pub fn grade(self, grade: impl Into<String>) -> RebarGroupBuilder<WithGrade> {
        let grade = grade.into();
        self.step(|r| r.native.grade = grade)
    }
}

impl RebarGroupBuilder<WithGrade> {
    pub fn size(self, size: impl Into<String>) -> RebarGroupBuilder<WithSize> {
        let size = size.into();
        self.step(|r| r.native.size = size)
    }
}

impl RebarGroupBuilder<WithSize> {
    pub fn radius_values(
        self,
        radius_values: impl IntoIterator<Item = f64>,
    ) -> RebarGroupBuilder<WithRadiusValues> {
        let values: Vec<f64> = radius_values.into_iter().collect();
        self.step(|r| r.native.radius_values = values)
    }

    pub fn radius_values_slice(self, radius_values: &[f64]) -> RebarGroupBuilder<WithRadiusValues> {
        self.radius_values(radius_values.iter().copied())
    }

    /// Fails on the first element that is not a double.
    pub fn radius_values_from_values(
        self,
        values: &[Value],
    ) -> Result<RebarGroupBuilder<WithRadiusValues>, BuildError> {
        let values = typed_values::<f64>(values)?;
        Ok(self.radius_values(values))
    }
}

impl RebarGroupBuilder<WithRadiusValues> {
    pub fn class(self, class: i32) -> RebarGroupBuilder<WithClass> {
        self.step(|r| r.native.class = class)
    }
}

impl RebarGroupBuilder<WithClass> {
    pub fn spacings(
        self,
        spacings: impl IntoIterator<Item = f64>,
    ) -> RebarGroupBuilder<WithSpacings> {
        let values: Vec<f64> = spacings.into_iter().collect();
        self.step(|r| r.native.spacings = values)
    }

    pub fn spacings_slice(self, spacings: &[f64]) -> RebarGroupBuilder<WithSpacings> {
        self.spacings(spacings.iter().copied())
    }

    /// Fails on the first element that is not a double.
    pub fn spacings_from_values(
        self,
        values: &[Value],
    ) -> Result<RebarGroupBuilder<WithSpacings>, BuildError> {
        let values = typed_values::<f64>(values)?;
        Ok(self.spacings(values))
    }
}

impl RebarGroupBuilder<WithSpacings> {
    /// Accepts a full hook descriptor or just a [`HookShape`].
    pub fn start_hook(
        self,
        start_hook: impl Into<RebarHookData>,
    ) -> RebarGroupBuilder<WithStartHook> {
        let hook = start_hook.into();
        self.step(|r| r.native.start_hook = hook)
    }

    pub fn start_and_end_hooks(
        self,
        start_hook: impl Into<RebarHookData>,
        end_hook: impl Into<RebarHookData>,
    ) -> RebarGroupBuilder<Completed> {
        self.start_hook(start_hook).end_hook(end_hook)
    }
}

impl RebarGroupBuilder<WithStartHook> {
    pub fn end_hook(self, end_hook: impl Into<RebarHookData>) -> RebarGroupBuilder<Completed> {
        let hook = end_hook.into();
        self.step(|r| r.native.end_hook = hook)
    }
}

impl RebarGroupBuilder<Completed> {
    pub fn name(self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.set(|r| r.native.name = name)
    }

    pub fn spacing_type(self, spacing_type: SpacingType) -> Self {
        self.set(|r| r.native.spacing_type = spacing_type)
    }

    pub fn start_from_plane_offset(self, offset: f64) -> Self {
        self.set(|r| r.native.start_from_plane_offset = offset)
    }

    pub fn end_from_plane_offset(self, offset: f64) -> Self {
        self.set(|r| r.native.end_from_plane_offset = offset)
    }

    pub fn numbering(self, prefix: impl Into<String>, start_number: i32) -> Self {
        self.numbering_series(NumberingSeries::new(prefix, start_number))
    }

    pub fn numbering_series(self, series: NumberingSeries) -> Self {
        self.set(|r| r.native.numbering_series = series)
    }

    pub fn start_point_offset_value(self, value: f64) -> Self {
        self.set(|r| r.native.start_point_offset_value = value)
    }

    pub fn end_point_offset_value(self, value: f64) -> Self {
        self.set(|r| r.native.end_point_offset_value = value)
    }

    pub fn start_point_offset_type(self, offset_type: OffsetType) -> Self {
        self.set(|r| r.native.start_point_offset_type = offset_type)
    }

    pub fn end_point_offset_type(self, offset_type: OffsetType) -> Self {
        self.set(|r| r.native.end_point_offset_type = offset_type)
    }

    pub fn on_plane_offsets(self, offsets: impl IntoIterator<Item = f64>) -> Self {
        let values: Vec<f64> = offsets.into_iter().collect();
        self.set(|r| r.native.on_plane_offsets = values)
    }

    pub fn on_plane_offsets_slice(self, offsets: &[f64]) -> Self {
        self.on_plane_offsets(offsets.iter().copied())
    }

    /// Fails on the first element that is not a double.
    pub fn on_plane_offsets_from_values(self, values: &[Value]) -> Result<Self, BuildError> {
        let values = typed_values::<f64>(values)?;
        Ok(self.on_plane_offsets(values))
    }

    pub fn exclude_type(self, exclude_type: ExcludeType) -> Self {
        self.set(|r| r.native.exclude_type = exclude_type)
    }

    pub fn stirrup_type(self, stirrup_type: StirrupType) -> Self {
        self.set(|r| r.native.stirrup_type = stirrup_type)
    }

    pub fn identifier(self, identifier: Identifier) -> Self {
        self.set(|r| r.native.identifier = identifier)
    }

    pub fn input_point_deforming_state(self, state: DeformingType) -> Self {
        self.set(|r| r.native.input_point_deforming_state = state)
    }

    pub fn build(self) -> RebarGroup {
        let group = self.into_target();
        debug!(
            polygons = group.native.polygons.len(),
            spacings = group.native.spacings.len(),
            grade = group.grade(),
            "built rebar group"
        );
        group
    }
}
