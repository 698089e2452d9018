//! Polygon: an ordered point path, used as rebar input.

use model_engine::{NativePolygon, Value};
use structures_types::Point;
use tracing::debug;

use crate::builder::Staged;
use crate::error::BuildError;
use crate::input::typed_values;

pub mod stage {
    /// No points yet.
    pub struct Empty;
    /// Points set; ready to build.
    pub struct Completed;
}

use stage::*;

pub type PolygonBuilder<S> = Staged<Polygon, S>;

/// Wraps one native polygon. Point order is the boundary path.
#[derive(Debug, PartialEq)]
pub struct Polygon {
    native: NativePolygon,
}

impl Polygon {
    pub fn builder() -> PolygonBuilder<Empty> {
        Staged::start(Polygon {
            native: NativePolygon::default(),
        })
    }

    /// Copy a native polygon into a new wrapper.
    pub fn from_native(native: &NativePolygon) -> Polygon {
        Polygon::builder().points_slice(&native.points).build()
    }

    /// Owned copy of the native polygon.
    pub fn to_native(&self) -> NativePolygon {
        self.native.clone()
    }

    pub fn as_native(&self) -> &NativePolygon {
        &self.native
    }

    pub fn into_native(self) -> NativePolygon {
        self.native
    }

    /// Copy of the points, in path order.
    pub fn points(&self) -> Vec<Point> {
        self.native.points.clone()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.native.points.iter()
    }

    pub fn len(&self) -> usize {
        self.native.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.native.points.is_empty()
    }

    /// A completed builder over a copy of this polygon.
    pub fn rebuild(&self) -> PolygonBuilder<Completed> {
        Staged::start(Polygon {
            native: self.native.clone(),
        })
    }
}

impl<'a> IntoIterator for &'a Polygon {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl PolygonBuilder<Empty> {
    pub fn points(self, points: impl IntoIterator<Item = Point>) -> PolygonBuilder<Completed> {
        let points: Vec<Point> = points.into_iter().collect();
        self.step(|p| p.native.points = points)
    }

    pub fn points_slice(self, points: &[Point]) -> PolygonBuilder<Completed> {
        self.step(|p| p.native.points = points.to_vec())
    }

    /// Fails on the first element that is not a point.
    pub fn points_from_values(
        self,
        values: &[Value],
    ) -> Result<PolygonBuilder<Completed>, BuildError> {
        let points = typed_values::<Point>(values)?;
        Ok(self.points(points))
    }
}

impl PolygonBuilder<Completed> {
    pub fn build(self) -> Polygon {
        let polygon = self.into_target();
        debug!(points = polygon.len(), "built polygon");
        polygon
    }
}
