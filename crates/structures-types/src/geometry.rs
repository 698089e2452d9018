use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};

/// A point in model space, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    pub const ORIGIN: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// A point on the XY plane.
    pub fn planar(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }

    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    pub fn from_array(arr: [f64; 3]) -> Self {
        Self {
            x: arr[0],
            y: arr[1],
            z: arr[2],
        }
    }
}

impl From<(f64, f64, f64)> for Point {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl AbsDiffEq for Point {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Point {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

/// Translation applied to a part end point.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset {
    pub dx: f64,
    pub dy: f64,
    pub dz: f64,
}

impl Offset {
    pub fn new(dx: f64, dy: f64, dz: f64) -> Self {
        Self { dx, dy, dz }
    }
}

/// Corner treatment of a contour point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ChamferKind {
    #[default]
    None,
    Line,
    Rounding,
    Arc,
    ArcPoint,
    Square,
    SquareParallel,
    LineAndArc,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Chamfer {
    pub kind: ChamferKind,
    pub x: f64,
    pub y: f64,
    pub dz1: f64,
    pub dz2: f64,
}

impl Chamfer {
    pub fn new(kind: ChamferKind, x: f64, y: f64) -> Self {
        Self {
            kind,
            x,
            y,
            ..Self::default()
        }
    }
}

/// A vertex of a plate outline, optionally chamfered.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ContourPoint {
    pub point: Point,
    pub chamfer: Chamfer,
}

impl ContourPoint {
    pub fn new(point: Point, chamfer: Chamfer) -> Self {
        Self { point, chamfer }
    }
}

impl From<Point> for ContourPoint {
    fn from(point: Point) -> Self {
        Self {
            point,
            chamfer: Chamfer::default(),
        }
    }
}

/// Closed outline of a contour plate. Point order defines the boundary path.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Contour {
    pub contour_points: Vec<ContourPoint>,
}

impl Contour {
    pub fn new(contour_points: Vec<ContourPoint>) -> Self {
        Self { contour_points }
    }

    pub fn add_contour_point(&mut self, point: ContourPoint) {
        self.contour_points.push(point);
    }
}

impl FromIterator<ContourPoint> for Contour {
    fn from_iter<I: IntoIterator<Item = ContourPoint>>(iter: I) -> Self {
        Self {
            contour_points: iter.into_iter().collect(),
        }
    }
}
