//! Untyped list elements, as produced by host APIs that return loosely typed
//! collections. Typed extraction goes through [`ValueElement`].

use serde::{Deserialize, Serialize};
use structures_types::{ContourPoint, Point};

use crate::native::NativePolygon;

/// One element of a heterogeneous list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Value {
    Int(i64),
    Double(f64),
    Text(String),
    Point(Point),
    ContourPoint(ContourPoint),
    Polygon(NativePolygon),
}

impl Value {
    /// Name of the element's actual type, used in contract violation messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "Int",
            Value::Double(_) => "Double",
            Value::Text(_) => "Text",
            Value::Point(_) => "Point",
            Value::ContourPoint(_) => "ContourPoint",
            Value::Polygon(_) => "Polygon",
        }
    }
}

/// A type that can be read back out of a [`Value`] without conversion.
pub trait ValueElement: Sized {
    const TYPE_NAME: &'static str;

    /// Returns None when the value holds a different type.
    fn from_value(value: &Value) -> Option<Self>;
}

impl ValueElement for f64 {
    const TYPE_NAME: &'static str = "Double";

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Double(d) => Some(*d),
            _ => None,
        }
    }
}

impl ValueElement for Point {
    const TYPE_NAME: &'static str = "Point";

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Point(p) => Some(*p),
            _ => None,
        }
    }
}

impl ValueElement for ContourPoint {
    const TYPE_NAME: &'static str = "ContourPoint";

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::ContourPoint(cp) => Some(*cp),
            _ => None,
        }
    }
}

impl ValueElement for NativePolygon {
    const TYPE_NAME: &'static str = "Polygon";

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Polygon(p) => Some(p.clone()),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<Point> for Value {
    fn from(v: Point) -> Self {
        Value::Point(v)
    }
}

impl From<ContourPoint> for Value {
    fn from(v: ContourPoint) -> Self {
        Value::ContourPoint(v)
    }
}

impl From<NativePolygon> for Value {
    fn from(v: NativePolygon) -> Self {
        Value::Polygon(v)
    }
}
