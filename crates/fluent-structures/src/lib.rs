//! Fluent, compile-time staged builders for structural model objects.
//!
//! Each entity is built through a fixed sequence of mandatory steps; the
//! builder's type records which steps are done, so optional setters and
//! `build()` only appear once every mandatory field is set.
//!
//! ```ignore
//! let beam = Beam::builder()
//!     .start_point(Point::new(0.0, 0.0, 0.0))
//!     .end_point(Point::new(6000.0, 0.0, 0.0))
//!     .profile("HEA300")
//!     .material("S355")
//!     .name("B1")
//!     .build();
//! ```

pub mod beam;
pub mod builder;
pub mod config;
pub mod error;
pub mod extensions;
pub mod input;
pub mod model;
pub mod plate;
pub mod polygon;
pub mod rebar_group;

pub use beam::{Beam, BeamBuilder};
pub use builder::Staged;
pub use config::BeamDefaults;
pub use error::BuildError;
pub use extensions::{AssemblyExt, ModelObjectExt};
pub use model::Model;
pub use plate::{Plate, PlateBuilder};
pub use polygon::{Polygon, PolygonBuilder};
pub use rebar_group::{RebarGroup, RebarGroupBuilder};

pub use model_engine::{ModelEngine, ModelObject, Value};
pub use structures_types::*;
