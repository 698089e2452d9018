pub mod geometry;
pub mod numbering;
pub mod part;
pub mod position;
pub mod reinforcement;

pub use geometry::*;
pub use numbering::*;
pub use part::*;
pub use position::*;
pub use reinforcement::*;
