use serde::{Deserialize, Serialize};
use structures_types::Identifier;

/// Report property: position number of the object's assembly.
pub const ASSEMBLY_POS: &str = "ASSEMBLY_POS";
/// Report property: position number of the part itself.
pub const PART_POS: &str = "PART_POS";

/// Which native object class a model object belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ObjectKind {
    Beam,
    ContourPlate,
    RebarGroup,
}

impl ObjectKind {
    /// Parts carry profile, material and numbering and belong to an assembly.
    pub fn is_part(&self) -> bool {
        matches!(self, ObjectKind::Beam | ObjectKind::ContourPlate)
    }
}

/// Non-owning reference to an object in the host model.
/// Holds only identity; the referenced object is owned elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectRef {
    pub kind: ObjectKind,
    pub identifier: Identifier,
}

/// A group of parts fabricated together: one main part plus secondaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assembly {
    pub identifier: Identifier,
    pub main_part: Option<Identifier>,
    pub secondaries: Vec<Identifier>,
}

/// Errors from host engine calls that return more than a success flag.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    #[error("not connected to a model")]
    NotConnected,

    #[error("object not found: {id:?}")]
    ObjectNotFound { id: Identifier },

    #[error("object of kind {kind:?} is not a part")]
    NotAPart { kind: ObjectKind },

    #[error("part {id:?} cannot be attached to its own assembly")]
    SelfAttachment { id: Identifier },
}
