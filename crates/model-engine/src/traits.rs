use structures_types::Identifier;

use crate::native::NativeObject;
use crate::types::*;

/// An object that can live in the host model.
/// Implemented by every native record and by the wrappers that own one.
pub trait ModelObject {
    fn kind(&self) -> ObjectKind;

    fn identifier(&self) -> Identifier;

    /// Written by the engine on insert and delete.
    fn set_identifier(&mut self, identifier: Identifier);

    /// Owned copy of the current attribute state, for the engine's storage.
    fn to_native(&self) -> NativeObject;

    fn object_ref(&self) -> ObjectRef {
        ObjectRef {
            kind: self.kind(),
            identifier: self.identifier(),
        }
    }
}

/// The host modeling engine. Implemented by the real host binding and by
/// MockEngine (deterministic in-memory test double).
///
/// Boolean results are the host's own success flags and are never
/// reinterpreted by callers.
pub trait ModelEngine {
    /// Whether a model is open and reachable.
    fn connection_status(&self) -> bool;

    /// Insert the object into the model, assigning it a fresh identifier.
    fn insert(&mut self, object: &mut dyn ModelObject) -> bool;

    /// Push the object's current attributes to its inserted counterpart.
    fn modify(&mut self, object: &dyn ModelObject) -> bool;

    /// Remove the object from the model and clear its identifier.
    fn delete(&mut self, object: &mut dyn ModelObject) -> bool;

    /// The assembly the given part belongs to.
    fn get_assembly(&self, object: &dyn ModelObject) -> Result<Assembly, EngineError>;

    /// Fetch a copy of an inserted object.
    fn select(&self, identifier: Identifier) -> Option<NativeObject>;

    /// Query a named report property (e.g. "PART_POS") of an inserted object.
    fn report_property(&self, object: &dyn ModelObject, name: &str) -> Option<String>;
}
