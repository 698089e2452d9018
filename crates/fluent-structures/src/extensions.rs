//! Read-only queries layered on top of model objects and assemblies.

use model_engine::{Assembly, ModelEngine, ModelObject, NativeObject, ASSEMBLY_POS, PART_POS};

/// Report-property shortcuts for any model object.
pub trait ModelObjectExt {
    /// Assembly position number, or an empty string if the engine has none.
    fn assembly_pos(&self, engine: &dyn ModelEngine) -> String;

    /// Part position number, or an empty string if the engine has none.
    fn part_pos(&self, engine: &dyn ModelEngine) -> String;
}

impl<T: ModelObject> ModelObjectExt for T {
    fn assembly_pos(&self, engine: &dyn ModelEngine) -> String {
        engine
            .report_property(self, ASSEMBLY_POS)
            .unwrap_or_default()
    }

    fn part_pos(&self, engine: &dyn ModelEngine) -> String {
        engine.report_property(self, PART_POS).unwrap_or_default()
    }
}

pub trait AssemblyExt {
    /// Main part first, then secondaries. Anything that no longer resolves
    /// or is not a part is skipped.
    fn all_parts(&self, engine: &dyn ModelEngine) -> Vec<NativeObject>;
}

impl AssemblyExt for Assembly {
    fn all_parts(&self, engine: &dyn ModelEngine) -> Vec<NativeObject> {
        self.main_part
            .iter()
            .chain(self.secondaries.iter())
            .filter_map(|id| engine.select(*id))
            .filter(NativeObject::is_part)
            .collect()
    }
}
