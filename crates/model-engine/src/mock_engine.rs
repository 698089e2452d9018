//! Deterministic in-memory test double implementing [`ModelEngine`].
//!
//! Allocates sequential identifiers, keeps one assembly per inserted part and
//! renders report properties from numbering series. Used by the fluent layer
//! for unit testing without a running host application.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use structures_types::Identifier;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::native::NativeObject;
use crate::traits::{ModelEngine, ModelObject};
use crate::types::*;

/// Startup configuration for the mock engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MockEngineConfig {
    /// Whether the engine reports an open model.
    pub connected: bool,
    /// First identifier handed out on insert.
    pub first_id: i32,
}

impl Default for MockEngineConfig {
    fn default() -> Self {
        Self {
            connected: true,
            first_id: 1,
        }
    }
}

/// Deterministic test double for the host modeling engine.
pub struct MockEngine {
    connected: bool,
    /// None once the id range is used up.
    next_id: Option<i32>,
    objects: BTreeMap<i32, NativeObject>,
    assemblies: HashMap<i32, Assembly>,
    /// Part id -> id of the assembly it belongs to.
    part_assembly: HashMap<i32, i32>,
}

impl MockEngine {
    pub fn new() -> Self {
        Self::with_config(MockEngineConfig::default())
    }

    pub fn with_config(config: MockEngineConfig) -> Self {
        Self {
            connected: config.connected,
            next_id: Some(config.first_id.max(1)),
            objects: BTreeMap::new(),
            assemblies: HashMap::new(),
            part_assembly: HashMap::new(),
        }
    }

    /// Simulate the host application opening or closing its model.
    pub fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
    }

    /// Number of inserted objects.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn contains(&self, identifier: Identifier) -> bool {
        self.stored(identifier).is_some()
    }

    /// Move `secondary` into the assembly whose main part is `main`.
    pub fn attach_secondary(
        &mut self,
        main: Identifier,
        secondary: Identifier,
    ) -> Result<(), EngineError> {
        if main.id == secondary.id {
            return Err(EngineError::SelfAttachment { id: main });
        }
        for id in [main, secondary] {
            let stored = self
                .stored(id)
                .ok_or(EngineError::ObjectNotFound { id })?;
            if !stored.is_part() {
                return Err(EngineError::NotAPart {
                    kind: stored.kind(),
                });
            }
        }

        let target = *self
            .part_assembly
            .get(&main.id)
            .ok_or(EngineError::ObjectNotFound { id: main })?;

        self.detach_part(secondary.id);
        let assembly = self
            .assemblies
            .get_mut(&target)
            .ok_or(EngineError::ObjectNotFound { id: main })?;
        assembly.secondaries.push(secondary);
        self.part_assembly.insert(secondary.id, target);
        debug!(main = main.id, secondary = secondary.id, "attached secondary part");
        Ok(())
    }

    /// Next sequential identifier, or None when the id range is exhausted.
    fn alloc_identifier(&mut self) -> Option<Identifier> {
        let id = self.next_id?;
        self.next_id = id.checked_add(1);
        Some(Identifier::with_guid(id, Uuid::new_v4()))
    }

    /// Whether `count` more identifiers can be handed out.
    fn has_identifiers(&self, count: i32) -> bool {
        self.next_id
            .and_then(|next| next.checked_add(count - 1))
            .is_some()
    }

    /// Looks up by id and checks the GUID so stale identifiers don't match.
    fn stored(&self, identifier: Identifier) -> Option<&NativeObject> {
        self.objects
            .get(&identifier.id)
            .filter(|o| o.identifier() == identifier)
    }

    /// Remove a part from its assembly. A removed main part hands the role
    /// to its first secondary; an empty assembly is dropped.
    fn detach_part(&mut self, part_id: i32) {
        let Some(assembly_id) = self.part_assembly.remove(&part_id) else {
            return;
        };
        let Some(assembly) = self.assemblies.get_mut(&assembly_id) else {
            return;
        };

        if assembly.main_part.map(|m| m.id) == Some(part_id) {
            assembly.main_part = if assembly.secondaries.is_empty() {
                None
            } else {
                Some(assembly.secondaries.remove(0))
            };
        } else {
            assembly.secondaries.retain(|s| s.id != part_id);
        }

        if assembly.main_part.is_none() {
            self.assemblies.remove(&assembly_id);
        }
    }

    fn numbering_pos(series: &structures_types::NumberingSeries) -> String {
        format!("{}/{}", series.prefix, series.start_number)
    }
}

impl Default for MockEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelEngine for MockEngine {
    fn connection_status(&self) -> bool {
        self.connected
    }

    fn insert(&mut self, object: &mut dyn ModelObject) -> bool {
        if !self.connected {
            warn!(kind = ?object.kind(), "insert refused: not connected");
            return false;
        }
        let current = object.identifier();
        if current.is_valid() && self.contains(current) {
            warn!(id = current.id, "insert refused: already inserted");
            return false;
        }

        let native = object.to_native();
        if native.kind() == ObjectKind::RebarGroup {
            let father_present = native
                .father()
                .map(|f| self.contains(f.identifier))
                .unwrap_or(false);
            if !father_present {
                warn!("insert refused: rebar group father is not in the model");
                return false;
            }
        }

        // A part also takes an id for its assembly.
        let needed = if native.is_part() { 2 } else { 1 };
        if !self.has_identifiers(needed) {
            warn!(kind = ?native.kind(), "insert refused: identifiers exhausted");
            return false;
        }
        let Some(identifier) = self.alloc_identifier() else {
            return false;
        };
        let assembly_id = if native.is_part() {
            self.alloc_identifier()
        } else {
            None
        };

        object.set_identifier(identifier);
        let native = object.to_native();

        if let Some(assembly_id) = assembly_id {
            self.assemblies.insert(
                assembly_id.id,
                Assembly {
                    identifier: assembly_id,
                    main_part: Some(identifier),
                    secondaries: Vec::new(),
                },
            );
            self.part_assembly.insert(identifier.id, assembly_id.id);
        }

        debug!(id = identifier.id, kind = ?native.kind(), "inserted object");
        self.objects.insert(identifier.id, native);
        true
    }

    fn modify(&mut self, object: &dyn ModelObject) -> bool {
        if !self.connected {
            warn!("modify refused: not connected");
            return false;
        }
        let identifier = object.identifier();
        let Some(stored) = self.stored(identifier) else {
            warn!(id = identifier.id, "modify refused: unknown object");
            return false;
        };
        if stored.kind() != object.kind() {
            warn!(
                id = identifier.id,
                stored = ?stored.kind(),
                given = ?object.kind(),
                "modify refused: kind mismatch"
            );
            return false;
        }
        self.objects.insert(identifier.id, object.to_native());
        debug!(id = identifier.id, "modified object");
        true
    }

    fn delete(&mut self, object: &mut dyn ModelObject) -> bool {
        if !self.connected {
            warn!("delete refused: not connected");
            return false;
        }
        let identifier = object.identifier();
        if !self.contains(identifier) {
            warn!(id = identifier.id, "delete refused: unknown object");
            return false;
        }

        self.objects.remove(&identifier.id);
        self.detach_part(identifier.id);

        // Reinforcement goes with its father.
        let children: Vec<i32> = self
            .objects
            .iter()
            .filter(|(_, o)| o.father().map(|f| f.identifier) == Some(identifier))
            .map(|(id, _)| *id)
            .collect();
        for child in &children {
            self.objects.remove(child);
        }

        object.set_identifier(Identifier::UNSET);
        debug!(
            id = identifier.id,
            cascaded = children.len(),
            "deleted object"
        );
        true
    }

    fn get_assembly(&self, object: &dyn ModelObject) -> Result<Assembly, EngineError> {
        if !self.connected {
            return Err(EngineError::NotConnected);
        }
        let identifier = object.identifier();
        let stored = self
            .stored(identifier)
            .ok_or(EngineError::ObjectNotFound { id: identifier })?;
        if !stored.is_part() {
            return Err(EngineError::NotAPart {
                kind: stored.kind(),
            });
        }
        self.part_assembly
            .get(&identifier.id)
            .and_then(|a| self.assemblies.get(a))
            .cloned()
            .ok_or(EngineError::ObjectNotFound { id: identifier })
    }

    fn select(&self, identifier: Identifier) -> Option<NativeObject> {
        self.stored(identifier).cloned()
    }

    fn report_property(&self, object: &dyn ModelObject, name: &str) -> Option<String> {
        let stored = self.stored(object.identifier())?;
        match name {
            PART_POS => Some(Self::numbering_pos(stored.part_number())),
            ASSEMBLY_POS => {
                // Assembly position follows the main part's numbering.
                let assembly = self.part_assembly.get(&object.identifier().id)?;
                let main = self.assemblies.get(assembly)?.main_part?;
                let series = self.stored(main)?.assembly_number()?;
                Some(Self::numbering_pos(series))
            }
            _ => None,
        }
    }
}
