use rustc_hash::FxHashMap;

use super::object::SelectableObject;
use crate::scene::ObjectId;

/// Every selectable part, keyed by identity.
///
/// Picking resolves a hit to an [`ObjectId`]; the registry is the one place
/// that id is turned back into the part's record, renderer set and
/// alternatives.
#[derive(Debug, Default)]
pub struct PartRegistry {
    parts: FxHashMap<ObjectId, SelectableObject>,
    order: Vec<ObjectId>,
}

impl PartRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `part`, returning the part it replaced under the same id.
    pub fn insert(&mut self, part: SelectableObject) -> Option<SelectableObject> {
        let id = part.id();
        let previous = self.parts.insert(id, part);
        if previous.is_none() {
            self.order.push(id);
        }
        previous
    }

    /// Unregister a part.
    pub fn remove(&mut self, id: ObjectId) -> Option<SelectableObject> {
        let removed = self.parts.remove(&id)?;
        self.order.retain(|o| *o != id);
        Some(removed)
    }

    /// Part by id.
    #[must_use]
    pub fn get(&self, id: ObjectId) -> Option<&SelectableObject> {
        self.parts.get(&id)
    }

    /// Mutable part by id.
    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut SelectableObject> {
        self.parts.get_mut(&id)
    }

    /// Whether `id` is registered.
    #[must_use]
    pub fn contains(&self, id: ObjectId) -> bool {
        self.parts.contains_key(&id)
    }

    /// Number of parts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no parts are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Parts in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &SelectableObject> + '_ {
        self.order.iter().filter_map(|id| self.parts.get(id))
    }

    /// Ids of every part whose type tag is `part_type`, in registration
    /// order.
    #[must_use]
    pub fn parts_of_type(&self, part_type: &str) -> Vec<ObjectId> {
        self.iter()
            .filter(|p| p.record().part_type() == part_type)
            .map(SelectableObject::id)
            .collect()
    }

    /// Whether more than one live part shares `part_type`.
    #[must_use]
    pub fn has_alternatives_of_type(&self, part_type: &str) -> bool {
        !part_type.is_empty()
            && self
                .iter()
                .filter(|p| p.record().part_type() == part_type)
                .nth(1)
                .is_some()
    }
}
