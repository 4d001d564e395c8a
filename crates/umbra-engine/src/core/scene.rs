use crate::api::types::EntityId;
use crate::entities::{Entity, Platform};

/// Simple entity arena using a flat Vec.
/// Designed for small-to-medium entity counts (hundreds, not millions).
///
/// Entities are addressed by stable ids and removal preserves insertion
/// order, so anything derived by iterating the scene (occluder lists, wire
/// buffers) is deterministic across runs.
pub struct Scene {
    entities: Vec<(EntityId, Entity)>,
    next_id: u32,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            entities: Vec::with_capacity(64),
            next_id: 1,
        }
    }

    /// Add an entity to the scene. Returns its assigned id.
    pub fn spawn(&mut self, entity: Entity) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.entities.push((id, entity));
        id
    }

    /// Remove an entity by id. Returns the removed entity if the id was
    /// present, preserving the order of the rest.
    pub fn despawn(&mut self, id: EntityId) -> Option<Entity> {
        let idx = self.entities.iter().position(|(eid, _)| *eid == id)?;
        Some(self.entities.remove(idx).1)
    }

    /// Get a reference to an entity by id.
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities
            .iter()
            .find(|(eid, _)| *eid == id)
            .map(|(_, e)| e)
    }

    /// Get a mutable reference to an entity by id.
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities
            .iter_mut()
            .find(|(eid, _)| *eid == id)
            .map(|(_, e)| e)
    }

    /// Iterate over all entities in spawn order.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().map(|(_, e)| e)
    }

    /// Iterate over all entities mutably, in spawn order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut().map(|(_, e)| e)
    }

    /// Iterate over the platforms in spawn order.
    pub fn platforms(&self) -> impl Iterator<Item = &Platform> {
        self.iter().filter_map(|e| match e {
            Entity::Platform(p) => Some(p),
            _ => None,
        })
    }

    /// Number of entities in the scene.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Clear all entities. Id assignment continues from where it was.
    pub fn clear(&mut self) {
        self.entities.clear();
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
