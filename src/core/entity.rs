//! Game entity system with simple integer IDs
//!
//! Characters and ability instances get stable `u32` ids for the whole game;
//! entities are never deallocated, a destroyed minion just resets its slot.
//! Distinct newtypes prevent mixing up the different id spaces.

use crate::HearthError;
use crate::Result;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// Id of a battlefield character (hero or minion slot)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterId(u32);

impl CharacterId {
    pub fn new(id: u32) -> Self {
        CharacterId(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Id of an ability instance
///
/// Every summon instantiates fresh ability instances from the card template,
/// so two copies of the same card never share an `AbilityId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AbilityId(u32);

impl AbilityId {
    pub fn new(id: u32) -> Self {
        AbilityId(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for AbilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Id of a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(u32);

impl PlayerId {
    pub fn new(id: u32) -> Self {
        PlayerId(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Typed id key for an [`EntityStore`]
pub trait EntityKey: Copy + Eq + std::hash::Hash {
    fn from_raw(raw: u32) -> Self;
    fn raw(self) -> u32;
}

impl EntityKey for CharacterId {
    fn from_raw(raw: u32) -> Self {
        CharacterId(raw)
    }

    fn raw(self) -> u32 {
        self.0
    }
}

impl EntityKey for AbilityId {
    fn from_raw(raw: u32) -> Self {
        AbilityId(raw)
    }

    fn raw(self) -> u32 {
        self.0
    }
}

impl EntityKey for PlayerId {
    fn from_raw(raw: u32) -> Self {
        PlayerId(raw)
    }

    fn raw(self) -> u32 {
        self.0
    }
}

/// Central storage for one kind of game entity
///
/// Provides lookup by typed id and hands out fresh ids. Uses FxHashMap for
/// fast hashing of integer keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>"))]
pub struct EntityStore<K: EntityKey, T> {
    entities: FxHashMap<u32, T>,
    next_id: u32,
    #[serde(skip)]
    _key: PhantomData<fn() -> K>,
}

impl<K: EntityKey, T> EntityStore<K, T> {
    pub fn new() -> Self {
        EntityStore {
            entities: FxHashMap::default(),
            next_id: 0,
            _key: PhantomData,
        }
    }

    /// Generate a new unique id
    pub fn alloc(&mut self) -> K {
        let id = K::from_raw(self.next_id);
        self.next_id += 1;
        id
    }

    /// Insert an entity with a specific id
    pub fn insert(&mut self, id: K, entity: T) {
        self.entities.insert(id.raw(), entity);
    }

    /// Allocate an id and insert in one step
    pub fn add(&mut self, entity: T) -> K {
        let id = self.alloc();
        self.insert(id, entity);
        id
    }

    /// Get an entity by id
    pub fn get(&self, id: K) -> Result<&T> {
        self.entities
            .get(&id.raw())
            .ok_or(HearthError::EntityNotFound(id.raw()))
    }

    /// Get a mutable reference to an entity
    pub fn get_mut(&mut self, id: K) -> Result<&mut T> {
        self.entities
            .get_mut(&id.raw())
            .ok_or(HearthError::EntityNotFound(id.raw()))
    }

    /// Check if an entity exists
    pub fn contains(&self, id: K) -> bool {
        self.entities.contains_key(&id.raw())
    }

    /// Iterate over all entities
    pub fn iter(&self) -> impl Iterator<Item = (K, &T)> {
        self.entities.iter().map(|(raw, e)| (K::from_raw(*raw), e))
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl<K: EntityKey, T> Default for EntityStore<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_store() {
        let mut store: EntityStore<CharacterId, String> = EntityStore::new();
        let id1 = store.add("first".to_string());
        let id2 = store.add("second".to_string());

        assert_eq!(id1.as_u32(), 0);
        assert_eq!(id2.as_u32(), 1);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(id1).unwrap(), "first");
        assert_eq!(store.get(id2).unwrap(), "second");
        assert!(store.get(CharacterId::new(999)).is_err());
    }

    #[test]
    fn test_ids_are_distinct_types() {
        // CharacterId and AbilityId share raw values but not meaning
        let c = CharacterId::new(7);
        let a = AbilityId::new(7);
        assert_eq!(c.as_u32(), a.as_u32());
    }
}
