//! Lookup of bundle entities by id in the bundle's flat collections.

use crate::bundle::{Bundle, HealthMonitor, Listener, Member, Pool};
use crate::error::{EntityKind, TranslateError};

/// A bundle entity addressable by id.
pub trait Entity {
    const KIND: EntityKind;

    fn id(&self) -> &str;
}

impl Entity for Pool {
    const KIND: EntityKind = EntityKind::Pool;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Member {
    const KIND: EntityKind = EntityKind::Member;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Listener {
    const KIND: EntityKind = EntityKind::Listener;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for HealthMonitor {
    const KIND: EntityKind = EntityKind::HealthMonitor;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Return the first entity in `collection` whose id equals `id`.
pub fn find<'a, T: Entity>(collection: &'a [T], id: &str) -> Result<&'a T, TranslateError> {
    collection
        .iter()
        .find(|entity| entity.id() == id)
        .ok_or_else(|| TranslateError::not_found(T::KIND, id))
}

impl Bundle {
    pub fn pool(&self, id: &str) -> Result<&Pool, TranslateError> {
        find(&self.pools, id)
    }

    pub fn member(&self, id: &str) -> Result<&Member, TranslateError> {
        find(&self.members, id)
    }

    pub fn listener(&self, id: &str) -> Result<&Listener, TranslateError> {
        find(&self.listeners, id)
    }

    pub fn health_monitor(&self, id: &str) -> Result<&HealthMonitor, TranslateError> {
        find(&self.healthmonitors, id)
    }
}
