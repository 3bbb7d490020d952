//! # In-Memory Pack Repository
//!
//! A [`PackRepository`] over a `BTreeMap` keyed by pack id. Used when no
//! database is configured; state does not survive restarts.
//!
//! The lock is `parking_lot`, never held across an `.await`, and
//! non-poisonable: a panicking writer cannot wedge the store.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::model::Pack;
use crate::repository::{PackRepository, RepositoryError};

/// Thread-safe, cloneable in-memory pack store. Clones share the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryPackRepository {
    packs: Arc<RwLock<BTreeMap<String, Pack>>>,
}

impl MemoryPackRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored packs.
    pub fn len(&self) -> usize {
        self.packs.read().len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl PackRepository for MemoryPackRepository {
    async fn add(&self, pack: Pack) -> Result<(), RepositoryError> {
        self.packs.write().insert(pack.id.clone(), pack);
        Ok(())
    }

    async fn remove(&self, id: &str) -> Result<(), RepositoryError> {
        self.packs
            .write()
            .remove(id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }

    async fn get(&self, id: &str) -> Result<Pack, RepositoryError> {
        self.packs
            .read()
            .get(id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn find_all(&self) -> Result<Vec<Pack>, RepositoryError> {
        Ok(self.packs.read().values().cloned().collect())
    }
}
