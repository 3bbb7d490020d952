//! # Pack Repository Capability
//!
//! The storage interface the API consumes. Any backing store (in-memory map,
//! PostgreSQL, document database) can satisfy it.
//!
//! Absence is reported with the [`RepositoryError::NotFound`] sentinel so
//! callers can branch on it with `matches!` instead of inspecting messages.
//! Every other failure is [`RepositoryError::Storage`], carrying the
//! underlying message for server-side logs.

use async_trait::async_trait;
use thiserror::Error;

use crate::model::Pack;

/// Errors returned by a [`PackRepository`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// No pack exists with the requested id.
    #[error("pack not found")]
    NotFound,

    /// The backing store failed. Displays as the bare underlying message.
    #[error("{0}")]
    Storage(String),
}

impl RepositoryError {
    /// Wrap any displayable backend error as a storage failure.
    pub fn storage(err: impl std::fmt::Display) -> Self {
        Self::Storage(err.to_string())
    }

    /// Whether this is the not-found sentinel.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

/// Persistent storage for packs.
///
/// Implementations must be safe to share across request handlers. The API
/// imposes no locking of its own: concurrent writes with the same id are
/// resolved by the implementation.
#[async_trait]
pub trait PackRepository: Send + Sync {
    /// Store a pack under its id, replacing any pack with the same id.
    async fn add(&self, pack: Pack) -> Result<(), RepositoryError>;

    /// Delete the pack with the given id.
    ///
    /// Returns [`RepositoryError::NotFound`] if no such pack exists.
    async fn remove(&self, id: &str) -> Result<(), RepositoryError>;

    /// Fetch the pack with the given id.
    ///
    /// Returns [`RepositoryError::NotFound`] if no such pack exists.
    async fn get(&self, id: &str) -> Result<Pack, RepositoryError>;

    /// Fetch every stored pack, ordered by id.
    async fn find_all(&self) -> Result<Vec<Pack>, RepositoryError>;
}
