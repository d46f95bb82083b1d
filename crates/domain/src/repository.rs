//! Repository ports.
//!
//! Adapters in the infrastructure layer implement these traits and translate
//! between entities and their storage records.

use async_trait::async_trait;
use thiserror::Error;

use crate::entity::Entity;
use crate::error::DomainError;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No stored entity matches the requested id.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// The write would take over a record owned by another entity.
    #[error("{0}")]
    Conflict(String),

    /// A stored record could not be turned back into a valid entity.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The storage backend failed. The message is the backend's own.
    #[error("{0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl RepositoryError {
    /// Wraps a storage backend error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        RepositoryError::Storage(Box::new(err))
    }

    /// Returns true if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound(_))
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

/// Generic persistence contract for an aggregate.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Persists a new entity.
    async fn create(&self, entity: &T) -> Result<()>;

    /// Overwrites the stored state of an existing entity.
    async fn update(&self, entity: &T) -> Result<()>;

    /// Loads an entity by id.
    ///
    /// Fails with [`RepositoryError::NotFound`] when nothing is stored under `id`.
    async fn find(&self, id: &T::Id) -> Result<T>;

    /// Loads every stored entity in storage order.
    async fn find_all(&self) -> Result<Vec<T>>;
}
