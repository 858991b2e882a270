// Port for the durable entertainer records.
//
// Boundaries
// - No concrete input or output here. The in-memory and PostgreSQL adapters implement it.
// - Every mutation is a single atomic store operation.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::entertainers::core::entertainer::{
    Entertainer, EntertainerId, EntertainerUpdate, NewEntertainer,
};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no entertainer row affected for id {id}")]
    NoRowsAffected { id: EntertainerId },

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait EntertainerStore: Send + Sync {
    async fn get(&self, id: EntertainerId) -> Result<Option<Entertainer>, StoreError>;

    async fn exists(&self, id: EntertainerId) -> Result<bool, StoreError>;

    /// Assigns a fresh id that was never handed out before.
    async fn insert(&self, entertainer: NewEntertainer) -> Result<Entertainer, StoreError>;

    /// Conditional write: fails with [`StoreError::NoRowsAffected`] when no row matched.
    async fn update(&self, update: &EntertainerUpdate) -> Result<(), StoreError>;

    /// Returns `false` when there was nothing to delete.
    async fn delete(&self, id: EntertainerId) -> Result<bool, StoreError>;
}
