use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::HistoryEntry;

/// Append-only log of past selections, in insertion order.
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<HistoryEntry>, RepositoryError>;
    async fn append(&self, entry: &HistoryEntry) -> Result<(), RepositoryError>;
}
