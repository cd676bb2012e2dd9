use async_trait::async_trait;

use crate::domain::history::errors::HistoryError;
use crate::domain::history::model::HistoryEntry;

#[async_trait]
pub trait RecordSelectionUseCase: Send + Sync {
    async fn execute(&self, dishes: Vec<String>) -> Result<HistoryEntry, HistoryError>;
}
