use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::history::errors::HistoryError;
use crate::domain::history::model::HistoryEntry;
use crate::domain::history::repository::HistoryRepository;
use crate::domain::history::use_cases::record::RecordSelectionUseCase;
use crate::domain::logger::Logger;

pub struct RecordSelectionUseCaseImpl {
    pub repository: Arc<dyn HistoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RecordSelectionUseCase for RecordSelectionUseCaseImpl {
    async fn execute(&self, dishes: Vec<String>) -> Result<HistoryEntry, HistoryError> {
        let entry = HistoryEntry::now(dishes)?;
        self.logger.info(&format!(
            "Recording {} dishes under {}",
            entry.dishes.len(),
            entry.key()
        ));
        self.repository.append(&entry).await?;
        Ok(entry)
    }
}
