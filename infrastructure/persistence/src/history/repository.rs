use std::path::PathBuf;

use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::history::model::HistoryEntry;
use business::domain::history::repository::HistoryRepository;

use super::entity::HistoryEntity;
use crate::json_file::{JsonFileError, read_json, write_json};

/// History stored as a JSON object. A missing file is created empty on first
/// read.
pub struct HistoryRepositoryJson {
    path: PathBuf,
}

impl HistoryRepositoryJson {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn load(&self) -> Result<HistoryEntity, RepositoryError> {
        match read_json::<HistoryEntity>(&self.path).await {
            Ok(entity) => Ok(entity),
            Err(JsonFileError::NotFound) => {
                tracing::info!(path = %self.path.display(), "Creating empty history file");
                let empty = HistoryEntity::default();
                write_json(&self.path, &empty).await?;
                Ok(empty)
            }
            Err(err) => {
                tracing::error!(path = %self.path.display(), "Cannot load history: {}", err);
                Err(err.into())
            }
        }
    }
}

#[async_trait]
impl HistoryRepository for HistoryRepositoryJson {
    async fn get_all(&self) -> Result<Vec<HistoryEntry>, RepositoryError> {
        self.load().await?.into_domain()
    }

    async fn append(&self, entry: &HistoryEntry) -> Result<(), RepositoryError> {
        let mut entries = self.load().await?.into_domain()?;
        // Same-second runs share a key: the newer run replaces the older one
        // and becomes the last entry.
        entries.retain(|existing| existing.timestamp != entry.timestamp);
        entries.push(entry.clone());

        write_json(&self.path, &HistoryEntity::from_domain(&entries))
            .await
            .map_err(|err| {
                tracing::error!(path = %self.path.display(), "Cannot write history: {}", err);
                RepositoryError::Persistence
            })
    }
}
