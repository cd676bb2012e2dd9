use std::path::PathBuf;

use async_trait::async_trait;

use business::domain::dish::model::Dish;
use business::domain::dish::repository::DishRepository;
use business::domain::errors::RepositoryError;

use super::entity::DishEntity;
use crate::json_file::read_json;

/// Dish catalog stored as a JSON array.
pub struct DishRepositoryJson {
    path: PathBuf,
}

impl DishRepositoryJson {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DishRepository for DishRepositoryJson {
    async fn get_all(&self) -> Result<Vec<Dish>, RepositoryError> {
        let entities: Vec<DishEntity> = read_json(&self.path).await.map_err(|err| {
            tracing::error!(path = %self.path.display(), "Cannot load catalog: {}", err);
            RepositoryError::from(err)
        })?;

        tracing::debug!(count = entities.len(), "Loaded dish catalog");
        entities.into_iter().map(DishEntity::into_domain).collect()
    }
}
