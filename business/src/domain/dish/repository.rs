use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Dish;

/// Read-only access to the dish catalog.
#[async_trait]
pub trait DishRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Dish>, RepositoryError>;
}
