use async_trait::async_trait;

use crate::domain::selection::errors::SelectionError;
use crate::domain::selection::value_objects::{MealCount, SelectionStrategy};

pub struct SelectDishesParams {
    pub count: MealCount,
    pub strategy: SelectionStrategy,
}

#[async_trait]
pub trait SelectDishesUseCase: Send + Sync {
    async fn execute(&self, params: SelectDishesParams) -> Result<Vec<String>, SelectionError>;
}
