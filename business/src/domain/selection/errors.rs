use crate::domain::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    #[error("selection.invalid_count")]
    InvalidCount,
    #[error("selection.empty_pool")]
    EmptyPool,
    #[error("selection.empty_catalog")]
    EmptyCatalog,
    #[error("selection.not_enough_dishes")]
    NotEnoughDishes { requested: usize, available: usize },
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MealCountError {
    #[error("meal_count.not_a_number")]
    NotANumber,
    #[error("meal_count.not_positive")]
    NotPositive,
    #[error("meal_count.too_large")]
    TooLarge,
}
