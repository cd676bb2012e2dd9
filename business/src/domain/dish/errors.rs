#[derive(Debug, thiserror::Error)]
pub enum DishError {
    #[error("dish.name_empty")]
    NameEmpty,
}
