#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("history.empty_selection")]
    EmptySelection,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
