use business::domain::errors::RepositoryError;
use business::domain::history::errors::HistoryError;
use business::domain::selection::errors::{MealCountError, SelectionError};
use business::domain::selection::value_objects::MealCount;

/// User-facing failure: a short kind plus a readable message.
#[derive(Debug, thiserror::Error)]
#[error("{name}: {message}")]
pub struct CliError {
    pub name: &'static str,
    pub message: String,
}

impl CliError {
    fn new(name: &'static str, message: impl Into<String>) -> Self {
        Self {
            name,
            message: message.into(),
        }
    }
}

pub trait IntoCliError {
    fn into_cli_error(self) -> CliError;
}

impl IntoCliError for RepositoryError {
    fn into_cli_error(self) -> CliError {
        match self {
            RepositoryError::NotFound => CliError::new("StorageError", "dish catalog file not found"),
            RepositoryError::Persistence => {
                CliError::new("StorageError", "data file could not be read or written")
            }
            RepositoryError::InvalidData => {
                CliError::new("StorageError", "data file contains invalid content")
            }
        }
    }
}

impl IntoCliError for MealCountError {
    fn into_cli_error(self) -> CliError {
        match self {
            MealCountError::NotANumber => {
                CliError::new("ValidationError", "the number of dishes must be a whole number")
            }
            MealCountError::NotPositive => {
                CliError::new("ValidationError", "the number of dishes must be positive")
            }
            MealCountError::TooLarge => CliError::new(
                "ValidationError",
                format!("at most {} dishes can be picked at once", MealCount::MAX),
            ),
        }
    }
}

impl IntoCliError for SelectionError {
    fn into_cli_error(self) -> CliError {
        match self {
            SelectionError::InvalidCount => {
                CliError::new("ValidationError", "the number of dishes must be positive")
            }
            SelectionError::EmptyPool | SelectionError::EmptyCatalog => {
                CliError::new("SelectionError", "no dishes available in the catalog")
            }
            SelectionError::NotEnoughDishes {
                requested,
                available,
            } => CliError::new(
                "SelectionError",
                format!("{requested} dishes requested but only {available} available"),
            ),
            SelectionError::Repository(err) => err.into_cli_error(),
        }
    }
}

impl IntoCliError for HistoryError {
    fn into_cli_error(self) -> CliError {
        match self {
            HistoryError::EmptySelection => {
                CliError::new("HistoryError", "nothing was selected, history left untouched")
            }
            HistoryError::Repository(err) => err.into_cli_error(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_describe_missing_dishes() {
        let error = SelectionError::NotEnoughDishes {
            requested: 6,
            available: 5,
        }
        .into_cli_error();

        assert_eq!(error.name, "SelectionError");
        assert_eq!(
            error.to_string(),
            "SelectionError: 6 dishes requested but only 5 available"
        );
    }

    #[test]
    fn should_unwrap_repository_errors() {
        let error = SelectionError::Repository(RepositoryError::NotFound).into_cli_error();

        assert_eq!(error.name, "StorageError");
        assert_eq!(error.message, "dish catalog file not found");
    }

    #[test]
    fn should_map_empty_catalog() {
        let error = SelectionError::EmptyCatalog.into_cli_error();

        assert_eq!(error.message, "no dishes available in the catalog");
    }

    #[test]
    fn should_report_upper_bound_for_oversized_count() {
        let error = "9223372036854775807"
            .parse::<MealCount>()
            .unwrap_err()
            .into_cli_error();

        assert_eq!(
            error.to_string(),
            "ValidationError: at most 366 dishes can be picked at once"
        );
    }

    #[test]
    fn should_map_count_validation() {
        assert_eq!(
            MealCountError::NotPositive.into_cli_error().name,
            "ValidationError"
        );
    }
}
