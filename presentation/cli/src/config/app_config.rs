use std::env;
use std::path::PathBuf;

const DEFAULT_CATALOG_PATH: &str = "data.json";
const DEFAULT_HISTORY_PATH: &str = "history.json";

/// Locations of the data files.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub catalog_path: PathBuf,
    pub history_path: PathBuf,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - MEAL_PLANNER_CATALOG: dish catalog file (default: "data.json")
    /// - MEAL_PLANNER_HISTORY: history file (default: "history.json")
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("MEAL_PLANNER_CATALOG").ok(),
            env::var("MEAL_PLANNER_HISTORY").ok(),
        )
    }

    fn from_values(catalog: Option<String>, history: Option<String>) -> Self {
        Self {
            catalog_path: catalog
                .unwrap_or_else(|| DEFAULT_CATALOG_PATH.to_string())
                .into(),
            history_path: history
                .unwrap_or_else(|| DEFAULT_HISTORY_PATH.to_string())
                .into(),
        }
    }

    /// Command-line paths win over the environment.
    pub fn with_overrides(self, catalog: Option<PathBuf>, history: Option<PathBuf>) -> Self {
        Self {
            catalog_path: catalog.unwrap_or(self.catalog_path),
            history_path: history.unwrap_or(self.history_path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_files_in_working_directory() {
        // Arrange & Act
        let config = AppConfig::from_values(None, None);

        // Assert
        assert_eq!(config.catalog_path, PathBuf::from("data.json"));
        assert_eq!(config.history_path, PathBuf::from("history.json"));
    }

    #[test]
    fn should_prefer_command_line_paths() {
        // Arrange
        let config = AppConfig::from_values(Some("env/data.json".to_string()), None);

        // Act
        let config = config.with_overrides(None, Some(PathBuf::from("cli/history.json")));

        // Assert
        assert_eq!(config.catalog_path, PathBuf::from("env/data.json"));
        assert_eq!(config.history_path, PathBuf::from("cli/history.json"));
    }
}
