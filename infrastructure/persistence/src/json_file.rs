use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::fs;

use business::domain::errors::RepositoryError;

#[derive(Error, Debug)]
pub enum JsonFileError {
    #[error("json_file.not_found")]
    NotFound,
    #[error("json_file.io_error")]
    Io(#[from] std::io::Error),
    #[error("json_file.invalid_json")]
    InvalidJson(#[from] serde_json::Error),
}

impl From<JsonFileError> for RepositoryError {
    fn from(error: JsonFileError) -> Self {
        match error {
            JsonFileError::NotFound => RepositoryError::NotFound,
            JsonFileError::Io(_) => RepositoryError::Persistence,
            JsonFileError::InvalidJson(_) => RepositoryError::InvalidData,
        }
    }
}

/// Reads and decodes a whole JSON file.
pub async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, JsonFileError> {
    let content = match fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => return Err(JsonFileError::NotFound),
        Err(err) => return Err(err.into()),
    };

    Ok(serde_json::from_str(&content)?)
}

/// Rewrites the whole file. Not atomic: concurrent writers race and the last
/// one wins.
pub async fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), JsonFileError> {
    let content = serde_json::to_string_pretty(value)?;
    fs::write(path, content).await?;
    Ok(())
}
