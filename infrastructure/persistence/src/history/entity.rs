use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use business::domain::errors::RepositoryError;
use business::domain::history::model::{HistoryEntry, parse_timestamp};

/// `history.json` layout: `{"DD-MM-YYYY HH:MM:SS": ["dish", ...], ...}`.
/// Key order is insertion order.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryEntity(pub Map<String, Value>);

impl HistoryEntity {
    pub fn into_domain(self) -> Result<Vec<HistoryEntry>, RepositoryError> {
        self.0
            .into_iter()
            .map(|(key, value)| {
                let timestamp = parse_timestamp(&key).map_err(|_| {
                    tracing::warn!(key = %key, "Unreadable history timestamp");
                    RepositoryError::InvalidData
                })?;
                let dishes: Vec<String> = serde_json::from_value(value).map_err(|_| {
                    tracing::warn!(key = %key, "History entry is not a list of dish names");
                    RepositoryError::InvalidData
                })?;
                Ok(HistoryEntry::from_repository(timestamp, dishes))
            })
            .collect()
    }

    pub fn from_domain(entries: &[HistoryEntry]) -> Self {
        let mut map = Map::new();
        for entry in entries {
            let dishes = entry.dishes.iter().cloned().map(Value::String).collect();
            map.insert(entry.key(), Value::Array(dishes));
        }
        Self(map)
    }
}
