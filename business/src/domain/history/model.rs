use chrono::{Local, NaiveDateTime, SubsecRound};

use super::errors::HistoryError;

/// Format of history keys, e.g. `16-10-2026 19:30:05`.
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// One recorded run: the dishes chosen at a given local time.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub timestamp: NaiveDateTime,
    pub dishes: Vec<String>,
}

impl HistoryEntry {
    /// Stamps a selection with the current local time, truncated to the second.
    pub fn now(dishes: Vec<String>) -> Result<Self, HistoryError> {
        Self::at(Local::now().naive_local().trunc_subsecs(0), dishes)
    }

    pub fn at(timestamp: NaiveDateTime, dishes: Vec<String>) -> Result<Self, HistoryError> {
        if dishes.is_empty() {
            return Err(HistoryError::EmptySelection);
        }
        Ok(Self { timestamp, dishes })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(timestamp: NaiveDateTime, dishes: Vec<String>) -> Self {
        Self { timestamp, dishes }
    }

    pub fn key(&self) -> String {
        format_timestamp(&self.timestamp)
    }
}

pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
}

/// Dishes of the most recently inserted entry, empty when there is no history.
pub fn most_recent_dishes(history: &[HistoryEntry]) -> Vec<String> {
    history
        .last()
        .map(|entry| entry.dishes.clone())
        .unwrap_or_default()
}
