use serde::Deserialize;

use business::domain::dish::model::Dish;
use business::domain::dish::value_objects::{Category, PreparationMethod};
use business::domain::errors::RepositoryError;

/// A catalog row as written in `data.json`.
#[derive(Debug, Deserialize)]
pub struct DishEntity {
    pub name: String,
    pub category: String,
    #[serde(rename = "preparation method", default)]
    pub preparation_methods: Vec<String>,
}

impl DishEntity {
    pub fn into_domain(self) -> Result<Dish, RepositoryError> {
        let category = normalize(&self.category)
            .parse::<Category>()
            .map_err(|err| invalid(&self.name, &err))?;
        let methods = self
            .preparation_methods
            .iter()
            .map(|method| normalize(method).parse::<PreparationMethod>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| invalid(&self.name, &err))?;

        Dish::new(self.name.as_str(), category, methods)
            .map_err(|err| invalid(&self.name, &err.to_string()))
    }
}

/// Accepts `Hot Starter`, `hot-starter` and `hot_starter` alike.
fn normalize(value: &str) -> String {
    value.trim().to_lowercase().replace([' ', '-'], "_")
}

fn invalid(name: &str, reason: &str) -> RepositoryError {
    tracing::warn!(dish = name, "Rejected catalog entry: {}", reason);
    RepositoryError::InvalidData
}
