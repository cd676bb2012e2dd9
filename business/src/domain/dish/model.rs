use std::collections::BTreeSet;

use super::errors::DishError;
use super::value_objects::{Category, PreparationMethod};

/// A dish of the catalog. Its name is its identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Dish {
    pub name: String,
    pub category: Category,
    pub preparation_methods: BTreeSet<PreparationMethod>,
}

impl Dish {
    pub fn new(
        name: impl Into<String>,
        category: Category,
        preparation_methods: impl IntoIterator<Item = PreparationMethod>,
    ) -> Result<Self, DishError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DishError::NameEmpty);
        }

        Ok(Self {
            name: name.trim().to_string(),
            category,
            preparation_methods: preparation_methods.into_iter().collect(),
        })
    }

    pub fn can_be_prepared_with(&self, method: PreparationMethod) -> bool {
        self.preparation_methods.contains(&method)
    }
}

/// Normalizes a list of dishes to their names, keeping catalog order.
pub fn dish_names(dishes: &[Dish]) -> Vec<String> {
    dishes.iter().map(|dish| dish.name.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_dish_with_trimmed_name() {
        // Arrange & Act
        let dish = Dish::new(
            "  Lasagne ",
            Category::ReadyMeal,
            [PreparationMethod::Oven, PreparationMethod::Microwave],
        )
        .unwrap();

        // Assert
        assert_eq!(dish.name, "Lasagne");
        assert!(dish.can_be_prepared_with(PreparationMethod::Oven));
        assert!(!dish.can_be_prepared_with(PreparationMethod::FryingPan));
    }

    #[test]
    fn should_reject_blank_name() {
        let result = Dish::new("   ", Category::Meat, [PreparationMethod::FryingPan]);

        assert!(matches!(result, Err(DishError::NameEmpty)));
    }

    #[test]
    fn should_collapse_duplicated_preparation_methods() {
        let dish = Dish::new(
            "Steak",
            Category::Meat,
            [PreparationMethod::FryingPan, PreparationMethod::FryingPan],
        )
        .unwrap();

        assert_eq!(dish.preparation_methods.len(), 1);
    }

    #[test]
    fn should_list_names_in_catalog_order() {
        let dishes = vec![
            Dish::new("Soup", Category::HotStarter, [PreparationMethod::Microwave]).unwrap(),
            Dish::new("Steak", Category::Meat, [PreparationMethod::FryingPan]).unwrap(),
        ];

        assert_eq!(dish_names(&dishes), vec!["Soup", "Steak"]);
    }
}
