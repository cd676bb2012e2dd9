use std::collections::{BTreeMap, HashSet};

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

use crate::domain::dish::model::Dish;
use crate::domain::dish::value_objects::{Category, PreparationMethod};

use super::errors::SelectionError;
use super::random::random_selection;

/// Picks `nb` dishes, skipping the ones served in the previous run and
/// spreading the picks over categories and preparation methods.
///
/// Steps:
/// - Balanced pass over the eligible dishes (catalog minus `recent`), one
///   (category, method) pair at a time.
/// - Top-up from the eligible dishes not picked yet.
/// - Top-up with repeated eligible dishes.
///
/// Dishes of `recent` are never picked unless every catalog dish is in it, in
/// which case the whole catalog is the pool. The result holds exactly `nb`
/// names for any non-empty catalog.
pub fn intelligent_selection<R>(
    catalog: &[Dish],
    recent: &[String],
    nb: usize,
    rng: &mut R,
) -> Result<Vec<String>, SelectionError>
where
    R: Rng + ?Sized,
{
    if catalog.is_empty() {
        return Err(SelectionError::EmptyCatalog);
    }
    if nb == 0 {
        return Err(SelectionError::InvalidCount);
    }

    let recent: HashSet<&str> = recent.iter().map(String::as_str).collect();
    let mut eligible: Vec<&Dish> = catalog
        .iter()
        .filter(|dish| !recent.contains(dish.name.as_str()))
        .collect();
    if eligible.is_empty() {
        eligible = catalog.iter().collect();
    }

    let mut selection = balanced_pass(&eligible, nb, rng);
    top_up(&mut selection, &eligible, nb, rng);

    if selection.len() < nb {
        let names: Vec<&str> = eligible.iter().map(|dish| dish.name.as_str()).collect();
        selection.extend(random_selection(&names, nb - selection.len(), true, rng)?);
    }

    selection.shuffle(rng);
    Ok(selection)
}

/// Visits every (category, method) pair once, diagonally: the k-th category
/// starts at the k-th method, so the first picks cover distinct categories
/// and distinct methods.
fn balanced_pass<R>(eligible: &[&Dish], nb: usize, rng: &mut R) -> Vec<String>
where
    R: Rng + ?Sized,
{
    let mut by_category: BTreeMap<Category, Vec<&Dish>> = BTreeMap::new();
    let mut by_method: BTreeMap<PreparationMethod, Vec<&Dish>> = BTreeMap::new();
    for &dish in eligible {
        by_category.entry(dish.category).or_default().push(dish);
        for method in &dish.preparation_methods {
            by_method.entry(*method).or_default().push(dish);
        }
    }

    let mut selection: Vec<String> = Vec::new();
    if by_category.is_empty() || by_method.is_empty() {
        return selection;
    }

    let categories: Vec<&Vec<&Dish>> = by_category.values().collect();
    let methods: Vec<PreparationMethod> = by_method.keys().copied().collect();
    let quota = (nb / categories.len()).max(1);

    for offset in 0..methods.len() {
        for (index, dishes) in categories.iter().enumerate() {
            if selection.len() >= nb {
                return selection;
            }
            let method = methods[(index + offset) % methods.len()];
            let candidates: Vec<&str> = dishes
                .iter()
                .filter(|dish| dish.can_be_prepared_with(method))
                .map(|dish| dish.name.as_str())
                .filter(|name| !selection.iter().any(|chosen| chosen == name))
                .collect();

            let amount = quota.min(candidates.len()).min(nb - selection.len());
            selection.extend(
                candidates
                    .choose_multiple(rng, amount)
                    .map(|name| name.to_string()),
            );
        }
    }

    selection
}

fn top_up<R>(selection: &mut Vec<String>, pool: &[&Dish], nb: usize, rng: &mut R)
where
    R: Rng + ?Sized,
{
    if selection.len() >= nb {
        return;
    }
    let remaining: Vec<&str> = pool
        .iter()
        .map(|dish| dish.name.as_str())
        .filter(|name| !selection.iter().any(|chosen| chosen == name))
        .collect();

    let amount = (nb - selection.len()).min(remaining.len());
    selection.extend(
        remaining
            .choose_multiple(rng, amount)
            .map(|name| name.to_string()),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use PreparationMethod::{FryingPan, Microwave, Oven};

    fn dish(name: &str, category: Category, methods: &[PreparationMethod]) -> Dish {
        Dish::new(name, category, methods.iter().copied()).unwrap()
    }

    /// One dish per (category, method) pair.
    fn full_grid() -> Vec<Dish> {
        let mut catalog = Vec::new();
        for category in Category::ALL {
            for method in PreparationMethod::ALL {
                catalog.push(dish(&format!("{category}-{method}"), category, &[method]));
            }
        }
        catalog
    }

    fn small_catalog() -> Vec<Dish> {
        vec![
            dish("A", Category::Meat, &[FryingPan]),
            dish("B", Category::Meat, &[Oven]),
            dish("C", Category::HotStarter, &[Microwave, Oven]),
            dish("D", Category::ReadyMeal, &[Microwave]),
            dish("E", Category::ReadyMeal, &[Oven, FryingPan]),
        ]
    }

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn should_fail_on_empty_catalog() {
        let mut rng = StdRng::seed_from_u64(0);

        let result = intelligent_selection(&[], &[], 3, &mut rng);

        assert!(matches!(result, Err(SelectionError::EmptyCatalog)));
    }

    #[test]
    fn should_fail_on_zero_count() {
        let mut rng = StdRng::seed_from_u64(0);

        let result = intelligent_selection(&small_catalog(), &[], 0, &mut rng);

        assert!(matches!(result, Err(SelectionError::InvalidCount)));
    }

    #[test]
    fn should_cover_every_category_and_method() {
        // Arrange
        let catalog = full_grid();

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);

            // Act
            let selection = intelligent_selection(&catalog, &[], 3, &mut rng).unwrap();

            // Assert
            let picked: Vec<&Dish> = catalog
                .iter()
                .filter(|dish| selection.contains(&dish.name))
                .collect();
            let categories: HashSet<Category> = picked.iter().map(|dish| dish.category).collect();
            let methods: HashSet<PreparationMethod> = picked
                .iter()
                .flat_map(|dish| dish.preparation_methods.iter().copied())
                .collect();
            assert_eq!(categories.len(), 3);
            assert_eq!(methods.len(), 3);
        }
    }

    #[test]
    fn should_never_repeat_last_run_when_alternatives_exist() {
        let catalog = small_catalog();
        let recent = names(&["A", "B"]);

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);

            let selection = intelligent_selection(&catalog, &recent, 3, &mut rng).unwrap();

            assert_eq!(selection.len(), 3);
            assert!(!selection.contains(&"A".to_string()));
            assert!(!selection.contains(&"B".to_string()));
        }
    }

    #[test]
    fn should_repeat_eligible_dishes_instead_of_last_run() {
        let catalog = small_catalog();
        let recent = names(&["A", "B", "C"]);

        for seed in 0..20 {
            // Arrange
            let mut rng = StdRng::seed_from_u64(seed);

            // Act
            let selection = intelligent_selection(&catalog, &recent, 4, &mut rng).unwrap();

            // Assert
            assert_eq!(selection.len(), 4);
            assert!(selection.iter().all(|name| name == "D" || name == "E"));
            assert!(selection.contains(&"D".to_string()));
            assert!(selection.contains(&"E".to_string()));
        }
    }

    #[test]
    fn should_fall_back_to_whole_catalog_when_last_run_used_every_dish() {
        let catalog = small_catalog();
        let recent = names(&["A", "B", "C", "D", "E"]);
        let mut rng = StdRng::seed_from_u64(6);

        let selection = intelligent_selection(&catalog, &recent, 3, &mut rng).unwrap();

        let distinct: HashSet<&String> = selection.iter().collect();
        assert_eq!(distinct.len(), 3);
        assert!(selection.iter().all(|name| recent.contains(name)));
    }

    #[test]
    fn should_repeat_dishes_when_catalog_is_smaller_than_request() {
        let catalog = small_catalog();
        let mut rng = StdRng::seed_from_u64(9);

        let selection = intelligent_selection(&catalog, &[], 7, &mut rng).unwrap();

        assert_eq!(selection.len(), 7);
        for dish in &catalog {
            assert!(selection.contains(&dish.name));
        }
    }

    #[test]
    fn should_ignore_history_names_missing_from_catalog() {
        let catalog = small_catalog();
        let recent = names(&["Removed dish"]);
        let mut rng = StdRng::seed_from_u64(2);

        let selection = intelligent_selection(&catalog, &recent, 5, &mut rng).unwrap();

        let distinct: HashSet<&String> = selection.iter().collect();
        assert_eq!(distinct.len(), 5);
    }

    #[test]
    fn should_still_pick_dishes_without_preparation_method() {
        let catalog = vec![dish("Salad", Category::HotStarter, &[])];
        let mut rng = StdRng::seed_from_u64(4);

        let selection = intelligent_selection(&catalog, &[], 1, &mut rng).unwrap();

        assert_eq!(selection, names(&["Salad"]));
    }

    proptest! {
        #[test]
        fn prop_exact_length_and_never_recent_while_eligible_dishes_remain(
            seed in any::<u64>(),
            nb in 1usize..12,
            recent_mask in proptest::collection::vec(any::<bool>(), 9),
        ) {
            let catalog = full_grid();
            let recent: Vec<String> = catalog
                .iter()
                .zip(&recent_mask)
                .filter(|(_, is_recent)| **is_recent)
                .map(|(dish, _)| dish.name.clone())
                .collect();
            let eligible = catalog.len() - recent.len();
            let mut rng = StdRng::seed_from_u64(seed);

            let selection = intelligent_selection(&catalog, &recent, nb, &mut rng).unwrap();

            prop_assert_eq!(selection.len(), nb);
            prop_assert!(selection.iter().all(|name| catalog.iter().any(|dish| &dish.name == name)));
            if eligible > 0 {
                prop_assert!(selection.iter().all(|name| !recent.contains(name)));
            }
            if nb <= eligible {
                let distinct: HashSet<&String> = selection.iter().collect();
                prop_assert_eq!(distinct.len(), nb);
            }
        }
    }
}
