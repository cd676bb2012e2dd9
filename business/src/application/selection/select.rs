use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::dish::model::dish_names;
use crate::domain::dish::repository::DishRepository;
use crate::domain::history::model::most_recent_dishes;
use crate::domain::history::repository::HistoryRepository;
use crate::domain::logger::Logger;
use crate::domain::selection::errors::SelectionError;
use crate::domain::selection::intelligent::intelligent_selection;
use crate::domain::selection::random::random_selection;
use crate::domain::selection::use_cases::select::{SelectDishesParams, SelectDishesUseCase};
use crate::domain::selection::value_objects::SelectionStrategy;

pub struct SelectDishesUseCaseImpl {
    pub dish_repository: Arc<dyn DishRepository>,
    pub history_repository: Arc<dyn HistoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SelectDishesUseCase for SelectDishesUseCaseImpl {
    async fn execute(&self, params: SelectDishesParams) -> Result<Vec<String>, SelectionError> {
        let requested = params.count.get();
        self.logger.info(&format!(
            "Selecting {} dishes with {} strategy",
            requested, params.strategy
        ));

        let catalog = self.dish_repository.get_all().await?;
        if catalog.is_empty() {
            self.logger.error("Dish catalog is empty");
            return Err(SelectionError::EmptyCatalog);
        }

        let recent = match params.strategy {
            SelectionStrategy::Intelligent => {
                let history = self.history_repository.get_all().await?;
                most_recent_dishes(&history)
            }
            SelectionStrategy::Random => Vec::new(),
        };

        let mut rng = rand::rng();
        let selection = match params.strategy {
            SelectionStrategy::Intelligent => {
                self.logger.debug(&format!(
                    "Excluding {} dishes served in the last run",
                    recent.len()
                ));
                intelligent_selection(&catalog, &recent, requested, &mut rng)?
            }
            SelectionStrategy::Random => {
                let names = dish_names(&catalog);
                if requested > names.len() {
                    self.logger.warn(&format!(
                        "Requested {} dishes but only {} are available, returning all of them",
                        requested,
                        names.len()
                    ));
                }
                random_selection(&names, requested.min(names.len()), false, &mut rng)?
            }
        };

        self.logger
            .info(&format!("Selected {} dishes", selection.len()));
        Ok(selection)
    }
}
