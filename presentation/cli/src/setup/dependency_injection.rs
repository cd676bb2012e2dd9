use std::sync::Arc;

use logger::TracingLogger;
use persistence::dish::repository::DishRepositoryJson;
use persistence::history::repository::HistoryRepositoryJson;

use business::application::history::record::RecordSelectionUseCaseImpl;
use business::application::selection::select::SelectDishesUseCaseImpl;
use business::domain::history::use_cases::record::RecordSelectionUseCase;
use business::domain::selection::use_cases::select::SelectDishesUseCase;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub select_dishes: Arc<dyn SelectDishesUseCase>,
    pub record_selection: Arc<dyn RecordSelectionUseCase>,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let dish_repository = Arc::new(DishRepositoryJson::new(&config.catalog_path));
        let history_repository = Arc::new(HistoryRepositoryJson::new(&config.history_path));

        let select_dishes = Arc::new(SelectDishesUseCaseImpl {
            dish_repository,
            history_repository: history_repository.clone(),
            logger: logger.clone(),
        });
        let record_selection = Arc::new(RecordSelectionUseCaseImpl {
            repository: history_repository,
            logger,
        });

        Self {
            select_dishes,
            record_selection,
        }
    }
}
