use std::path::PathBuf;

use clap::Parser;

use business::domain::selection::value_objects::SelectionStrategy;

#[derive(Parser, Debug)]
#[command(name = "meal-planner")]
#[command(about = "Pick the next dishes to cook and remember what was picked")]
pub struct Args {
    /// Number of dishes to pick (positive integer)
    #[arg(allow_negative_numbers = true)]
    pub count: String,

    /// Plain random pick over the whole catalog, ignoring the last run
    #[arg(long)]
    pub random: bool,

    /// Dish catalog file (overrides MEAL_PLANNER_CATALOG)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// History file (overrides MEAL_PLANNER_HISTORY)
    #[arg(long)]
    pub history: Option<PathBuf>,
}

impl Args {
    pub fn strategy(&self) -> SelectionStrategy {
        if self.random {
            SelectionStrategy::Random
        } else {
            SelectionStrategy::Intelligent
        }
    }
}
