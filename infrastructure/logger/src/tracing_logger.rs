use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// `Logger` port backed by `tracing`. Every event carries the `meal_planner`
/// target so `RUST_LOG=meal_planner=debug` isolates business logs.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "meal_planner", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "meal_planner", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "meal_planner", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "meal_planner", "{}", message);
    }
}
