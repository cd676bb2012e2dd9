use clap::Parser;
use dotenvy::dotenv;

mod args;
mod config;
mod error_mapper;
mod setup;

use args::Args;
use business::domain::selection::use_cases::select::SelectDishesParams;
use business::domain::selection::value_objects::MealCount;
use config::app_config::AppConfig;
use error_mapper::IntoCliError;
use setup::dependency_injection::DependencyContainer;

/// CLI Entry Point
///
/// Picks dishes from the catalog, records them in the history file and prints
/// them. Any failure exits with status 1.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables (may carry RUST_LOG)
    dotenv().ok();

    // 2. Initialize tracing on stderr so stdout only carries the dishes
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // 3. Parse arguments, usage errors exit with status 1
    let args = Args::try_parse().unwrap_or_else(|err| {
        let code = if err.use_stderr() { 1 } else { 0 };
        let _ = err.print();
        std::process::exit(code);
    });
    let count: MealCount = args.count.parse().map_err(IntoCliError::into_cli_error)?;

    // 4. Load configuration
    let config = AppConfig::from_env().with_overrides(args.catalog.clone(), args.history.clone());
    tracing::debug!(?config, "Configuration loaded");

    // 5. Wire dependencies
    let container = DependencyContainer::new(&config);

    // 6. Select, then record
    let dishes = container
        .select_dishes
        .execute(SelectDishesParams {
            count,
            strategy: args.strategy(),
        })
        .await
        .map_err(IntoCliError::into_cli_error)?;
    container
        .record_selection
        .execute(dishes.clone())
        .await
        .map_err(IntoCliError::into_cli_error)?;

    println!("Here are {} dishes:", dishes.len());
    for dish in &dishes {
        println!("{}", dish);
    }

    Ok(())
}
