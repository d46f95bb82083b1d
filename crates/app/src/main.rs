//! Checkout entry point.
//!
//! Opens the configured database, applies migrations and logs what is
//! stored.

use app::{AppError, Config, LogFormat};
use domain::OrderService;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Load configuration and initialize tracing
    let config = Config::from_env();
    init_tracing(&config);

    // 2. Open the database and bring the schema up to date
    let pool = infrastructure::connect(&config.database()).await?;
    infrastructure::run_migrations(&pool).await?;

    // 3. Build the application
    let app = app::sqlite_app(pool, app::default_dispatcher());

    // 4. Report stored aggregates
    let customers = app.customers().await?;
    let products = app.products().await?;
    let orders = app.orders().await?;
    tracing::info!(
        database_url = %config.database_url,
        customers = customers.len(),
        products = products.len(),
        orders = orders.len(),
        revenue = %OrderService::total(&orders),
        "checkout database ready"
    );

    Ok(())
}
