use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{error, info};
use trips::config::AppConfig;
use trips::db::init_pool;
use trips::error::AppError;
use trips::routes::{create_router, ROUTE_TABLE};
use trips::services::store::{SqlTripStore, TripRepository};
use trips::state::AppState;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_logging();

    let config = AppConfig::from_env()?;
    let db = init_pool(&config.database_url).await?;
    info!(backend = config.backend.as_str(), "connected to database");

    let store = SqlTripStore::new(db, config.backend);
    if let Err(err) = store.ensure_schema().await {
        error!("schema sync failed: {err:?}");
        return Err(err);
    }

    if config.admin_token.is_none() {
        info!("ADMIN_TOKEN not set, /createDB and /destroyAll are disabled");
    }

    let state = AppState::new(config.clone(), Arc::new(store));
    let app = create_router(state);

    for (method, path) in ROUTE_TABLE {
        info!("{method:<6} {path}");
    }

    let listener = TcpListener::bind(config.listen_addr).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);
    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,trips=debug,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
