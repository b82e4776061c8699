use samaritan_ai::OpenAiCompatClient;
use samaritan_location::{LocationResolver, NominatimClient};
use samaritan_server::config::ServerConfig;
use samaritan_server::db::{MIGRATOR, TurnRepository};
use samaritan_server::routes::{AppState, router};
use samaritan_triage::TriageOrchestrator;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment
    let config = ServerConfig::from_env().expect("failed to load configuration");
    tracing::info!("Loaded configuration");

    // Create database connection pool
    let db_pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    // Run migrations
    tracing::info!("Running database migrations...");
    MIGRATOR
        .run(&db_pool)
        .await
        .expect("failed to run migrations");

    // Wire the orchestrator's collaborators explicitly
    let store = Arc::new(TurnRepository::new(db_pool));
    let backend =
        Arc::new(OpenAiCompatClient::new(config.llm).expect("failed to build llm client"));
    let geocoder =
        Arc::new(NominatimClient::new(config.geocoder).expect("failed to build geocoder"));
    let locator = Arc::new(LocationResolver::new(geocoder));
    let orchestrator = Arc::new(TriageOrchestrator::new(store, backend, locator));

    let app = router(AppState { orchestrator });

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .expect("failed to bind to address");

    tracing::info!("listening on http://{}", config.listen_addr);

    axum::serve(listener, app.into_make_service())
        .await
        .expect("server error");
}
