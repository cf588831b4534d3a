use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use pilgrim_stays::config::{LoggingSettings, Settings};
use pilgrim_stays::core::CatalogStore;
use pilgrim_stays::routes::{self, AppState};
use pilgrim_stays::services::{EnvAccessKey, FormRelayClient};
use std::sync::Arc;
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

fn init_logging(settings: &LoggingSettings) {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| settings.level.clone());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| settings.format.clone());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load();
    init_logging(
        &settings
            .as_ref()
            .map(|s| s.logging.clone())
            .unwrap_or_default(),
    );

    info!("Starting Pilgrim Stays service...");

    let settings = settings.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    info!("Configuration loaded successfully");

    // The site keeps working with an empty catalog when the data file is unusable
    let catalog = Arc::new(CatalogStore::load_or_empty(&settings.catalog.path));

    let relay = FormRelayClient::new(
        settings.relay.endpoint.clone(),
        Box::new(EnvAccessKey::new(settings.relay.access_key_var.clone())),
        settings.relay_timeout_secs(),
    )
    .map_err(|e| {
        error!("Failed to create form relay client: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e)
    })?;

    info!(
        "Form relay targets {} (access key from ${})",
        relay.endpoint(),
        settings.relay.access_key_var
    );

    let app_state = AppState {
        catalog,
        relay: Arc::new(relay),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
