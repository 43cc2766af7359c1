use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ocs_report::config::{Config, ServerConfig};
use ocs_report::gateways::{OcsClient, OcsGateway};
use ocs_report::middleware::{query_error_handler, ErrorHandler, RequestId};
use ocs_report::AppState;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    init_tracing(&config.app.log_level);
    config.validate().context("Configuration validation failed")?;

    tracing::info!("Starting OCS usage report service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());
    if config.is_production() && config.server.cors_allowed_origin.is_none() {
        tracing::warn!("CORS_ALLOWED_ORIGIN not set, accepting requests from any origin");
    }

    let client = OcsClient::new(&config.ocs).context("Failed to create OCS client")?;
    tracing::info!(
        host = client.host(),
        timeout_secs = config.ocs.timeout_secs,
        "OCS client initialized"
    );

    let gateway: Arc<dyn OcsGateway> = Arc::new(client);
    let state = AppState::new(gateway, config.report.clone());

    tracing::info!(
        default_account_id = config.report.default_account_id,
        max_concurrent = config.report.max_concurrent,
        "Report settings loaded"
    );

    // Start HTTP server
    let server_config = config.server.clone();
    let bind_address = server_config.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(ErrorHandler)
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .wrap(cors(&server_config))
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .configure(|cfg| state.configure(cfg))
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await.context("HTTP server error")
}

/// `RUST_LOG` overrides `LOG_LEVEL`; `LOG_FORMAT=json` switches to one JSON
/// object per line
fn init_tracing(log_level: &str) {
    let json = std::env::var("LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("ocs_report={},actix_web=info", log_level).into()),
        )
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(tracing_subscriber::fmt::layer))
        .init();
}

fn cors(server: &ServerConfig) -> Cors {
    match &server.cors_allowed_origin {
        Some(origin) => Cors::default()
            .allowed_origin(origin)
            .allowed_methods(vec!["GET", "POST"])
            .allow_any_header()
            .max_age(3600),
        None => Cors::permissive(),
    }
}
