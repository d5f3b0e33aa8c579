use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sakar_lead_api::config::Config;
use sakar_lead_api::handlers::{router, AppState};
use sakar_lead_api::webhook_client::WebhookClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sakar_lead_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize webhook client if a forwarding target is configured.
    // Missing configuration is a per-request 500, not a startup failure.
    let webhook = match config.lead_webhook_url.clone() {
        Some(url) => match WebhookClient::new(url.clone(), config.lead_api_key.clone()) {
            Ok(client) => {
                tracing::info!("Lead webhook client initialized: {}", url);
                Some(client)
            }
            Err(e) => {
                tracing::error!("Failed to initialize webhook client: {}", e);
                None
            }
        },
        None => None,
    };

    // Build application state
    let app_state = Arc::new(AppState {
        config: config.clone(),
        webhook,
    });

    let app = router(app_state)
        .layer(
            // Lead submissions are tiny; anything bigger is not a form post.
            ServiceBuilder::new().layer(RequestBodyLimitLayer::new(64 * 1024)),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
