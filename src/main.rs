use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pronunciation_service::{build_router, config_manager::Config, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("pronunciation_service=debug,tower_http=debug")),
        )
        .init();

    // Load configuration: explicit path first, then the working directory
    let config_paths: Vec<String> = vec![
        std::env::var("CONFIG_PATH").ok(),
        Some("conf.yaml".to_string()),
        Some("conf.json".to_string()),
    ]
    .into_iter()
    .flatten()
    .collect();

    let (config, loaded_path) = Config::from_sources(&config_paths)?;
    match loaded_path {
        Some(path) => info!("Loaded configuration from: {}", path),
        None => info!(
            "No config file found (tried {:?}), using defaults and environment",
            config_paths
        ),
    }

    let staging_dir = config.system_config.staging_path();
    std::fs::create_dir_all(&staging_dir)?;
    info!("Staging uploads in {}", staging_dir.display());

    let app_state = AppState::new(config.clone())?;
    info!("Using assessor {}", app_state.assessor.describe());

    let app = build_router(app_state);

    let addr = config.system_config.bind_address();
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
