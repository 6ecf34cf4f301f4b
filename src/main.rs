use std::error::Error;
use std::sync::Arc;

use mergington_activities::adapters::{
    build_router, ActivityAppState, InMemoryActivityRepository, YamlCatalogLoader,
};
use mergington_activities::config::AppConfig;
use mergington_activities::domain::activity::{default_catalog, Activity};
use mergington_activities::telemetry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    telemetry::init_tracing(&config);

    let activities = load_catalog(&config).await?;
    tracing::info!(activities = activities.len(), "Activity catalog loaded");

    let repository = Arc::new(InMemoryActivityRepository::with_activities(activities));
    if config.features.enforce_capacity {
        tracing::info!("Capacity enforcement enabled for signups");
    }
    let state = ActivityAppState::new(repository, config.features.enforce_capacity);
    let app = build_router(state, &config);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(address = %listener.local_addr()?, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn load_catalog(config: &AppConfig) -> Result<Vec<Activity>, Box<dyn Error>> {
    match &config.catalog.seed_path {
        Some(path) => {
            tracing::info!(path = %path, "Loading activity catalog from file");
            Ok(YamlCatalogLoader::new(path).load().await?)
        }
        None => Ok(default_catalog()?),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
