use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

use recipe_proxy::backend::{Backend, HuggingFace, HuggingFaceConfig};
use recipe_proxy::config::Config;
use recipe_proxy::server::{build_router, cors::CorsPolicy};

#[tokio::main]
async fn main() {
    let config = Config::parse();

    // Configure logging
    match config.log_format.as_str() {
        "json" => {
            tracing_subscriber::fmt().json().init();
        }
        _ => {
            tracing_subscriber::fmt().init();
        }
    }

    // Validate required config
    let api_key = match config.hf_access_token {
        Some(token) => token,
        None => {
            error!("HF_ACCESS_TOKEN is required");
            std::process::exit(1);
        }
    };

    // HTTP client for upstream generation calls
    let http_client = match reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(30))
        .pool_idle_timeout(Duration::from_secs(90))
        .pool_max_idle_per_host(10)
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "failed to build HTTP client");
            std::process::exit(1);
        }
    };

    let backend: Arc<dyn Backend> = Arc::new(HuggingFace::new(
        HuggingFaceConfig {
            base_url: Some(config.hf_base_url.clone()),
            api_key,
            model: config.model.clone(),
            timeout_secs: config.upstream_timeout_secs,
        },
        http_client,
    ));

    info!(backend = backend.name(), model = %config.model, "using backend");

    let cors_policy = Arc::new(CorsPolicy::new(config.client_url.clone()));
    if config.client_url.is_none() {
        info!("CLIENT_URL not set — cross-origin requests allowed from any origin");
    }

    let app = build_router(backend, cors_policy, config.secret_key.clone());

    let addr = ("0.0.0.0", config.port);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(port = config.port, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    info!(port = config.port, "server starting");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(error = %e, "server error");
        std::process::exit(1);
    }

    info!("server stopped");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to listen for ctrl+c");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to listen for SIGTERM")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received SIGINT, shutting down"),
        _ = terminate => info!("received SIGTERM, shutting down"),
    }
}
