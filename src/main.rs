//! Project assistant server binary.

use std::error::Error;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use project_assistant::adapters::ai::{MistralConfig, MistralProvider};
use project_assistant::adapters::auth::{HttpAuthConfig, HttpSessionValidator};
use project_assistant::adapters::http::middleware::AuthState;
use project_assistant::adapters::http::{build_app_router, AssistantHandlers};
use project_assistant::adapters::project_service::{self, HttpProjectStorage};
use project_assistant::application::{ChatWithAssistantHandler, GenerateDescriptionHandler};
use project_assistant::config::{AppConfig, ConfigError};
use project_assistant::domain::wizard::ConversationEngine;
use project_assistant::ports::{AIProvider, ProjectStorage};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Configuration ---
    let config = AppConfig::load()?;
    config.validate().map_err(ConfigError::from)?;

    // --- Tracing ---
    init_tracing(&config);
    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        environment = ?config.server.environment,
        "Loaded configuration"
    );

    // --- Collaborators ---
    let api_key = config.ai.api_key.clone().unwrap_or_default();
    let ai_provider: Arc<dyn AIProvider> = Arc::new(MistralProvider::new(
        MistralConfig::new(api_key)
            .with_model(config.ai.model.clone())
            .with_base_url(config.ai.base_url.clone())
            .with_timeout(config.ai.timeout()),
    )?);

    let validator: AuthState = Arc::new(HttpSessionValidator::new(
        HttpAuthConfig::new(config.auth.service_url.clone()).with_timeout(config.auth.timeout()),
    )?);

    let storage: Arc<dyn ProjectStorage> = Arc::new(HttpProjectStorage::new(
        project_service::ProjectServiceConfig::new(config.project_service.base_url.clone())
            .with_timeout(config.project_service.timeout()),
    )?);

    // --- Handlers ---
    let engine = ConversationEngine::new(ai_provider);
    let describe_handler = Arc::new(GenerateDescriptionHandler::new(engine.generator().clone()));
    let chat_handler = Arc::new(ChatWithAssistantHandler::new(engine, storage));
    let handlers = AssistantHandlers::new(chat_handler, describe_handler);

    // --- Router ---
    let app = build_app_router(handlers, validator, &config.server);

    // --- Start server ---
    let addr = config.server.socket_addr()?;
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Graceful shutdown complete");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Wait for SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
