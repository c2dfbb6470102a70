//! Showcase API server.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use showcase::adapters::auth::{InMemoryIdentityProvider, JwtSessionValidator};
use showcase::adapters::http::{app_router, AppState, RouterConfig};
use showcase::adapters::memory::{
    load_seed, DirectorySeed, InMemoryProfileRepository, InMemoryProjectRepository,
};
use showcase::adapters::supabase::{
    SupabaseClient, SupabaseIdentityProvider, SupabaseProfileRepository,
    SupabaseProjectRepository,
};
use showcase::config::{AppConfig, BackendProvider, ValidationError};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let state = build_state(&config)?;
    let router_config = RouterConfig {
        request_timeout: config.server.request_timeout(),
        cors_origins: config.server.cors_origins_list(),
    };
    let app = app_router(state, &router_config);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        backend = ?config.backend.provider,
        "Showcase API listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    if config.is_production() {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn build_state(config: &AppConfig) -> Result<AppState, Box<dyn std::error::Error>> {
    match config.backend.provider {
        BackendProvider::Memory => {
            let seed = match &config.directory.seed_path {
                Some(path) => load_seed(path)?,
                None => DirectorySeed::default(),
            };
            tracing::info!(
                accounts = seed.accounts.len(),
                profiles = seed.profiles.len(),
                projects = seed.projects.len(),
                "Using in-memory backend"
            );

            let identity =
                Arc::new(InMemoryIdentityProvider::new().with_seed_accounts(&seed.accounts));
            Ok(AppState::new(
                Arc::new(InMemoryProfileRepository::with_profiles(seed.profiles)),
                Arc::new(InMemoryProjectRepository::with_projects(seed.projects)),
                identity.clone(),
                identity,
            ))
        }
        BackendProvider::Supabase => {
            let supabase = config
                .backend
                .supabase_config()
                .ok_or(ValidationError::MissingRequired("BACKEND__SUPABASE_URL"))?;
            let jwt = config
                .auth
                .jwt_config()
                .ok_or(ValidationError::MissingRequired("AUTH__JWT_SECRET"))?;
            tracing::info!(url = %supabase.url, "Using hosted backend");

            let client = SupabaseClient::new(supabase)?;
            Ok(AppState::new(
                Arc::new(SupabaseProfileRepository::new(client.clone())),
                Arc::new(SupabaseProjectRepository::new(client.clone())),
                Arc::new(SupabaseIdentityProvider::new(client)),
                Arc::new(JwtSessionValidator::new(jwt)),
            ))
        }
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received Ctrl+C, shutting down"),
        Err(e) => tracing::error!(error = %e, "Failed to listen for shutdown signal"),
    }
}
