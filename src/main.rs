//! Contact Manager Server - Main entry point

use anyhow::Result;
use contact_manager_server::repositories::{
    ContactRepository, MemoryContactRepository, MemoryUserRepository, UserRepository,
};
use contact_manager_server::services::{
    ContactService, ContactServiceImpl, UserService, UserServiceImpl,
};
use contact_manager_server::{AppState, Config, TokenService};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // The signing key is built once here and shared, immutable, for the
    // process lifetime by both issuance and validation.
    let tokens = Arc::new(TokenService::new(
        config.jwt_secret.as_bytes(),
        config.token_ttl_hours,
    ));

    let user_repo = Arc::new(MemoryUserRepository::new()) as Arc<dyn UserRepository>;
    let contact_repo = Arc::new(MemoryContactRepository::new()) as Arc<dyn ContactRepository>;

    let user_service =
        Arc::new(UserServiceImpl::new(user_repo.clone(), tokens.clone())) as Arc<dyn UserService>;
    let contact_service = Arc::new(ContactServiceImpl::new(contact_repo, user_repo))
        as Arc<dyn ContactService>;

    let state = AppState::new(user_service, contact_service, tokens);

    info!(
        "Starting contact manager server on {} (token TTL: {}h)",
        config.bind_addr, config.token_ttl_hours
    );

    contact_manager_server::run_server(state, &config.bind_addr).await?;

    info!("Contact manager server shutdown complete");
    Ok(())
}
