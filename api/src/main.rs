use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use log::{info, warn};

use fm_api::{create_app, AppState};
use fm_infra::{DatabasePool, MfApiClient, MySqlUserRepository};
use fm_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();

    // Initialize logger
    env_logger::init_from_env(
        env_logger::Env::new().default_filter_or(config.environment.default_log_filter()),
    );

    info!("Starting Fundmate API Server ({})", config.environment);

    if config.auth.jwt.is_using_default_secret() {
        warn!("JWT_SECRET is not set; using the built-in development secret");
    }
    config.validate().map_err(anyhow::Error::msg)?;

    let pool = DatabasePool::new(config.database.clone())
        .await
        .context("Failed to connect to the database")?;
    if config.database.run_migrations {
        pool.run_migrations()
            .await
            .context("Failed to run database migrations")?;
    }
    info!("{}", pool.get_statistics());

    let user_repository = Arc::new(MySqlUserRepository::new(pool.get_pool().clone()));
    let market_provider = Arc::new(MfApiClient::new(&config.market_data)?);
    info!("Market data provider: {}", market_provider.base_url());

    let app_state = web::Data::new(AppState::new(user_repository, market_provider, &config));

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await?;

    pool.close().await;
    Ok(())
}
