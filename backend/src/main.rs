//! Backend entry-point: loads settings, prepares the store and serves the
//! REST API, health probes and OpenAPI docs.

mod server;

use actix_web::web;
use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use pharmacy_backend::inbound::http::health::HealthState;
use pharmacy_backend::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use pharmacy_backend::settings::AppSettings;

use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load().map_err(|e| eyre!("failed to load settings: {e}"))?;
    let bind_addr = settings.bind_addr()?;
    let mut config = ServerConfig::new(bind_addr, settings.page_limits()?);

    if let Some(database_url) = settings.database_url() {
        if settings.run_migrations() {
            let applied = run_pending_migrations(database_url).await?;
            info!(applied, "database migrations applied");
        }
        let pool = DbPool::new(PoolConfig::new(database_url))
            .await
            .wrap_err("failed to build database pool")?;
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)
        .wrap_err_with(|| format!("failed to bind {bind_addr}"))?;
    info!(%bind_addr, "pharmacy backend listening");
    server.await.wrap_err("server terminated with an error")
}
