//! Calorie service entry-point: loads settings, prepares storage and serves
//! the REST API.

mod server;

use std::ffi::OsString;

use actix_web::web;
use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use calories::inbound::http::health::HealthState;
use calories::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use calories::settings::AppSettings;
use server::{ServerConfig, create_server, seed_default_users};

/// Apply migrations off the async runtime, then open the pool.
async fn connect(database_url: &str, max_size: u32) -> Result<DbPool> {
    let url = database_url.to_owned();
    tokio::task::spawn_blocking(move || run_pending_migrations(&url))
        .await
        .wrap_err("migration task panicked")??;

    DbPool::new(PoolConfig::new(database_url).with_max_size(max_size))
        .await
        .wrap_err("failed to build database pool")
}

/// Merge defaults, configuration files, `CALORIES_*` variables and flags.
fn load_settings(args: Vec<OsString>) -> Result<AppSettings> {
    AppSettings::load_from_iter(args).wrap_err("failed to load settings")
}

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

    let settings = load_settings(std::env::args_os().collect())?;
    let bind_addr = settings.bind_addr()?;

    let mut config = ServerConfig::new(bind_addr);
    if let Some(url) = settings.database_url() {
        let pool = connect(url, settings.pool_max_size()).await?;
        if settings.seed_users {
            let seeded = seed_default_users(&pool)
                .await
                .map_err(|err| eyre!("seeding users failed: {err}"))?;
            info!(count = seeded.len(), "default users seeded");
        }
        config = config.with_db_pool(pool);
    } else if settings.seed_users {
        warn!("seed_users ignored: in-memory stores always start with the default users");
    }

    let health_state = web::Data::new(HealthState::new());
    info!(bind_addr = %config.bind_addr(), "starting calories service");
    create_server(health_state, config)?.await?;
    Ok(())
}
