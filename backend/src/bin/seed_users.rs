//! Replace the stored users with a seed list.
//!
//! Reads a JSON array of `{id?, first_name, last_name, birthday}` records, or
//! uses the built-in default users when no file is given.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Context, Result, eyre};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use calories::domain::{SeedUserRecord, UserSeeder, default_seed_users};
use calories::outbound::persistence::{
    DbPool, DieselUserRepository, PoolConfig, run_pending_migrations,
};

#[derive(Debug, Parser)]
#[command(name = "seed-users", about = "Replace stored users with a seed list")]
struct Args {
    /// PostgreSQL connection string.
    #[arg(long)]
    database_url: String,
    /// JSON seed file; defaults to the built-in users.
    #[arg(long)]
    file: Option<PathBuf>,
}

fn load_records(path: Option<&PathBuf>) -> Result<Vec<SeedUserRecord>> {
    let Some(path) = path else {
        return Ok(default_seed_users());
    };
    let raw = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read seed file {}", path.display()))?;
    serde_json::from_str(&raw)
        .wrap_err_with(|| format!("failed to parse seed file {}", path.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args = Args::parse();
    let records = load_records(args.file.as_ref())?;

    let url = args.database_url.clone();
    tokio::task::spawn_blocking(move || run_pending_migrations(&url))
        .await
        .wrap_err("migration task panicked")??;

    let pool = DbPool::new(PoolConfig::new(&args.database_url).with_max_size(1))
        .await
        .wrap_err("failed to build database pool")?;
    let seeder = UserSeeder::new(Arc::new(DieselUserRepository::new(pool)));
    let users = seeder
        .seed(records)
        .await
        .map_err(|err| eyre!("seeding users failed: {err}"))?;

    for user in &users {
        println!(
            "{}\t{} {}\t{}",
            user.id().get(),
            user.first_name().as_ref(),
            user.last_name().as_ref(),
            user.birthday()
        );
    }
    Ok(())
}
