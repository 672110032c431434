//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repositories translate between Diesel row structs (`models.rs`,
//! `schema.rs`) and domain types; neither leaks past this module. Connections
//! come from a `bb8` pool of `diesel-async` connections, and every database
//! failure is mapped to the owning port's error type.
//!
//! ```ignore
//! use calories::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/calories")).await?;
//! let users = DieselUserRepository::new(pool);
//! ```

mod diesel_calorie_entry_repository;
mod diesel_error_mapping;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_calorie_entry_repository::DieselCalorieEntryRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
