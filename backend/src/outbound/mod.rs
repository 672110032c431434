//! Outbound adapters implementing the driven ports.
//!
//! - **persistence**: PostgreSQL repositories using Diesel.
//! - **memory**: in-process repositories for database-less runs and tests.
//!
//! Adapters only translate between domain types and storage representations.

pub mod memory;
pub mod persistence;
