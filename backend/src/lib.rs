//! Calorie tracking service library.
//!
//! Hexagonal layout: `domain` holds entities, services and ports;
//! `inbound` and `outbound` hold the HTTP and storage adapters.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
