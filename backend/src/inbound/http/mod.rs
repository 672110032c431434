//! HTTP inbound adapter exposing the calorie REST endpoints.

pub mod about;
pub mod calories;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod users;
pub mod validation;

pub use error::ApiResult;

use actix_web::web;

/// Register every API handler plus extractor error handling.
///
/// Callers supply `web::Data<HttpState>` and `web::Data<HealthState>`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(validation::json_config())
        .app_data(validation::query_config())
        .service(users::get_user)
        .service(calories::add_calories)
        .service(calories::report)
        .service(about::about)
        .service(health::ready)
        .service(health::live);
}
