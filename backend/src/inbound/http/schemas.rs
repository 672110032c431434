//! OpenAPI schema definitions for domain types.
//!
//! Domain types do not derive `ToSchema`; these wrappers mirror their wire
//! shape and register under the domain type's name.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// A calorie entry referenced a user that does not exist.
    #[schema(rename = "reference_not_found")]
    ReferenceNotFound,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "reference_not_found")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "User not found.")]
    message: String,
    /// Correlation identifier, echoed in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Field-level context, e.g. `{"field": "month", "code": "invalid_month"}`.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = crate::domain::User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    #[schema(example = 1, minimum = 1)]
    id: u32,
    #[schema(example = "john")]
    first_name: String,
    #[schema(example = "doe")]
    last_name: String,
    /// Long-form birthday.
    #[schema(example = "February 20th, 1985")]
    birthday: String,
}

/// OpenAPI schema for [`crate::domain::MealCategory`].
#[derive(ToSchema)]
#[schema(as = crate::domain::MealCategory)]
pub enum MealCategorySchema {
    #[schema(rename = "breakfast")]
    Breakfast,
    #[schema(rename = "lunch")]
    Lunch,
    #[schema(rename = "dinner")]
    Dinner,
    #[schema(rename = "other")]
    Other,
}

/// OpenAPI schema for [`crate::domain::CalorieEntry`].
#[derive(ToSchema)]
#[schema(as = crate::domain::CalorieEntry)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CalorieEntrySchema {
    #[schema(example = 1)]
    user_id: u32,
    #[schema(example = 2024)]
    year: i32,
    #[schema(example = 5)]
    month: u32,
    #[schema(example = 5)]
    day: u32,
    #[schema(example = "Lunch at restaurant")]
    description: String,
    category: MealCategorySchema,
    #[schema(example = 650)]
    amount: f64,
}

/// OpenAPI schema for [`crate::domain::ReportItem`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ReportItem)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ReportItemSchema {
    #[schema(example = 5)]
    day: u32,
    #[schema(example = "Lunch at restaurant")]
    description: String,
    #[schema(example = 650)]
    amount: f64,
}

/// OpenAPI schema for [`crate::domain::MonthlyReport`].
#[derive(ToSchema)]
#[schema(as = crate::domain::MonthlyReport)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct MonthlyReportSchema {
    breakfast: Vec<ReportItemSchema>,
    lunch: Vec<ReportItemSchema>,
    dinner: Vec<ReportItemSchema>,
    other: Vec<ReportItemSchema>,
}
