//! Calorie entry and report handlers.
//!
//! ```text
//! POST /addcalories {"user_id":1,"year":2024,"month":5,"day":5,
//!                    "description":"Lunch at restaurant","category":"breakfast","amount":650}
//! GET /report?user_id=1&year=2024&month=5
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::CalorieReportRequest;
use crate::domain::{CalorieEntry, CalorieEntryDraft, MonthlyReport};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{CalorieEntrySchema, ErrorSchema, MonthlyReportSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, require};

/// Request body for `POST /addcalories`.
///
/// Every field is required. Fields are optional here only so a missing field
/// produces a `missing_field` error naming it.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct AddCaloriesRequest {
    #[schema(example = 1)]
    pub user_id: Option<i64>,
    #[schema(example = 2024)]
    pub year: Option<i64>,
    #[schema(example = 5)]
    pub month: Option<i64>,
    #[schema(example = 5)]
    pub day: Option<i64>,
    #[schema(example = "Lunch at restaurant")]
    pub description: Option<String>,
    /// One of `breakfast`, `lunch`, `dinner`, `other`.
    #[schema(example = "breakfast")]
    pub category: Option<String>,
    #[schema(example = 650)]
    pub amount: Option<f64>,
}

impl TryFrom<AddCaloriesRequest> for CalorieEntryDraft {
    type Error = crate::domain::Error;

    fn try_from(value: AddCaloriesRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: require(value.user_id, FieldName::new("user_id"))?,
            year: require(value.year, FieldName::new("year"))?,
            month: require(value.month, FieldName::new("month"))?,
            day: require(value.day, FieldName::new("day"))?,
            description: require(value.description, FieldName::new("description"))?,
            category: require(value.category, FieldName::new("category"))?,
            amount: require(value.amount, FieldName::new("amount"))?,
        })
    }
}

/// Record a calorie entry for an existing user.
#[utoipa::path(
    post,
    path = "/addcalories",
    request_body = AddCaloriesRequest,
    responses(
        (status = 200, description = "The recorded entry", body = CalorieEntrySchema),
        (status = 400, description = "Invalid field or unknown user", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["calories"],
    operation_id = "addCalories"
)]
#[post("/addcalories")]
pub async fn add_calories(
    state: web::Data<HttpState>,
    payload: web::Json<AddCaloriesRequest>,
) -> ApiResult<web::Json<CalorieEntry>> {
    let draft = CalorieEntryDraft::try_from(payload.into_inner())?;
    let entry = state.entries.add_entry(draft).await?;
    Ok(web::Json(entry))
}

/// Query parameters for `GET /report`.
#[derive(Debug, Default, Deserialize, Serialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReportQuery {
    /// External user identifier.
    #[param(example = 1)]
    pub user_id: Option<i64>,
    #[param(example = 2024)]
    pub year: Option<i64>,
    /// Month number, 1 to 12.
    #[param(example = 5)]
    pub month: Option<i64>,
}

impl TryFrom<ReportQuery> for CalorieReportRequest {
    type Error = crate::domain::Error;

    fn try_from(value: ReportQuery) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: require(value.user_id, FieldName::new("user_id"))?,
            year: require(value.year, FieldName::new("year"))?,
            month: require(value.month, FieldName::new("month"))?,
        })
    }
}

/// Group a user's entries for one month by meal category.
///
/// Always returns the four category keys; a user without entries gets four
/// empty lists.
#[utoipa::path(
    get,
    path = "/report",
    params(ReportQuery),
    responses(
        (status = 200, description = "Entries grouped by category", body = MonthlyReportSchema),
        (status = 400, description = "Missing or out-of-range parameter", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["calories"],
    operation_id = "getReport"
)]
#[get("/report")]
pub async fn report(
    state: web::Data<HttpState>,
    query: web::Query<ReportQuery>,
) -> ApiResult<web::Json<MonthlyReport>> {
    let request = CalorieReportRequest::try_from(query.into_inner())?;
    let report = state.reports.build_report(request).await?;
    Ok(web::Json(report))
}

#[cfg(test)]
#[path = "calories_tests.rs"]
mod tests;
