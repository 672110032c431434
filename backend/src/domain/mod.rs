//! Domain primitives, aggregates and services.
//!
//! Purpose: define the strongly typed calorie-tracking model used by the API
//! and persistence layers, the ports at the hexagonal boundary, and the
//! services implementing the driving ports. Types are immutable once
//! validated; invariants and serialisation contracts live in each type's
//! Rustdoc.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - User / UserId / NewUser: identity store records.
//! - CalorieEntry / CalorieEntryDraft / MealCategory: entry writer inputs.
//! - MonthlyReport / ReportPeriod: report builder output.

pub mod birthday;
pub mod calorie_entry;
pub mod calorie_entry_service;
pub mod calorie_report_service;
pub mod error;
pub mod meal_category;
pub mod ports;
pub mod report;
pub mod trace_id;
pub mod user;
pub mod user_seeding;
pub mod user_service;

pub use self::birthday::{format_birthday, ordinal_suffix};
pub use self::calorie_entry::{
    CalorieAmount, CalorieEntry, CalorieEntryDraft, CalorieValidationError, Description,
    EntryDate,
};
pub use self::calorie_entry_service::CalorieEntryService;
pub use self::calorie_report_service::CalorieReportService;
pub use self::error::{Error, ErrorCode};
pub use self::meal_category::{MealCategory, ParseMealCategoryError};
pub use self::report::{MonthlyReport, ReportItem, ReportPeriod};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{NewUser, PersonName, User, UserId, UserValidationError};
pub use self::user_seeding::{SeedUserError, SeedUserRecord, UserSeeder, default_seed_users};
pub use self::user_service::UserDirectoryService;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use calories::domain::{ApiResult, Error};
///
/// fn lookup() -> ApiResult<u32> {
///     Err(Error::not_found("user not found"))
/// }
/// assert!(lookup().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
