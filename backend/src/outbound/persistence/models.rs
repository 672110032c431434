//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use chrono::NaiveDate;
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{calorie_entries, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub birthday: NaiveDate,
}

/// Insertable struct for creating user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: i64,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub birthday: NaiveDate,
}

/// Row struct for reading from the calorie_entries table.
///
/// Omits `id` and `seq`; both stay inside the adapter.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = calorie_entries)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CalorieEntryRow {
    pub user_id: i64,
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub description: String,
    pub category: String,
    pub amount: f64,
}

/// Insertable struct for recording a calorie entry. `seq` is generated.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = calorie_entries)]
pub(crate) struct NewCalorieEntryRow<'a> {
    pub id: Uuid,
    pub user_id: i64,
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub description: &'a str,
    pub category: &'a str,
    pub amount: f64,
}
