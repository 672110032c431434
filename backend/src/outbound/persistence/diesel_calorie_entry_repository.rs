//! PostgreSQL-backed `CalorieEntryRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{CalorieEntryPersistenceError, CalorieEntryRepository};
use crate::domain::{CalorieEntry, CalorieEntryDraft, ReportPeriod, UserId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{CalorieEntryRow, NewCalorieEntryRow};
use super::pool::DbPool;
use super::schema::calorie_entries;

/// Diesel-backed entry store. Rows are ordered by their insertion sequence.
#[derive(Clone)]
pub struct DieselCalorieEntryRepository {
    pool: DbPool,
}

impl DieselCalorieEntryRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn diesel_error(error: diesel::result::Error) -> CalorieEntryPersistenceError {
    map_diesel_error(
        error,
        CalorieEntryPersistenceError::query,
        CalorieEntryPersistenceError::connection,
    )
}

fn to_db_int(value: u32) -> Result<i32, CalorieEntryPersistenceError> {
    i32::try_from(value)
        .map_err(|_| CalorieEntryPersistenceError::query(format!("{value} exceeds column range")))
}

fn row_to_entry(row: CalorieEntryRow) -> Result<CalorieEntry, CalorieEntryPersistenceError> {
    CalorieEntry::try_from(CalorieEntryDraft {
        user_id: row.user_id,
        year: i64::from(row.year),
        month: i64::from(row.month),
        day: i64::from(row.day),
        description: row.description,
        category: row.category,
        amount: row.amount,
    })
    .map_err(|err| CalorieEntryPersistenceError::query(format!("stored entry is invalid: {err}")))
}

#[async_trait]
impl CalorieEntryRepository for DieselCalorieEntryRepository {
    async fn insert(&self, entry: &CalorieEntry) -> Result<(), CalorieEntryPersistenceError> {
        let date = entry.date();
        let row = NewCalorieEntryRow {
            id: Uuid::new_v4(),
            user_id: i64::from(entry.user_id()),
            year: date.year(),
            month: to_db_int(date.month())?,
            day: to_db_int(date.day())?,
            description: entry.description().as_ref(),
            category: entry.category().as_str(),
            amount: entry.amount().get(),
        };

        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, CalorieEntryPersistenceError::connection))?;

        diesel::insert_into(calorie_entries::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(diesel_error)
    }

    async fn find_for_period(
        &self,
        user_id: UserId,
        period: ReportPeriod,
    ) -> Result<Vec<CalorieEntry>, CalorieEntryPersistenceError> {
        let month = to_db_int(period.month())?;
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, CalorieEntryPersistenceError::connection))?;

        let rows: Vec<CalorieEntryRow> = calorie_entries::table
            .filter(calorie_entries::user_id.eq(i64::from(user_id)))
            .filter(calorie_entries::year.eq(period.year()))
            .filter(calorie_entries::month.eq(month))
            .order(calorie_entries::seq.asc())
            .select(CalorieEntryRow::as_select())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;

        rows.into_iter().map(row_to_entry).collect()
    }
}
