//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

use crate::domain::ports::{UserPersistenceError, UserRepository, assign_user_ids};
use crate::domain::{NewUser, User, UserId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewUserRow, UserRow};
use super::pool::DbPool;
use super::schema::users;

/// Diesel-backed identity store.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn diesel_error(error: diesel::result::Error) -> UserPersistenceError {
    map_diesel_error(
        error,
        UserPersistenceError::query,
        UserPersistenceError::connection,
    )
}

fn row_to_user(row: UserRow) -> Result<User, UserPersistenceError> {
    User::try_from_parts(row.id, row.first_name, row.last_name, row.birthday)
        .map_err(|err| UserPersistenceError::query(format!("stored user is invalid: {err}")))
}

fn user_to_row(user: &User) -> NewUserRow<'_> {
    NewUserRow {
        id: i64::from(user.id()),
        first_name: user.first_name().as_ref(),
        last_name: user.last_name().as_ref(),
        birthday: user.birthday(),
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, UserPersistenceError::connection))?;

        let row: Option<UserRow> = users::table
            .filter(users::id.eq(i64::from(id)))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;

        row.map(row_to_user).transpose()
    }

    async fn replace_all(&self, pending: &[NewUser]) -> Result<Vec<User>, UserPersistenceError> {
        // The whole batch is checked before the transaction opens.
        let assigned = assign_user_ids(pending)?;
        // Rows borrow from a copy; the borrow lives as long as the connection.
        let staged = assigned.clone();
        let rows: Vec<NewUserRow<'_>> = staged.iter().map(user_to_row).collect();

        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, UserPersistenceError::connection))?;

        conn.transaction(|conn| {
            async move {
                diesel::delete(users::table).execute(conn).await?;
                if !rows.is_empty() {
                    diesel::insert_into(users::table)
                        .values(&rows)
                        .execute(conn)
                        .await?;
                }
                Ok::<_, diesel::result::Error>(())
            }
            .scope_boxed()
        })
        .await
        .map_err(diesel_error)?;

        Ok(assigned)
    }
}
