//! In-process adapters for the identity and entry stores.
//!
//! Used when no database is configured and as deterministic doubles in
//! HTTP tests. State lives behind a `Mutex`; guards are never held across an
//! `.await`.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::domain::ports::{
    CalorieEntryPersistenceError, CalorieEntryRepository, UserPersistenceError, UserRepository,
    assign_user_ids,
};
use crate::domain::{CalorieEntry, NewUser, ReportPeriod, User, UserId};

fn poisoned<T>(_: PoisonError<T>) -> String {
    "in-memory store lock poisoned".to_owned()
}

/// Identity store kept in a vector in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    /// Start from an explicit set of users.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: Mutex::new(users.into_iter().collect()),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<User>>, UserPersistenceError> {
        self.users
            .lock()
            .map_err(|err| UserPersistenceError::connection(poisoned(err)))
    }

    /// Number of stored users.
    pub fn len(&self) -> usize {
        self.users.lock().map_or(0, |users| users.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        Ok(self.lock()?.iter().find(|user| user.id() == id).cloned())
    }

    async fn replace_all(&self, pending: &[NewUser]) -> Result<Vec<User>, UserPersistenceError> {
        let assigned = assign_user_ids(pending)?;
        let mut users = self.lock()?;
        users.clone_from(&assigned);
        Ok(assigned)
    }
}

/// Entry store kept in a vector in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryCalorieEntryRepository {
    entries: Mutex<Vec<CalorieEntry>>,
}

impl InMemoryCalorieEntryRepository {
    fn lock(&self) -> Result<MutexGuard<'_, Vec<CalorieEntry>>, CalorieEntryPersistenceError> {
        self.entries
            .lock()
            .map_err(|err| CalorieEntryPersistenceError::connection(poisoned(err)))
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.lock().map_or(0, |entries| entries.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CalorieEntryRepository for InMemoryCalorieEntryRepository {
    async fn insert(&self, entry: &CalorieEntry) -> Result<(), CalorieEntryPersistenceError> {
        self.lock()?.push(entry.clone());
        Ok(())
    }

    async fn find_for_period(
        &self,
        user_id: UserId,
        period: ReportPeriod,
    ) -> Result<Vec<CalorieEntry>, CalorieEntryPersistenceError> {
        Ok(self
            .lock()?
            .iter()
            .filter(|entry| entry.user_id() == user_id && period.contains(entry))
            .cloned()
            .collect())
    }
}
