//! Entry writer: validates drafts and records them against existing users.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use super::user_service::map_user_persistence_error;
use crate::domain::ports::{
    CalorieEntryCommand, CalorieEntryPersistenceError, CalorieEntryRepository, UserRepository,
};
use crate::domain::{CalorieEntry, CalorieEntryDraft, CalorieValidationError, Error};

pub(crate) fn map_entry_persistence_error(error: CalorieEntryPersistenceError) -> Error {
    match error {
        CalorieEntryPersistenceError::Connection { message } => {
            Error::internal(format!("calorie entry repository unavailable: {message}"))
        }
        CalorieEntryPersistenceError::Query { message } => {
            Error::internal(format!("calorie entry repository error: {message}"))
        }
    }
}

fn unknown_user() -> Error {
    Error::reference_not_found("User not found.")
}

/// Service implementing [`CalorieEntryCommand`].
///
/// Order of checks: field validation, then the user lookup, then the write.
/// A failure at any step leaves the entry store untouched. A `user_id` that
/// cannot name any user is reported like an unknown user.
#[derive(Clone)]
pub struct CalorieEntryService<U, E> {
    user_repo: Arc<U>,
    entry_repo: Arc<E>,
}

impl<U, E> CalorieEntryService<U, E> {
    /// Create a new service over the identity and entry stores.
    pub fn new(user_repo: Arc<U>, entry_repo: Arc<E>) -> Self {
        Self {
            user_repo,
            entry_repo,
        }
    }
}

#[async_trait]
impl<U, E> CalorieEntryCommand for CalorieEntryService<U, E>
where
    U: UserRepository,
    E: CalorieEntryRepository,
{
    async fn add_entry(&self, draft: CalorieEntryDraft) -> Result<CalorieEntry, Error> {
        let entry = CalorieEntry::try_from(draft).map_err(|err| {
            if let CalorieValidationError::InvalidUserId { value } = err {
                debug!(user_id = value, "calorie entry for out-of-range user id");
                return unknown_user();
            }
            debug!(field = err.field(), code = err.code(), "calorie entry rejected");
            Error::from(err)
        })?;

        let user_id = entry.user_id();
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await
            .map_err(map_user_persistence_error)?;
        if user.is_none() {
            debug!(user_id = user_id.get(), "calorie entry for unknown user");
            return Err(unknown_user());
        }

        self.entry_repo
            .insert(&entry)
            .await
            .map_err(map_entry_persistence_error)?;

        info!(
            user_id = user_id.get(),
            year = entry.date().year(),
            month = entry.date().month(),
            category = %entry.category(),
            "calorie entry recorded"
        );
        Ok(entry)
    }
}

#[cfg(test)]
#[path = "calorie_entry_service_tests.rs"]
mod tests;
