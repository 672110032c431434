//! Driving port for recording calorie entries.

use async_trait::async_trait;

use crate::domain::{CalorieEntry, CalorieEntryDraft, Error};

/// Domain use-case port for the entry writer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CalorieEntryCommand: Send + Sync {
    /// Validate and persist `draft`.
    ///
    /// Fails with `invalid_request` on bad fields, `reference_not_found`
    /// when the user does not exist, and `internal_error` on storage faults.
    async fn add_entry(&self, draft: CalorieEntryDraft) -> Result<CalorieEntry, Error>;
}
