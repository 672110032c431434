//! Port abstraction for calorie entry persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{CalorieEntry, ReportPeriod, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by calorie entry repository adapters.
    pub enum CalorieEntryPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "calorie entry repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "calorie entry repository query failed: {message}",
    }
}

/// Entry store: append-only storage of calorie entries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CalorieEntryRepository: Send + Sync {
    /// Persist a validated entry. The adapter assigns its own storage key.
    async fn insert(&self, entry: &CalorieEntry) -> Result<(), CalorieEntryPersistenceError>;

    /// Entries for `user_id` within `period`, in insertion order.
    async fn find_for_period(
        &self,
        user_id: UserId,
        period: ReportPeriod,
    ) -> Result<Vec<CalorieEntry>, CalorieEntryPersistenceError>;
}
