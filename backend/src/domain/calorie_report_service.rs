//! Report builder service implementing [`CalorieReportQuery`].

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::calorie_entry::parse_user_id;
use super::calorie_entry_service::map_entry_persistence_error;
use crate::domain::ports::{CalorieEntryRepository, CalorieReportQuery, CalorieReportRequest};
use crate::domain::{Error, MonthlyReport, ReportPeriod};

/// Reads the entry store only; an unknown user simply has no entries. That
/// includes ids outside the range any user can hold.
#[derive(Clone)]
pub struct CalorieReportService<E> {
    entry_repo: Arc<E>,
}

impl<E> CalorieReportService<E> {
    /// Create a new service with the entry repository.
    pub fn new(entry_repo: Arc<E>) -> Self {
        Self { entry_repo }
    }
}

#[async_trait]
impl<E> CalorieReportQuery for CalorieReportService<E>
where
    E: CalorieEntryRepository,
{
    async fn build_report(&self, request: CalorieReportRequest) -> Result<MonthlyReport, Error> {
        let period = ReportPeriod::new(request.year, request.month)?;
        let Ok(user_id) = parse_user_id(request.user_id) else {
            debug!(user_id = request.user_id, "report for out-of-range user id");
            return Ok(MonthlyReport::default());
        };

        let entries = self
            .entry_repo
            .find_for_period(user_id, period)
            .await
            .map_err(map_entry_persistence_error)?;

        let report = MonthlyReport::build(period, &entries);
        debug!(
            user_id = user_id.get(),
            year = period.year(),
            month = period.month(),
            items = report.len(),
            "calorie report built"
        );
        Ok(report)
    }
}
