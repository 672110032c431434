//! Driving port for monthly reports.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Error, MonthlyReport};

/// Raw report request as received from a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalorieReportRequest {
    pub user_id: i64,
    pub year: i64,
    pub month: i64,
}

/// Domain use-case port for the report builder.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CalorieReportQuery: Send + Sync {
    /// Group the user's entries for the requested month by category.
    async fn build_report(&self, request: CalorieReportRequest) -> Result<MonthlyReport, Error>;
}
