//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and depend only on driving
//! ports, so they can be exercised with in-memory adapters or mocks.

use std::sync::Arc;

use crate::domain::ports::{CalorieEntryCommand, CalorieReportQuery, UserQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserQuery>,
    pub entries: Arc<dyn CalorieEntryCommand>,
    pub reports: Arc<dyn CalorieReportQuery>,
}

impl HttpState {
    /// Bundle the driving ports handed to every handler.
    pub fn new(
        users: Arc<dyn UserQuery>,
        entries: Arc<dyn CalorieEntryCommand>,
        reports: Arc<dyn CalorieReportQuery>,
    ) -> Self {
        Self {
            users,
            entries,
            reports,
        }
    }
}
