//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) are implemented by outbound adapters; driving
//! ports (`*Query`, `*Command`) are implemented by domain services and called
//! by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod calorie_entry_command;
mod calorie_entry_repository;
mod calorie_report_query;
mod user_query;
mod user_repository;

#[cfg(test)]
pub use calorie_entry_command::MockCalorieEntryCommand;
pub use calorie_entry_command::CalorieEntryCommand;
#[cfg(test)]
pub use calorie_entry_repository::MockCalorieEntryRepository;
pub use calorie_entry_repository::{CalorieEntryPersistenceError, CalorieEntryRepository};
#[cfg(test)]
pub use calorie_report_query::MockCalorieReportQuery;
pub use calorie_report_query::{CalorieReportQuery, CalorieReportRequest};
#[cfg(test)]
pub use user_query::MockUserQuery;
pub use user_query::UserQuery;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository, assign_user_ids};
