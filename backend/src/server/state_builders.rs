//! Builders for HTTP state ports from the configured stores.

use std::sync::Arc;

use actix_web::web;
use tracing::info;

use calories::domain::ports::{
    CalorieEntryCommand, CalorieEntryRepository, CalorieReportQuery, UserQuery, UserRepository,
    assign_user_ids,
};
use calories::domain::{
    CalorieEntryService, CalorieReportService, Error, NewUser, User, UserDirectoryService,
    UserSeeder, default_seed_users,
};
use calories::inbound::http::state::HttpState;
use calories::outbound::memory::{InMemoryCalorieEntryRepository, InMemoryUserRepository};
use calories::outbound::persistence::{DbPool, DieselCalorieEntryRepository, DieselUserRepository};

use super::ServerConfig;

/// Wire the three driving ports over one identity store and one entry store.
fn wire_services<U, E>(users: Arc<U>, entries: Arc<E>) -> HttpState
where
    U: UserRepository + 'static,
    E: CalorieEntryRepository + 'static,
{
    let user_query: Arc<dyn UserQuery> = Arc::new(UserDirectoryService::new(users.clone()));
    let entry_command: Arc<dyn CalorieEntryCommand> =
        Arc::new(CalorieEntryService::new(users, entries.clone()));
    let report_query: Arc<dyn CalorieReportQuery> = Arc::new(CalorieReportService::new(entries));
    HttpState::new(user_query, entry_command, report_query)
}

/// Default users with ids assigned, for the in-memory identity store.
fn default_users() -> Result<Vec<User>, Error> {
    let pending = default_seed_users()
        .into_iter()
        .map(NewUser::try_from)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| Error::internal(format!("invalid default user: {err}")))?;
    assign_user_ids(&pending)
        .map_err(|err| Error::internal(format!("default users rejected: {err}")))
}

/// Build handler state from the configured pool, or from in-memory stores
/// pre-populated with the default users when no pool is present.
pub(super) fn build_http_state(config: &ServerConfig) -> Result<web::Data<HttpState>, Error> {
    let state = match &config.db_pool {
        Some(pool) => wire_services(
            Arc::new(DieselUserRepository::new(pool.clone())),
            Arc::new(DieselCalorieEntryRepository::new(pool.clone())),
        ),
        None => {
            let users = default_users()?;
            info!(count = users.len(), "serving from in-memory stores");
            wire_services(
                Arc::new(InMemoryUserRepository::with_users(users)),
                Arc::new(InMemoryCalorieEntryRepository::default()),
            )
        }
    };
    Ok(web::Data::new(state))
}

/// Replace the stored users with the default seed.
pub async fn seed_default_users(pool: &DbPool) -> Result<Vec<User>, Error> {
    UserSeeder::new(Arc::new(DieselUserRepository::new(pool.clone())))
        .seed(default_seed_users())
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use calories::domain::UserId;
    use rstest::rstest;

    #[rstest]
    fn default_users_get_sequential_ids() {
        let users = default_users().expect("default users");
        let ids: Vec<_> = users.iter().map(|user| user.id().get()).collect();
        assert_eq!(ids, [1, 2]);
    }

    #[tokio::test]
    async fn in_memory_state_serves_default_users() {
        let config = ServerConfig::new(([127, 0, 0, 1], 0).into());
        let state = build_http_state(&config).expect("state");

        let user = state
            .users
            .get_user(UserId::FIRST)
            .await
            .expect("first default user");
        assert_eq!(user.first_name().as_ref(), "moshe");
    }
}
