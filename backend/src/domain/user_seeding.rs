//! User seeder: replaces the identity store with a list of seed users.
//!
//! Used by the `seed-users` binary and, when enabled, at server start-up.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::user_service::map_user_persistence_error;
use crate::domain::ports::UserRepository;
use crate::domain::{Error, NewUser, PersonName, User, UserId, UserValidationError};

/// Seed user as written in a seed file.
///
/// `birthday` is an ISO-8601 calendar date (`YYYY-MM-DD`). When `id` is
/// omitted the store assigns the next sequential identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedUserRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub birthday: String,
}

/// Reasons a seed record cannot become a [`NewUser`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeedUserError {
    #[error(transparent)]
    InvalidUser(#[from] UserValidationError),
    #[error("birthday must be a YYYY-MM-DD date, got '{value}'")]
    InvalidBirthday { value: String },
}

impl TryFrom<SeedUserRecord> for NewUser {
    type Error = SeedUserError;

    fn try_from(record: SeedUserRecord) -> Result<Self, Self::Error> {
        let birthday = NaiveDate::parse_from_str(&record.birthday, "%Y-%m-%d").map_err(|_| {
            SeedUserError::InvalidBirthday {
                value: record.birthday.clone(),
            }
        })?;
        Ok(Self {
            id: record.id.map(UserId::new).transpose()?,
            first_name: PersonName::first(record.first_name)?,
            last_name: PersonName::last(record.last_name)?,
            birthday,
        })
    }
}

/// The two users the service ships with.
///
/// # Examples
/// ```
/// use calories::domain::default_seed_users;
///
/// let names: Vec<_> = default_seed_users()
///     .into_iter()
///     .map(|record| record.first_name)
///     .collect();
/// assert_eq!(names, ["moshe", "john"]);
/// ```
pub fn default_seed_users() -> Vec<SeedUserRecord> {
    [
        ("moshe", "israeli", "1990-01-10"),
        ("john", "doe", "1985-02-20"),
    ]
    .into_iter()
    .map(|(first, last, birthday)| SeedUserRecord {
        id: None,
        first_name: first.to_owned(),
        last_name: last.to_owned(),
        birthday: birthday.to_owned(),
    })
    .collect()
}

/// Administrative service over the identity store.
#[derive(Clone)]
pub struct UserSeeder<R> {
    user_repo: Arc<R>,
}

impl<R> UserSeeder<R>
where
    R: UserRepository,
{
    /// Create a new seeder with the user repository.
    pub fn new(user_repo: Arc<R>) -> Self {
        Self { user_repo }
    }

    /// Validate `records` and replace every stored user with them.
    ///
    /// Nothing is written when any record is invalid.
    pub async fn seed(&self, records: Vec<SeedUserRecord>) -> Result<Vec<User>, Error> {
        let users = records
            .into_iter()
            .map(NewUser::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| Error::invalid_request(format!("invalid seed user: {err}")))?;

        let stored = self
            .user_repo
            .replace_all(&users)
            .await
            .map_err(map_user_persistence_error)?;

        info!(count = stored.len(), "users seeded");
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::{MockUserRepository, UserPersistenceError, assign_user_ids};
    use rstest::rstest;

    fn record(id: Option<i64>, first: &str, birthday: &str) -> SeedUserRecord {
        SeedUserRecord {
            id,
            first_name: first.to_owned(),
            last_name: "doe".to_owned(),
            birthday: birthday.to_owned(),
        }
    }

    #[rstest]
    #[case::bad_date(record(None, "john", "20-02-1985"), "birthday")]
    #[case::blank_name(record(None, " ", "1985-02-20"), "first name")]
    #[case::zero_id(record(Some(0), "john", "1985-02-20"), "user id")]
    fn invalid_records_are_rejected(#[case] input: SeedUserRecord, #[case] fragment: &str) {
        let err = NewUser::try_from(input).expect_err("record should be rejected");
        assert!(err.to_string().contains(fragment), "{err}");
    }

    #[rstest]
    #[tokio::test]
    async fn seeds_defaults_with_sequential_ids() {
        let mut repo = MockUserRepository::new();
        repo.expect_replace_all()
            .times(1)
            .returning(|users| assign_user_ids(users));

        let seeded = UserSeeder::new(Arc::new(repo))
            .seed(default_seed_users())
            .await
            .expect("seeded");

        let summary: Vec<_> = seeded
            .iter()
            .map(|user| (user.id().get(), user.formatted_birthday()))
            .collect();
        assert_eq!(
            summary,
            [
                (1, "January 10th, 1990".to_owned()),
                (2, "February 20th, 1985".to_owned()),
            ]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn invalid_record_prevents_any_write() {
        let mut repo = MockUserRepository::new();
        repo.expect_replace_all().times(0);

        let err = UserSeeder::new(Arc::new(repo))
            .seed(vec![record(None, "john", "1985-02-20"), record(None, "", "1990-01-10")])
            .await
            .expect_err("invalid seed");

        assert_eq!(err.code(), ErrorCode::InvalidRequest);
    }

    #[rstest]
    #[tokio::test]
    async fn duplicate_ids_surface_as_invalid_request() {
        let mut repo = MockUserRepository::new();
        repo.expect_replace_all()
            .return_once(|_| Err(UserPersistenceError::duplicate_id(1_u32)));

        let err = UserSeeder::new(Arc::new(repo))
            .seed(vec![record(Some(1), "a", "1990-01-01"), record(Some(1), "b", "1990-01-01")])
            .await
            .expect_err("duplicate ids");

        assert_eq!(err.code(), ErrorCode::InvalidRequest);
    }
}
