//! Port abstraction for user persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{NewUser, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// Two users in one write share an identifier.
        DuplicateId { id: u32 } => "user id {id} is already taken",
    }
}

/// Identity store: owns user records and identifier uniqueness.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch a user by external identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Remove every user and insert `users` in order.
    ///
    /// Users without an identifier receive `max(id) + 1` over the users
    /// inserted so far (starting at 1). The write is all-or-nothing: a
    /// duplicate identifier leaves the previous user set in place.
    async fn replace_all(&self, users: &[NewUser]) -> Result<Vec<User>, UserPersistenceError>;
}

/// Assign identifiers to `users` following the `max(id) + 1` rule.
///
/// Shared by adapters so the rule lives in one place.
///
/// # Examples
/// ```
/// use calories::domain::ports::assign_user_ids;
/// use calories::domain::{NewUser, PersonName};
/// use chrono::NaiveDate;
///
/// let birthday = NaiveDate::from_ymd_opt(1990, 1, 10).expect("valid date");
/// let pending = NewUser {
///     id: None,
///     first_name: PersonName::first("moshe").expect("name"),
///     last_name: PersonName::last("israeli").expect("name"),
///     birthday,
/// };
/// let users = assign_user_ids(&[pending.clone(), pending]).expect("ids assigned");
/// let ids: Vec<u32> = users.iter().map(|u| u.id().get()).collect();
/// assert_eq!(ids, [1, 2]);
/// ```
pub fn assign_user_ids(users: &[NewUser]) -> Result<Vec<User>, UserPersistenceError> {
    let mut assigned: Vec<User> = Vec::with_capacity(users.len());
    for pending in users {
        let id = match pending.id {
            Some(id) => id,
            None => match assigned.iter().map(User::id).max() {
                Some(max) => max
                    .next()
                    .ok_or_else(|| UserPersistenceError::query("user id space exhausted"))?,
                None => UserId::FIRST,
            },
        };
        if assigned.iter().any(|user| user.id() == id) {
            return Err(UserPersistenceError::duplicate_id(id.get()));
        }
        assigned.push(pending.clone().into_user(id));
    }
    Ok(assigned)
}
