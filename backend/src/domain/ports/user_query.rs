//! Driving port for user lookups.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Domain use-case port for reading a single user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserQuery: Send + Sync {
    /// Return the user with `id`, or a `not_found` error.
    async fn get_user(&self, id: UserId) -> Result<User, Error>;
}
