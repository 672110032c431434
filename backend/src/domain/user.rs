//! User data model.

use std::fmt;

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use super::format_birthday;

/// Validation errors returned by user constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    InvalidId { value: i64 },
    EmptyFirstName,
    EmptyLastName,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId { value } => {
                write!(f, "user id must be a positive integer, got {value}")
            }
            Self::EmptyFirstName => write!(f, "first name must not be empty"),
            Self::EmptyLastName => write!(f, "last name must not be empty"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// External user identifier: a positive integer, unique across users.
///
/// Distinct from any key the backing store uses internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct UserId(u32);

impl UserId {
    /// The identifier assigned to the first user of an empty store.
    pub const FIRST: Self = Self(1);

    /// Validate and construct a [`UserId`].
    ///
    /// # Examples
    /// ```
    /// use calories::domain::UserId;
    ///
    /// assert_eq!(UserId::new(7).map(|id| id.get()), Ok(7));
    /// assert!(UserId::new(0).is_err());
    /// assert!(UserId::new(-3).is_err());
    /// ```
    pub fn new(value: i64) -> Result<Self, UserValidationError> {
        match u32::try_from(value) {
            Ok(raw) if raw > 0 => Ok(Self(raw)),
            _ => Err(UserValidationError::InvalidId { value }),
        }
    }

    /// Raw numeric value.
    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }

    /// The identifier following this one, if it fits.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for UserId {
    type Error = UserValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for i64 {
    fn from(value: UserId) -> Self {
        i64::from(value.0)
    }
}

/// First or last name, trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PersonName(String);

impl PersonName {
    fn parse(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == value.len() {
            Some(Self(value))
        } else {
            Some(Self(trimmed.to_owned()))
        }
    }

    /// Validate a first name.
    pub fn first(value: impl Into<String>) -> Result<Self, UserValidationError> {
        Self::parse(value).ok_or(UserValidationError::EmptyFirstName)
    }

    /// Validate a last name.
    pub fn last(value: impl Into<String>) -> Result<Self, UserValidationError> {
        Self::parse(value).ok_or(UserValidationError::EmptyLastName)
    }
}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Application user.
///
/// ## Invariants
/// - `id` is unique across all users.
/// - names are non-empty once trimmed.
///
/// Serialises with `birthday` rendered in long form (`January 10th, 1990`);
/// the stored value stays a plain calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    first_name: PersonName,
    last_name: PersonName,
    birthday: NaiveDate,
}

impl User {
    /// Build a new [`User`] from validated components.
    pub fn new(
        id: UserId,
        first_name: PersonName,
        last_name: PersonName,
        birthday: NaiveDate,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            birthday,
        }
    }

    /// Fallible constructor from raw parts.
    ///
    /// # Examples
    /// ```
    /// use calories::domain::User;
    /// use chrono::NaiveDate;
    ///
    /// let birthday = NaiveDate::from_ymd_opt(1990, 1, 10).expect("valid date");
    /// let user = User::try_from_parts(1, "John", "Doe", birthday).expect("valid user");
    /// assert_eq!(user.formatted_birthday(), "January 10th, 1990");
    /// ```
    pub fn try_from_parts(
        id: i64,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birthday: NaiveDate,
    ) -> Result<Self, UserValidationError> {
        Ok(Self::new(
            UserId::new(id)?,
            PersonName::first(first_name)?,
            PersonName::last(last_name)?,
            birthday,
        ))
    }

    /// Stable identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Given name.
    pub fn first_name(&self) -> &PersonName {
        &self.first_name
    }

    /// Family name.
    pub fn last_name(&self) -> &PersonName {
        &self.last_name
    }

    /// Stored calendar date of birth.
    pub fn birthday(&self) -> NaiveDate {
        self.birthday
    }

    /// Birthday rendered for display.
    pub fn formatted_birthday(&self) -> String {
        format_birthday(self.birthday)
    }
}

#[derive(Serialize)]
struct UserView<'a> {
    id: UserId,
    first_name: &'a str,
    last_name: &'a str,
    birthday: String,
}

impl Serialize for User {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        UserView {
            id: self.id,
            first_name: self.first_name.as_ref(),
            last_name: self.last_name.as_ref(),
            birthday: self.formatted_birthday(),
        }
        .serialize(serializer)
    }
}

/// A user awaiting insertion by the seeding flow.
///
/// When `id` is `None` the store assigns the next sequential identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub id: Option<UserId>,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub birthday: NaiveDate,
}

impl NewUser {
    /// Attach the assigned identifier, producing a stored [`User`].
    pub fn into_user(self, id: UserId) -> User {
        User::new(id, self.first_name, self.last_name, self.birthday)
    }
}
