//! Calorie entry data model and its validation rules.
//!
//! Entries arrive as a [`CalorieEntryDraft`] holding unchecked values. The
//! entry writer turns a draft into a [`CalorieEntry`] before touching any
//! store, so every persisted entry satisfies these invariants:
//!
//! - `user_id` is a positive integer (existence is checked separately);
//! - `year >= 1`, `month` in `1..=12`, `day` in `1..=31`. The combination is
//!   not checked against the calendar;
//! - `description` is non-empty once trimmed;
//! - `category` is one of [`MealCategory::ALL`];
//! - `amount` is finite and not negative.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{Error, MealCategory, UserId};

/// A field that failed validation, with the offending value where useful.
#[derive(Debug, Clone, PartialEq)]
pub enum CalorieValidationError {
    InvalidUserId { value: i64 },
    InvalidYear { value: i64 },
    InvalidMonth { value: i64 },
    InvalidDay { value: i64 },
    EmptyDescription,
    InvalidCategory { value: String },
    InvalidAmount { value: f64 },
}

impl CalorieValidationError {
    /// Wire name of the field at fault.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidUserId { .. } => "user_id",
            Self::InvalidYear { .. } => "year",
            Self::InvalidMonth { .. } => "month",
            Self::InvalidDay { .. } => "day",
            Self::EmptyDescription => "description",
            Self::InvalidCategory { .. } => "category",
            Self::InvalidAmount { .. } => "amount",
        }
    }

    /// Stable machine-readable reason.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidUserId { .. } => "invalid_user_id",
            Self::InvalidYear { .. } => "invalid_year",
            Self::InvalidMonth { .. } => "invalid_month",
            Self::InvalidDay { .. } => "invalid_day",
            Self::EmptyDescription => "empty_description",
            Self::InvalidCategory { .. } => "invalid_category",
            Self::InvalidAmount { .. } => "invalid_amount",
        }
    }
}

impl fmt::Display for CalorieValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUserId { value } => {
                write!(f, "user_id must be a positive integer, got {value}")
            }
            Self::InvalidYear { value } => write!(f, "year must be at least 1, got {value}"),
            Self::InvalidMonth { value } => {
                write!(f, "month must be between 1 and 12, got {value}")
            }
            Self::InvalidDay { value } => write!(f, "day must be between 1 and 31, got {value}"),
            Self::EmptyDescription => write!(f, "description must not be empty"),
            Self::InvalidCategory { value } => write!(
                f,
                "category must be one of breakfast, lunch, dinner, other, got '{value}'"
            ),
            Self::InvalidAmount { value } => {
                write!(f, "amount must be a non-negative number, got {value}")
            }
        }
    }
}

impl std::error::Error for CalorieValidationError {}

impl From<CalorieValidationError> for Error {
    fn from(err: CalorieValidationError) -> Self {
        Error::invalid_request(err.to_string()).with_details(json!({
            "field": err.field(),
            "code": err.code(),
        }))
    }
}

pub(crate) fn parse_user_id(value: i64) -> Result<UserId, CalorieValidationError> {
    UserId::new(value).map_err(|_| CalorieValidationError::InvalidUserId { value })
}

pub(crate) fn parse_year(value: i64) -> Result<i32, CalorieValidationError> {
    i32::try_from(value)
        .ok()
        .filter(|year| *year >= 1)
        .ok_or(CalorieValidationError::InvalidYear { value })
}

pub(crate) fn parse_month(value: i64) -> Result<u32, CalorieValidationError> {
    u32::try_from(value)
        .ok()
        .filter(|month| (1..=12).contains(month))
        .ok_or(CalorieValidationError::InvalidMonth { value })
}

fn parse_day(value: i64) -> Result<u32, CalorieValidationError> {
    u32::try_from(value)
        .ok()
        .filter(|day| (1..=31).contains(day))
        .ok_or(CalorieValidationError::InvalidDay { value })
}

/// Unvalidated entry fields as supplied by a caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalorieEntryDraft {
    pub user_id: i64,
    pub year: i64,
    pub month: i64,
    pub day: i64,
    pub description: String,
    pub category: String,
    pub amount: f64,
}

/// Calendar position of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryDate {
    year: i32,
    month: u32,
    day: u32,
}

impl EntryDate {
    /// Validate each component independently.
    pub fn new(year: i64, month: i64, day: i64) -> Result<Self, CalorieValidationError> {
        Ok(Self {
            year: parse_year(year)?,
            month: parse_month(month)?,
            day: parse_day(day)?,
        })
    }

    /// Calendar year, at least 1.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month of the year in `1..=12`.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Day of the month in `1..=31`.
    pub fn day(&self) -> u32 {
        self.day
    }
}

/// Free-text description, non-empty once trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description(String);

impl Description {
    /// Reject blank text; the accepted value is kept untrimmed.
    pub fn new(value: impl Into<String>) -> Result<Self, CalorieValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(CalorieValidationError::EmptyDescription);
        }
        Ok(Self(value))
    }
}

impl AsRef<str> for Description {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

/// Calorie amount: finite and not negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalorieAmount(f64);

impl CalorieAmount {
    /// Accept finite values of zero or more.
    pub fn new(value: f64) -> Result<Self, CalorieValidationError> {
        if value.is_finite() && value >= 0.0 {
            Ok(Self(value))
        } else {
            Err(CalorieValidationError::InvalidAmount { value })
        }
    }

    /// Raw amount.
    pub fn get(self) -> f64 {
        self.0
    }
}

/// Write a whole-number amount as a JSON integer and anything else as a float.
pub(crate) fn serialize_amount<S>(amount: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
    let value = *amount;
    if value.fract() == 0.0 && (0.0..=MAX_EXACT).contains(&value) {
        serializer.serialize_u64(value as u64)
    } else {
        serializer.serialize_f64(value)
    }
}

/// A validated calorie entry.
///
/// Carries only business fields; any storage identifier stays inside the
/// persistence adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct CalorieEntry {
    user_id: UserId,
    date: EntryDate,
    description: Description,
    category: MealCategory,
    amount: CalorieAmount,
}

impl CalorieEntry {
    /// Assemble an entry from already validated parts.
    pub fn new(
        user_id: UserId,
        date: EntryDate,
        description: Description,
        category: MealCategory,
        amount: CalorieAmount,
    ) -> Self {
        Self {
            user_id,
            date,
            description,
            category,
            amount,
        }
    }

    /// User the entry belongs to.
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Day the food was eaten.
    pub fn date(&self) -> EntryDate {
        self.date
    }

    /// Free-text description as entered.
    pub fn description(&self) -> &Description {
        &self.description
    }

    /// Report bucket the entry lands in.
    pub fn category(&self) -> MealCategory {
        self.category
    }

    /// Calories consumed.
    pub fn amount(&self) -> CalorieAmount {
        self.amount
    }
}

impl TryFrom<CalorieEntryDraft> for CalorieEntry {
    type Error = CalorieValidationError;

    /// Validate every field; the first failure in declaration order wins.
    fn try_from(draft: CalorieEntryDraft) -> Result<Self, Self::Error> {
        let CalorieEntryDraft {
            user_id,
            year,
            month,
            day,
            description,
            category,
            amount,
        } = draft;

        let user_id = parse_user_id(user_id)?;
        let date = EntryDate::new(year, month, day)?;
        let description = Description::new(description)?;
        let category = category
            .parse::<MealCategory>()
            .map_err(|err| CalorieValidationError::InvalidCategory { value: err.value })?;
        let amount = CalorieAmount::new(amount)?;

        Ok(Self::new(user_id, date, description, category, amount))
    }
}

#[derive(Serialize)]
struct CalorieEntryView<'a> {
    user_id: UserId,
    year: i32,
    month: u32,
    day: u32,
    description: &'a str,
    category: MealCategory,
    #[serde(serialize_with = "serialize_amount")]
    amount: f64,
}

impl Serialize for CalorieEntry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        CalorieEntryView {
            user_id: self.user_id,
            year: self.date.year,
            month: self.date.month,
            day: self.date.day,
            description: self.description.as_ref(),
            category: self.category,
            amount: self.amount.get(),
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
#[path = "calorie_entry_tests.rs"]
mod tests;
