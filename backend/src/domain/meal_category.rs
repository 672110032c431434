//! Closed set of meal categories an entry may belong to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Meal category of a calorie entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealCategory {
    Breakfast,
    Lunch,
    Dinner,
    Other,
}

impl MealCategory {
    /// Every category, in report order.
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Other];

    /// Canonical lowercase name used on the wire and in storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for MealCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when text does not name one of the four categories.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown meal category: {value}")]
pub struct ParseMealCategoryError {
    pub value: String,
}

impl FromStr for MealCategory {
    type Err = ParseMealCategoryError;

    /// Parse a category name. Matching is exact: `Lunch` is rejected.
    ///
    /// # Examples
    /// ```
    /// use calories::domain::MealCategory;
    ///
    /// assert_eq!("dinner".parse::<MealCategory>(), Ok(MealCategory::Dinner));
    /// assert!("snack".parse::<MealCategory>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ParseMealCategoryError {
                value: s.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("breakfast", MealCategory::Breakfast)]
    #[case("lunch", MealCategory::Lunch)]
    #[case("dinner", MealCategory::Dinner)]
    #[case("other", MealCategory::Other)]
    fn parses_known_categories(#[case] raw: &str, #[case] expected: MealCategory) {
        assert_eq!(raw.parse::<MealCategory>(), Ok(expected));
        assert_eq!(expected.to_string(), raw);
    }

    #[rstest]
    #[case("")]
    #[case("Lunch")]
    #[case("snack")]
    #[case(" dinner")]
    fn rejects_unknown_categories(#[case] raw: &str) {
        let err = raw.parse::<MealCategory>().expect_err("category should be rejected");
        assert_eq!(err.value, raw);
    }

    #[rstest]
    fn all_lists_report_order() {
        let names: Vec<_> = MealCategory::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(names, ["breakfast", "lunch", "dinner", "other"]);
    }
}
