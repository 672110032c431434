//! Monthly calorie report grouped by meal category.

use serde::Serialize;

use super::calorie_entry::{CalorieValidationError, parse_month, parse_year, serialize_amount};
use super::{CalorieEntry, MealCategory};

/// Calendar month a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReportPeriod {
    year: i32,
    month: u32,
}

impl ReportPeriod {
    /// Validate `year >= 1` and `month` in `1..=12`.
    ///
    /// # Examples
    /// ```
    /// use calories::domain::ReportPeriod;
    ///
    /// let period = ReportPeriod::new(2024, 5).expect("valid period");
    /// assert_eq!((period.year(), period.month()), (2024, 5));
    /// assert!(ReportPeriod::new(2024, 13).is_err());
    /// ```
    pub fn new(year: i64, month: i64) -> Result<Self, CalorieValidationError> {
        Ok(Self {
            year: parse_year(year)?,
            month: parse_month(month)?,
        })
    }

    /// Calendar year covered.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month covered, `1..=12`.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Whether `entry` falls inside this period.
    pub fn contains(&self, entry: &CalorieEntry) -> bool {
        let date = entry.date();
        date.year() == self.year && date.month() == self.month
    }
}

/// Projection of one entry inside a report bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportItem {
    /// Day of the month.
    pub day: u32,
    /// Entry description as recorded.
    pub description: String,
    /// Calories; whole numbers serialise without a fraction.
    #[serde(serialize_with = "serialize_amount")]
    pub amount: f64,
}

impl From<&CalorieEntry> for ReportItem {
    fn from(entry: &CalorieEntry) -> Self {
        Self {
            day: entry.date().day(),
            description: entry.description().as_ref().to_owned(),
            amount: entry.amount().get(),
        }
    }
}

/// A user's entries for one month, partitioned by category.
///
/// All four buckets are always present. Within a bucket items are ordered by
/// `day`; items on the same day keep the order they were supplied in.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MonthlyReport {
    pub breakfast: Vec<ReportItem>,
    pub lunch: Vec<ReportItem>,
    pub dinner: Vec<ReportItem>,
    pub other: Vec<ReportItem>,
}

impl MonthlyReport {
    /// Build a report from entries in store order, ignoring any outside
    /// `period`.
    pub fn build<'a>(
        period: ReportPeriod,
        entries: impl IntoIterator<Item = &'a CalorieEntry>,
    ) -> Self {
        let mut report = Self::default();
        for entry in entries.into_iter().filter(|entry| period.contains(entry)) {
            report.bucket_mut(entry.category()).push(ReportItem::from(entry));
        }
        for category in MealCategory::ALL {
            // `sort_by_key` is stable, so same-day items keep insertion order.
            report.bucket_mut(category).sort_by_key(|item| item.day);
        }
        report
    }

    /// Items recorded under `category`.
    pub fn bucket(&self, category: MealCategory) -> &[ReportItem] {
        match category {
            MealCategory::Breakfast => &self.breakfast,
            MealCategory::Lunch => &self.lunch,
            MealCategory::Dinner => &self.dinner,
            MealCategory::Other => &self.other,
        }
    }

    fn bucket_mut(&mut self, category: MealCategory) -> &mut Vec<ReportItem> {
        match category {
            MealCategory::Breakfast => &mut self.breakfast,
            MealCategory::Lunch => &mut self.lunch,
            MealCategory::Dinner => &mut self.dinner,
            MealCategory::Other => &mut self.other,
        }
    }

    /// Total number of items across all buckets.
    pub fn len(&self) -> usize {
        MealCategory::ALL
            .iter()
            .map(|category| self.bucket(*category).len())
            .sum()
    }

    /// True when every bucket is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
