use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Days, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::PipelineError;

/// Free-text search over a designated subset of fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilter<F> {
    pub query: String,
    pub fields: Vec<F>,
}

/// Categorical inclusion set. An empty selection constrains nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter<F> {
    pub field: F,
    pub selected: BTreeSet<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NumericRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericFilter<F> {
    pub field: F,
    pub range: NumericRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DatePreset {
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "7d")]
    SevenDays,
    #[serde(rename = "30d")]
    ThirtyDays,
    #[default]
    All,
}

/// Calendar date range; both ends are whole days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSelector {
    Preset(DatePreset),
    Range(DateRange),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFilter<F> {
    pub field: F,
    pub selector: DateSelector,
}

/// Every active filter value of one table view.
///
/// Families combine with AND; inside a category set membership is OR.
/// Each field carries at most one filter per family: setting a filter on a
/// field that already has one replaces it.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria<F> {
    pub search: SearchFilter<F>,
    pub categories: Vec<CategoryFilter<F>>,
    pub numeric: Vec<NumericFilter<F>>,
    pub dates: Vec<DateFilter<F>>,
}

impl<F> SearchFilter<F> {
    /// The lower-cased query, or `None` when it is blank and matches everything.
    ///
    /// Surrounding spaces of a non-blank query are part of the needle.
    pub fn needle(&self) -> Option<String> {
        if self.query.trim().is_empty() {
            None
        } else {
            Some(self.query.to_lowercase())
        }
    }
}

impl NumericRange {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }
}

impl DatePreset {
    pub const ALL_PRESETS: [DatePreset; 4] = [
        DatePreset::OneDay,
        DatePreset::SevenDays,
        DatePreset::ThirtyDays,
        DatePreset::All,
    ];

    pub fn days(self) -> Option<i64> {
        match self {
            DatePreset::OneDay => Some(1),
            DatePreset::SevenDays => Some(7),
            DatePreset::ThirtyDays => Some(30),
            DatePreset::All => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DatePreset::OneDay => "1d",
            DatePreset::SevenDays => "7d",
            DatePreset::ThirtyDays => "30d",
            DatePreset::All => "All",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DatePreset::OneDay => "Last 24 hours",
            DatePreset::SevenDays => "Last 7 days",
            DatePreset::ThirtyDays => "Last 30 days",
            DatePreset::All => "All time",
        }
    }

    /// `now - ts <= days`; timestamps in the future always pass.
    pub fn contains(self, timestamp: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match self.days() {
            Some(days) => now.signed_duration_since(timestamp) <= Duration::days(days),
            None => true,
        }
    }
}

impl fmt::Display for DatePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatePreset {
    type Err = PipelineError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        DatePreset::ALL_PRESETS
            .into_iter()
            .find(|preset| preset.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| PipelineError::UnknownDatePreset(value.to_string()))
    }
}

impl DateRange {
    /// Builds a range; a reversed pair is swapped rather than rejected.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        if end < start {
            Self { start: end, end: start }
        } else {
            Self { start, end }
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// `start 00:00 UTC <= ts < (end + 1 day) 00:00 UTC`.
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        let lower = self.start.and_time(NaiveTime::MIN).and_utc();
        if timestamp < lower {
            return false;
        }
        match self.end.checked_add_days(Days::new(1)) {
            Some(next_day) => timestamp < next_day.and_time(NaiveTime::MIN).and_utc(),
            None => true,
        }
    }
}

impl Default for DateSelector {
    fn default() -> Self {
        DateSelector::Preset(DatePreset::All)
    }
}

impl DateSelector {
    pub fn is_unconstrained(&self) -> bool {
        matches!(self, DateSelector::Preset(DatePreset::All))
    }

    /// A record without a timestamp only passes the `All` preset.
    pub fn matches(&self, timestamp: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
        if self.is_unconstrained() {
            return true;
        }
        let Some(timestamp) = timestamp else {
            return false;
        };
        match self {
            DateSelector::Preset(preset) => preset.contains(timestamp, now),
            DateSelector::Range(range) => range.contains(timestamp),
        }
    }
}

impl<F> Default for FilterCriteria<F> {
    fn default() -> Self {
        Self {
            search: SearchFilter {
                query: String::new(),
                fields: Vec::new(),
            },
            categories: Vec::new(),
            numeric: Vec::new(),
            dates: Vec::new(),
        }
    }
}

impl<F: Copy + PartialEq> FilterCriteria<F> {
    pub fn with_search_fields(fields: impl IntoIterator<Item = F>) -> Self {
        let mut criteria = Self::default();
        criteria.search.fields = fields.into_iter().collect();
        criteria
    }

    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.set_search(query);
        self
    }

    pub fn category<I, S>(mut self, field: F, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_categories(field, values.into_iter().map(Into::into).collect());
        self
    }

    pub fn numeric(mut self, field: F, range: NumericRange) -> Self {
        self.set_numeric(field, range);
        self
    }

    pub fn date(mut self, field: F, selector: DateSelector) -> Self {
        self.set_date(field, selector);
        self
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search.query = query.into();
    }

    pub fn set_categories(&mut self, field: F, selected: BTreeSet<String>) {
        match self.categories.iter_mut().find(|filter| filter.field == field) {
            Some(filter) => filter.selected = selected,
            None => self.categories.push(CategoryFilter { field, selected }),
        }
    }

    pub fn set_numeric(&mut self, field: F, range: NumericRange) {
        match self.numeric.iter_mut().find(|filter| filter.field == field) {
            Some(filter) => filter.range = range,
            None => self.numeric.push(NumericFilter { field, range }),
        }
    }

    pub fn set_date(&mut self, field: F, selector: DateSelector) {
        match self.dates.iter_mut().find(|filter| filter.field == field) {
            Some(filter) => filter.selector = selector,
            None => self.dates.push(DateFilter { field, selector }),
        }
    }

    pub fn selected(&self, field: F) -> Option<&BTreeSet<String>> {
        self.categories
            .iter()
            .find(|filter| filter.field == field)
            .map(|filter| &filter.selected)
    }

    pub fn range(&self, field: F) -> Option<NumericRange> {
        self.numeric
            .iter()
            .find(|filter| filter.field == field)
            .map(|filter| filter.range)
    }

    pub fn date_selector(&self, field: F) -> Option<DateSelector> {
        self.dates
            .iter()
            .find(|filter| filter.field == field)
            .map(|filter| filter.selector)
    }

    /// Number of criteria that currently constrain the result set.
    pub fn active_count(&self) -> usize {
        let search = usize::from(self.search.needle().is_some());
        let categories = self
            .categories
            .iter()
            .filter(|filter| !filter.selected.is_empty())
            .count();
        let numeric = self
            .numeric
            .iter()
            .filter(|filter| !filter.range.is_unbounded())
            .count();
        let dates = self
            .dates
            .iter()
            .filter(|filter| !filter.selector.is_unconstrained())
            .count();
        search + categories + numeric + dates
    }
}
