use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::domain::entities::record::{FieldValue, Record};
use crate::domain::entities::sort::SortConfig;

/// Explicit rank for fields whose order is not alphabetical,
/// e.g. `Low < Medium < High`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RankTable {
    ranks: HashMap<String, i64>,
}

#[derive(Clone, Default)]
pub enum Comparator {
    #[default]
    Natural,
    Rank(RankTable),
    Custom(fn(&FieldValue<'_>, &FieldValue<'_>) -> Ordering),
}

/// Per-field comparators for one record type. Fields without an entry use
/// [`Comparator::Natural`].
#[derive(Debug, Clone)]
pub struct Comparators<F> {
    by_field: HashMap<F, Comparator>,
}

static NATURAL: Comparator = Comparator::Natural;

impl RankTable {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        Self {
            ranks: entries
                .into_iter()
                .map(|(value, rank)| (value.into(), rank))
                .collect(),
        }
    }

    /// Ranks values in the order given, starting at 1.
    pub fn ordered<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(values.into_iter().zip(1..))
    }

    pub fn rank(&self, value: &str) -> Option<i64> {
        self.ranks.get(value).copied()
    }

    /// Unranked values order before ranked ones and among themselves naturally.
    pub fn compare(&self, left: &FieldValue<'_>, right: &FieldValue<'_>) -> Ordering {
        let left_rank = left.as_str().and_then(|value| self.rank(value));
        let right_rank = right.as_str().and_then(|value| self.rank(value));
        match (left_rank, right_rank) {
            (None, None) => left.natural_cmp(right),
            (left_rank, right_rank) => left_rank.cmp(&right_rank),
        }
    }
}

impl fmt::Debug for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comparator::Natural => f.write_str("Natural"),
            Comparator::Rank(table) => f.debug_tuple("Rank").field(table).finish(),
            Comparator::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl Comparator {
    pub fn compare(&self, left: &FieldValue<'_>, right: &FieldValue<'_>) -> Ordering {
        match self {
            Comparator::Natural => left.natural_cmp(right),
            Comparator::Rank(table) => table.compare(left, right),
            Comparator::Custom(compare) => compare(left, right),
        }
    }
}

impl<F> Default for Comparators<F> {
    fn default() -> Self {
        Self {
            by_field: HashMap::new(),
        }
    }
}

impl<F: Copy + Eq + Hash> Comparators<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: F, comparator: Comparator) -> Self {
        self.by_field.insert(field, comparator);
        self
    }

    pub fn with_rank(self, field: F, table: RankTable) -> Self {
        self.with(field, Comparator::Rank(table))
    }

    pub fn get(&self, field: F) -> &Comparator {
        self.by_field.get(&field).unwrap_or(&NATURAL)
    }
}

/// Stable sort by one key. `None` keeps the input order.
///
/// Descending reverses the comparator instead of the output, so records with
/// equal keys keep their input order in both directions.
pub fn sort<'a, R, I>(
    records: I,
    config: Option<&SortConfig<R::Field>>,
    comparators: &Comparators<R::Field>,
) -> Vec<&'a R>
where
    R: Record + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let mut sorted: Vec<&'a R> = records.into_iter().collect();
    if let Some(config) = config {
        let comparator = comparators.get(config.key);
        sorted.sort_by(|left, right| {
            config.direction.apply(
                comparator.compare(&left.value(config.key), &right.value(config.key)),
            )
        });
    }
    sorted
}
