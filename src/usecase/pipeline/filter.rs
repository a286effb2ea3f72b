use chrono::{DateTime, Utc};

use crate::domain::entities::criteria::{
    CategoryFilter, DateFilter, FilterCriteria, NumericFilter, SearchFilter,
};
use crate::domain::entities::record::Record;

pub fn matches_search<R: Record>(record: &R, search: &SearchFilter<R::Field>) -> bool {
    match search.needle() {
        Some(needle) => matches_needle(record, &search.fields, &needle),
        None => true,
    }
}

fn matches_needle<R: Record>(record: &R, fields: &[R::Field], needle: &str) -> bool {
    fields
        .iter()
        .any(|field| record.value(*field).to_text().to_lowercase().contains(needle))
}

pub fn matches_category<R: Record>(record: &R, filter: &CategoryFilter<R::Field>) -> bool {
    if filter.selected.is_empty() {
        return true;
    }
    let value = record.value(filter.field).to_text();
    filter.selected.contains(value.as_ref())
}

/// Non-numeric or missing values fail any bounded range.
pub fn matches_numeric<R: Record>(record: &R, filter: &NumericFilter<R::Field>) -> bool {
    if filter.range.is_unbounded() {
        return true;
    }
    record
        .value(filter.field)
        .as_number()
        .is_some_and(|value| filter.range.contains(value))
}

pub fn matches_date<R: Record>(
    record: &R,
    filter: &DateFilter<R::Field>,
    now: DateTime<Utc>,
) -> bool {
    filter
        .selector
        .matches(record.value(filter.field).as_timestamp(), now)
}

pub fn matches<R: Record>(
    record: &R,
    criteria: &FilterCriteria<R::Field>,
    now: DateTime<Utc>,
) -> bool {
    criteria
        .categories
        .iter()
        .all(|filter| matches_category(record, filter))
        && criteria
            .numeric
            .iter()
            .all(|filter| matches_numeric(record, filter))
        && criteria
            .dates
            .iter()
            .all(|filter| matches_date(record, filter, now))
        && matches_search(record, &criteria.search)
}

/// Keeps the records that pass every active criterion, in input order.
pub fn filter<'a, R, I>(
    records: I,
    criteria: &FilterCriteria<R::Field>,
    now: DateTime<Utc>,
) -> Vec<&'a R>
where
    R: Record + 'a,
    I: IntoIterator<Item = &'a R>,
{
    records
        .into_iter()
        .filter(|record| matches(*record, criteria, now))
        .collect()
}
