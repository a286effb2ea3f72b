use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

use chrono::{DateTime, SecondsFormat, Utc};

/// A single primitive field value borrowed from a record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
    Timestamp(DateTime<Utc>),
    Category(&'a str),
    Missing,
}

/// An immutable row that the table pipeline can filter, sort and export.
///
/// `Field` is the closed set of columns for the record type. Implementations
/// resolve a field with a plain `match`, so there is no runtime lookup by
/// column name anywhere in the pipeline.
pub trait Record {
    type Field: Copy + Eq + Hash + fmt::Debug + 'static;

    fn value(&self, field: Self::Field) -> FieldValue<'_>;
}

impl<'a> FieldValue<'a> {
    pub fn number(value: Option<f64>) -> Self {
        value.map_or(FieldValue::Missing, FieldValue::Number)
    }

    pub fn timestamp(value: Option<DateTime<Utc>>) -> Self {
        value.map_or(FieldValue::Missing, FieldValue::Timestamp)
    }

    pub fn text(value: Option<&'a str>) -> Self {
        value.map_or(FieldValue::Missing, FieldValue::Text)
    }

    pub fn as_str(&self) -> Option<&'a str> {
        match *self {
            FieldValue::Text(text) | FieldValue::Category(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match *self {
            FieldValue::Number(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match *self {
            FieldValue::Timestamp(value) => Some(value),
            _ => None,
        }
    }

    /// The text a category filter or a search box compares against.
    pub fn to_text(&self) -> Cow<'a, str> {
        match *self {
            FieldValue::Text(text) | FieldValue::Category(text) => Cow::Borrowed(text),
            FieldValue::Missing => Cow::Borrowed(""),
            other => Cow::Owned(other.to_string()),
        }
    }

    fn variant_rank(&self) -> u8 {
        match self {
            FieldValue::Missing => 0,
            FieldValue::Number(_) => 1,
            FieldValue::Timestamp(_) => 2,
            FieldValue::Category(_) => 3,
            FieldValue::Text(_) => 4,
        }
    }

    /// Natural ordering of two values of the same field.
    ///
    /// Missing values order first. Values of different variants never occur
    /// for one field, but still get a fixed order so the comparison is total.
    pub fn natural_cmp(&self, other: &FieldValue<'_>) -> Ordering {
        match (self, other) {
            (FieldValue::Number(left), FieldValue::Number(right)) => left.total_cmp(right),
            (FieldValue::Timestamp(left), FieldValue::Timestamp(right)) => left.cmp(right),
            (FieldValue::Text(left), FieldValue::Text(right))
            | (FieldValue::Category(left), FieldValue::Category(right)) => left.cmp(right),
            _ => self.variant_rank().cmp(&other.variant_rank()),
        }
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) | FieldValue::Category(text) => f.write_str(text),
            FieldValue::Number(value) => write!(f, "{value}"),
            FieldValue::Timestamp(value) => {
                f.write_str(&value.to_rfc3339_opts(SecondsFormat::Secs, true))
            }
            FieldValue::Missing => Ok(()),
        }
    }
}
