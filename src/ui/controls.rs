//! Value transforms behind the filter widgets.
//!
//! Widgets are controlled: they get the current value and hand back a complete
//! replacement, never a patch. Keeping the transforms here lets the selection
//! rules be tested without a renderer.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::domain::entities::criteria::{DateRange, DateSelector, NumericRange};
use crate::domain::entities::record::Record;
use crate::error::PipelineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectMode {
    #[default]
    Multiple,
    /// Picking a value replaces the selection; picking the sole selected
    /// value again clears back to "match all".
    Single,
}

pub fn toggle_selection(
    selected: &BTreeSet<String>,
    value: &str,
    mode: SelectMode,
) -> BTreeSet<String> {
    match mode {
        SelectMode::Multiple => {
            let mut next = selected.clone();
            if !next.remove(value) {
                next.insert(value.to_string());
            }
            next
        }
        SelectMode::Single => {
            if selected.len() == 1 && selected.contains(value) {
                BTreeSet::new()
            } else {
                BTreeSet::from([value.to_string()])
            }
        }
    }
}

/// Text from a numeric filter box. Blank or unparseable input is unbounded.
pub fn parse_bound(text: &str) -> Option<f64> {
    let cleaned = text.trim().replace(',', "");
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|value| value.is_finite())
}

pub fn numeric_range_from_inputs(min: &str, max: &str) -> NumericRange {
    NumericRange::new(parse_bound(min), parse_bound(max))
}

pub fn parse_date(text: &str) -> Result<NaiveDate, PipelineError> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map_err(|_| PipelineError::InvalidDate(text.trim().to_string()))
}

/// Explicit range from two date inputs. Both blank means no explicit range.
pub fn date_range_from_inputs(
    start: &str,
    end: &str,
) -> Result<Option<DateSelector>, PipelineError> {
    match (start.trim().is_empty(), end.trim().is_empty()) {
        (true, true) => Ok(None),
        (false, false) => {
            let range = DateRange::new(parse_date(start)?, parse_date(end)?);
            Ok(Some(DateSelector::Range(range)))
        }
        _ => Err(PipelineError::IncompleteDateRange),
    }
}

/// Distinct non-empty values of `field` in first-seen order.
pub fn options_from<R: Record>(records: &[R], field: R::Field) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut options = Vec::new();
    for record in records {
        let value = record.value(field).to_text();
        if !value.is_empty() && seen.insert(value.to_string()) {
            options.push(value.into_owned());
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn multiple_mode_toggles_membership() {
        let selected = set(&["Failed"]);

        let added = toggle_selection(&selected, "Queued", SelectMode::Multiple);
        let removed = toggle_selection(&added, "Failed", SelectMode::Multiple);

        assert_eq!(added, set(&["Failed", "Queued"]));
        assert_eq!(removed, set(&["Queued"]));
        assert_eq!(selected, set(&["Failed"]), "input must not change");
    }

    #[test]
    fn single_mode_replaces_and_reselect_clears() {
        let first = toggle_selection(&BTreeSet::new(), "ETL_WH", SelectMode::Single);
        let replaced = toggle_selection(&first, "ADHOC_WH", SelectMode::Single);
        let cleared = toggle_selection(&replaced, "ADHOC_WH", SelectMode::Single);

        assert_eq!(first, set(&["ETL_WH"]));
        assert_eq!(replaced, set(&["ADHOC_WH"]));
        assert!(cleared.is_empty());
    }

    #[test]
    fn invalid_numeric_input_is_unbounded() {
        assert_eq!(parse_bound(""), None);
        assert_eq!(parse_bound("abc"), None);
        assert_eq!(parse_bound("inf"), None);
        assert_eq!(parse_bound(" 1,250.5 "), Some(1250.5));

        let range = numeric_range_from_inputs("10", "oops");
        assert_eq!(range, NumericRange::new(Some(10.0), None));
    }

    #[test]
    fn date_inputs_need_both_ends() {
        assert_eq!(date_range_from_inputs("", ""), Ok(None));
        assert_eq!(
            date_range_from_inputs("2024-01-01", ""),
            Err(PipelineError::IncompleteDateRange)
        );
        assert_eq!(
            date_range_from_inputs("2024-01-01", "01/02/2024"),
            Err(PipelineError::InvalidDate("01/02/2024".to_string()))
        );

        let selector = date_range_from_inputs("2024-01-31", "2024-01-01")
            .expect("dates should parse")
            .expect("range should be present");
        match selector {
            DateSelector::Range(range) => {
                assert_eq!(range.start().to_string(), "2024-01-01");
                assert_eq!(range.end().to_string(), "2024-01-31");
            }
            other => panic!("expected explicit range, got {other:?}"),
        }
    }
}
