use chrono::{DateTime, SecondsFormat, Utc};
use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::domain::entities::record::{FieldValue, Record};
use crate::error::PipelineError;

/// One exported column: which field, its header label, and for numbers the
/// number of decimals to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec<F> {
    pub field: F,
    pub label: String,
    pub precision: Option<usize>,
}

impl<F> ColumnSpec<F> {
    pub fn new(field: F, label: impl Into<String>) -> Self {
        Self {
            field,
            label: label.into(),
            precision: None,
        }
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }
}

pub fn format_value(value: &FieldValue<'_>, precision: Option<usize>) -> String {
    match *value {
        FieldValue::Number(number) if !number.is_finite() => String::new(),
        FieldValue::Number(number) => match precision {
            Some(precision) => format!("{number:.precision$}"),
            None => number.to_string(),
        },
        FieldValue::Timestamp(timestamp) => timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
        FieldValue::Text(text) | FieldValue::Category(text) => text.to_string(),
        FieldValue::Missing => String::new(),
    }
}

/// Writes the header row and one row per record.
///
/// Fields are quoted only when they contain a comma, a double quote or a line
/// break; inner quotes are doubled. Rows end with `\n`.
pub fn to_csv<'a, R, I>(records: I, columns: &[ColumnSpec<R::Field>]) -> Result<String, PipelineError>
where
    R: Record + 'a,
    I: IntoIterator<Item = &'a R>,
{
    if columns.is_empty() {
        return Err(PipelineError::NoColumns);
    }

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer
        .write_record(columns.iter().map(|column| column.label.as_str()))
        .map_err(|err| PipelineError::Export(err.to_string()))?;

    for record in records {
        let row = columns
            .iter()
            .map(|column| format_value(&record.value(column.field), column.precision));
        writer
            .write_record(row)
            .map_err(|err| PipelineError::Export(err.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| PipelineError::Export(err.to_string()))?;
    String::from_utf8(bytes).map_err(|err| PipelineError::Export(err.to_string()))
}

/// `<prefix>_<YYYYMMDD_HHMMSS>.csv`
pub fn export_file_name(prefix: &str, now: DateTime<Utc>) -> String {
    format!("{prefix}_{}.csv", now.format("%Y%m%d_%H%M%S"))
}
