use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::entities::criteria::{DatePreset, DateSelector, FilterCriteria};
use crate::domain::entities::pagination::PageSize;
use crate::domain::entities::record::{FieldValue, Record};
use crate::domain::entities::sort::SortConfig;
use crate::domain::entities::view::ViewState;
use crate::usecase::pipeline::export::ColumnSpec;
use crate::usecase::pipeline::sort::Comparators;

pub const STATUSES: [&str; 4] = ["Success", "Failed", "Running", "Queued"];

/// One entry of the query history.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QueryRecord {
    pub query_id: String,
    pub query_text: String,
    pub user_name: String,
    pub warehouse: String,
    pub status: String,
    pub start_time: Option<DateTime<Utc>>,
    pub duration_ms: Option<f64>,
    pub credits_used: Option<f64>,
    pub bytes_scanned: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryField {
    QueryId,
    QueryText,
    User,
    Warehouse,
    Status,
    StartTime,
    DurationMs,
    CreditsUsed,
    BytesScanned,
}

impl QueryField {
    pub const ALL: [QueryField; 9] = [
        QueryField::QueryId,
        QueryField::QueryText,
        QueryField::User,
        QueryField::Warehouse,
        QueryField::Status,
        QueryField::StartTime,
        QueryField::DurationMs,
        QueryField::CreditsUsed,
        QueryField::BytesScanned,
    ];

    pub fn label(self) -> &'static str {
        match self {
            QueryField::QueryId => "Query ID",
            QueryField::QueryText => "Query",
            QueryField::User => "User",
            QueryField::Warehouse => "Warehouse",
            QueryField::Status => "Status",
            QueryField::StartTime => "Started",
            QueryField::DurationMs => "Duration (ms)",
            QueryField::CreditsUsed => "Credits",
            QueryField::BytesScanned => "Bytes Scanned",
        }
    }
}

impl Record for QueryRecord {
    type Field = QueryField;

    fn value(&self, field: QueryField) -> FieldValue<'_> {
        match field {
            QueryField::QueryId => FieldValue::Text(&self.query_id),
            QueryField::QueryText => FieldValue::Text(&self.query_text),
            QueryField::User => FieldValue::Category(&self.user_name),
            QueryField::Warehouse => FieldValue::Category(&self.warehouse),
            QueryField::Status => FieldValue::Category(&self.status),
            QueryField::StartTime => FieldValue::timestamp(self.start_time),
            QueryField::DurationMs => FieldValue::number(self.duration_ms),
            QueryField::CreditsUsed => FieldValue::number(self.credits_used),
            QueryField::BytesScanned => FieldValue::number(self.bytes_scanned),
        }
    }
}

impl QueryRecord {
    pub const SEARCH_FIELDS: [QueryField; 2] = [QueryField::QueryId, QueryField::QueryText];

    pub fn comparators() -> Comparators<QueryField> {
        Comparators::new()
    }

    pub fn export_columns(precision: usize) -> Vec<ColumnSpec<QueryField>> {
        QueryField::ALL
            .into_iter()
            .map(|field| {
                let column = ColumnSpec::new(field, field.label());
                match field {
                    QueryField::CreditsUsed => column.with_precision(precision),
                    QueryField::DurationMs | QueryField::BytesScanned => column.with_precision(0),
                    _ => column,
                }
            })
            .collect()
    }

    /// Newest first over the given window.
    pub fn default_view(page_size: PageSize, preset: DatePreset) -> ViewState<QueryField> {
        let criteria = FilterCriteria::with_search_fields(Self::SEARCH_FIELDS)
            .date(QueryField::StartTime, DateSelector::Preset(preset));
        ViewState::new(criteria, page_size).with_sort(SortConfig::descending(QueryField::StartTime))
    }
}
