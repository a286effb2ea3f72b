use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::entities::criteria::FilterCriteria;
use crate::domain::entities::pagination::PageSize;
use crate::domain::entities::record::{FieldValue, Record};
use crate::domain::entities::sort::SortConfig;
use crate::domain::entities::view::ViewState;
use crate::usecase::pipeline::export::ColumnSpec;
use crate::usecase::pipeline::sort::{Comparators, RankTable};

/// T-shirt sizes, smallest first.
pub const SIZES: [&str; 10] = [
    "X-Small", "Small", "Medium", "Large", "X-Large", "2X-Large", "3X-Large", "4X-Large",
    "5X-Large", "6X-Large",
];

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WarehouseRecord {
    pub name: String,
    pub size: String,
    pub state: String,
    pub credits_used: Option<f64>,
    pub queued_queries: Option<f64>,
    pub auto_suspend_secs: Option<f64>,
    pub last_resumed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarehouseField {
    Name,
    Size,
    State,
    CreditsUsed,
    QueuedQueries,
    AutoSuspendSecs,
    LastResumedAt,
}

impl Record for WarehouseRecord {
    type Field = WarehouseField;

    fn value(&self, field: WarehouseField) -> FieldValue<'_> {
        match field {
            WarehouseField::Name => FieldValue::Text(&self.name),
            WarehouseField::Size => FieldValue::Category(&self.size),
            WarehouseField::State => FieldValue::Category(&self.state),
            WarehouseField::CreditsUsed => FieldValue::number(self.credits_used),
            WarehouseField::QueuedQueries => FieldValue::number(self.queued_queries),
            WarehouseField::AutoSuspendSecs => FieldValue::number(self.auto_suspend_secs),
            WarehouseField::LastResumedAt => FieldValue::timestamp(self.last_resumed_at),
        }
    }
}

impl WarehouseRecord {
    pub const SEARCH_FIELDS: [WarehouseField; 1] = [WarehouseField::Name];

    pub fn comparators() -> Comparators<WarehouseField> {
        Comparators::new().with_rank(WarehouseField::Size, RankTable::ordered(SIZES))
    }

    pub fn export_columns(precision: usize) -> Vec<ColumnSpec<WarehouseField>> {
        vec![
            ColumnSpec::new(WarehouseField::Name, "Warehouse"),
            ColumnSpec::new(WarehouseField::Size, "Size"),
            ColumnSpec::new(WarehouseField::State, "State"),
            ColumnSpec::new(WarehouseField::CreditsUsed, "Credits Used").with_precision(precision),
            ColumnSpec::new(WarehouseField::QueuedQueries, "Queued").with_precision(0),
            ColumnSpec::new(WarehouseField::AutoSuspendSecs, "Auto Suspend (s)").with_precision(0),
            ColumnSpec::new(WarehouseField::LastResumedAt, "Last Resumed"),
        ]
    }

    /// Most expensive warehouses first.
    pub fn default_view(page_size: PageSize) -> ViewState<WarehouseField> {
        ViewState::new(FilterCriteria::with_search_fields(Self::SEARCH_FIELDS), page_size)
            .with_sort(SortConfig::descending(WarehouseField::CreditsUsed))
    }
}
