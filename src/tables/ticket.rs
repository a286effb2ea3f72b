use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::entities::criteria::{DatePreset, DateSelector, FilterCriteria};
use crate::domain::entities::pagination::PageSize;
use crate::domain::entities::record::{FieldValue, Record};
use crate::domain::entities::sort::SortConfig;
use crate::domain::entities::view::ViewState;
use crate::usecase::pipeline::export::ColumnSpec;
use crate::usecase::pipeline::sort::{Comparators, RankTable};

pub const PRIORITIES: [&str; 3] = ["Low", "Medium", "High"];

/// A slow or expensive query assigned to someone for optimization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AssignedQueryTicket {
    pub ticket_id: String,
    pub query_id: String,
    pub title: String,
    pub assignee: String,
    pub priority: String,
    pub status: String,
    pub created_at: Option<DateTime<Utc>>,
    pub estimated_savings: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TicketField {
    TicketId,
    QueryId,
    Title,
    Assignee,
    Priority,
    Status,
    CreatedAt,
    EstimatedSavings,
}

impl Record for AssignedQueryTicket {
    type Field = TicketField;

    fn value(&self, field: TicketField) -> FieldValue<'_> {
        match field {
            TicketField::TicketId => FieldValue::Text(&self.ticket_id),
            TicketField::QueryId => FieldValue::Text(&self.query_id),
            TicketField::Title => FieldValue::Text(&self.title),
            TicketField::Assignee => FieldValue::Category(&self.assignee),
            TicketField::Priority => FieldValue::Category(&self.priority),
            TicketField::Status => FieldValue::Category(&self.status),
            TicketField::CreatedAt => FieldValue::timestamp(self.created_at),
            TicketField::EstimatedSavings => FieldValue::number(self.estimated_savings),
        }
    }
}

impl AssignedQueryTicket {
    pub const SEARCH_FIELDS: [TicketField; 3] =
        [TicketField::TicketId, TicketField::QueryId, TicketField::Title];

    pub fn comparators() -> Comparators<TicketField> {
        Comparators::new().with_rank(TicketField::Priority, RankTable::ordered(PRIORITIES))
    }

    pub fn export_columns(precision: usize) -> Vec<ColumnSpec<TicketField>> {
        vec![
            ColumnSpec::new(TicketField::TicketId, "Ticket ID"),
            ColumnSpec::new(TicketField::QueryId, "Query ID"),
            ColumnSpec::new(TicketField::Title, "Title"),
            ColumnSpec::new(TicketField::Assignee, "Assignee"),
            ColumnSpec::new(TicketField::Priority, "Priority"),
            ColumnSpec::new(TicketField::Status, "Status"),
            ColumnSpec::new(TicketField::CreatedAt, "Created"),
            ColumnSpec::new(TicketField::EstimatedSavings, "Estimated Savings")
                .with_precision(precision),
        ]
    }

    /// Highest priority first, every ticket regardless of age.
    pub fn default_view(page_size: PageSize) -> ViewState<TicketField> {
        let criteria = FilterCriteria::with_search_fields(Self::SEARCH_FIELDS)
            .date(TicketField::CreatedAt, DateSelector::Preset(DatePreset::All));
        ViewState::new(criteria, page_size).with_sort(SortConfig::descending(TicketField::Priority))
    }
}
