use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::entities::criteria::{DatePreset, DateSelector, FilterCriteria};
use crate::domain::entities::pagination::PageSize;
use crate::domain::entities::record::{FieldValue, Record};
use crate::domain::entities::sort::SortConfig;
use crate::domain::entities::view::ViewState;
use crate::usecase::pipeline::export::ColumnSpec;
use crate::usecase::pipeline::sort::Comparators;

/// Audit trail entry: who did what to which object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ActivityLogRecord {
    pub id: String,
    pub actor: String,
    pub action: String,
    pub target: String,
    pub source_ip: Option<String>,
    pub occurred_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityField {
    Id,
    Actor,
    Action,
    Target,
    SourceIp,
    OccurredAt,
}

impl Record for ActivityLogRecord {
    type Field = ActivityField;

    fn value(&self, field: ActivityField) -> FieldValue<'_> {
        match field {
            ActivityField::Id => FieldValue::Text(&self.id),
            ActivityField::Actor => FieldValue::Category(&self.actor),
            ActivityField::Action => FieldValue::Category(&self.action),
            ActivityField::Target => FieldValue::Text(&self.target),
            ActivityField::SourceIp => FieldValue::text(self.source_ip.as_deref()),
            ActivityField::OccurredAt => FieldValue::timestamp(self.occurred_at),
        }
    }
}

impl ActivityLogRecord {
    pub const SEARCH_FIELDS: [ActivityField; 3] =
        [ActivityField::Actor, ActivityField::Action, ActivityField::Target];

    pub fn comparators() -> Comparators<ActivityField> {
        Comparators::new()
    }

    pub fn export_columns() -> Vec<ColumnSpec<ActivityField>> {
        vec![
            ColumnSpec::new(ActivityField::Id, "ID"),
            ColumnSpec::new(ActivityField::Actor, "Actor"),
            ColumnSpec::new(ActivityField::Action, "Action"),
            ColumnSpec::new(ActivityField::Target, "Target"),
            ColumnSpec::new(ActivityField::SourceIp, "Source IP"),
            ColumnSpec::new(ActivityField::OccurredAt, "Time"),
        ]
    }

    pub fn default_view(page_size: PageSize, preset: DatePreset) -> ViewState<ActivityField> {
        let criteria = FilterCriteria::with_search_fields(Self::SEARCH_FIELDS)
            .date(ActivityField::OccurredAt, DateSelector::Preset(preset));
        ViewState::new(criteria, page_size)
            .with_sort(SortConfig::descending(ActivityField::OccurredAt))
    }
}
