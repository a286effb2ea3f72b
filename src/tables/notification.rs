use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::entities::criteria::{DatePreset, DateSelector, FilterCriteria};
use crate::domain::entities::pagination::PageSize;
use crate::domain::entities::record::{FieldValue, Record};
use crate::domain::entities::sort::SortConfig;
use crate::domain::entities::view::ViewState;
use crate::usecase::pipeline::export::ColumnSpec;
use crate::usecase::pipeline::sort::{Comparators, RankTable};

pub const SEVERITIES: [&str; 3] = ["Info", "Warning", "Critical"];

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NotificationRecord {
    pub id: String,
    pub title: String,
    pub message: String,
    pub severity: String,
    pub category: String,
    pub read: bool,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationField {
    Id,
    Title,
    Message,
    Severity,
    Category,
    ReadState,
    CreatedAt,
}

impl Record for NotificationRecord {
    type Field = NotificationField;

    fn value(&self, field: NotificationField) -> FieldValue<'_> {
        match field {
            NotificationField::Id => FieldValue::Text(&self.id),
            NotificationField::Title => FieldValue::Text(&self.title),
            NotificationField::Message => FieldValue::Text(&self.message),
            NotificationField::Severity => FieldValue::Category(&self.severity),
            NotificationField::Category => FieldValue::Category(&self.category),
            NotificationField::ReadState => {
                FieldValue::Category(if self.read { "Read" } else { "Unread" })
            }
            NotificationField::CreatedAt => FieldValue::timestamp(self.created_at),
        }
    }
}

impl NotificationRecord {
    pub const SEARCH_FIELDS: [NotificationField; 2] =
        [NotificationField::Title, NotificationField::Message];

    pub fn comparators() -> Comparators<NotificationField> {
        Comparators::new().with_rank(NotificationField::Severity, RankTable::ordered(SEVERITIES))
    }

    pub fn export_columns() -> Vec<ColumnSpec<NotificationField>> {
        vec![
            ColumnSpec::new(NotificationField::Id, "ID"),
            ColumnSpec::new(NotificationField::Title, "Title"),
            ColumnSpec::new(NotificationField::Message, "Message"),
            ColumnSpec::new(NotificationField::Severity, "Severity"),
            ColumnSpec::new(NotificationField::Category, "Category"),
            ColumnSpec::new(NotificationField::ReadState, "Read"),
            ColumnSpec::new(NotificationField::CreatedAt, "Created"),
        ]
    }

    pub fn default_view(page_size: PageSize, preset: DatePreset) -> ViewState<NotificationField> {
        let criteria = FilterCriteria::with_search_fields(Self::SEARCH_FIELDS)
            .date(NotificationField::CreatedAt, DateSelector::Preset(preset));
        ViewState::new(criteria, page_size)
            .with_sort(SortConfig::descending(NotificationField::CreatedAt))
    }
}
