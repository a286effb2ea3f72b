use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::entities::criteria::FilterCriteria;
use crate::domain::entities::pagination::PageSize;
use crate::domain::entities::record::{FieldValue, Record};
use crate::domain::entities::sort::SortConfig;
use crate::domain::entities::view::ViewState;
use crate::usecase::pipeline::export::ColumnSpec;
use crate::usecase::pipeline::sort::Comparators;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserRecord {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: String,
    pub last_login_at: Option<DateTime<Utc>>,
    pub query_count: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserField {
    UserId,
    Name,
    Email,
    Role,
    Status,
    LastLoginAt,
    QueryCount,
}

impl Record for UserRecord {
    type Field = UserField;

    fn value(&self, field: UserField) -> FieldValue<'_> {
        match field {
            UserField::UserId => FieldValue::Text(&self.user_id),
            UserField::Name => FieldValue::Text(&self.name),
            UserField::Email => FieldValue::Text(&self.email),
            UserField::Role => FieldValue::Category(&self.role),
            UserField::Status => FieldValue::Category(&self.status),
            UserField::LastLoginAt => FieldValue::timestamp(self.last_login_at),
            UserField::QueryCount => FieldValue::number(self.query_count),
        }
    }
}

impl UserRecord {
    pub const SEARCH_FIELDS: [UserField; 3] = [UserField::UserId, UserField::Name, UserField::Email];

    pub fn comparators() -> Comparators<UserField> {
        Comparators::new()
    }

    pub fn export_columns() -> Vec<ColumnSpec<UserField>> {
        vec![
            ColumnSpec::new(UserField::UserId, "User ID"),
            ColumnSpec::new(UserField::Name, "Name"),
            ColumnSpec::new(UserField::Email, "Email"),
            ColumnSpec::new(UserField::Role, "Role"),
            ColumnSpec::new(UserField::Status, "Status"),
            ColumnSpec::new(UserField::LastLoginAt, "Last Login"),
            ColumnSpec::new(UserField::QueryCount, "Queries").with_precision(0),
        ]
    }

    pub fn default_view(page_size: PageSize) -> ViewState<UserField> {
        ViewState::new(FilterCriteria::with_search_fields(Self::SEARCH_FIELDS), page_size)
            .with_sort(SortConfig::ascending(UserField::Name))
    }
}
