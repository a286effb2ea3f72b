use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::entities::criteria::FilterCriteria;
use crate::domain::entities::pagination::PageSize;
use crate::domain::entities::record::{FieldValue, Record};
use crate::domain::entities::view::ViewState;
use crate::usecase::pipeline::export::ColumnSpec;
use crate::usecase::pipeline::sort::{Comparators, RankTable};

pub const EDITIONS: [&str; 4] = ["Standard", "Enterprise", "Business Critical", "VPS"];

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AccountRecord {
    pub account_id: String,
    pub name: String,
    pub region: String,
    pub edition: String,
    pub monthly_cost: Option<f64>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountField {
    AccountId,
    Name,
    Region,
    Edition,
    MonthlyCost,
    CreatedAt,
}

impl Record for AccountRecord {
    type Field = AccountField;

    fn value(&self, field: AccountField) -> FieldValue<'_> {
        match field {
            AccountField::AccountId => FieldValue::Text(&self.account_id),
            AccountField::Name => FieldValue::Text(&self.name),
            AccountField::Region => FieldValue::Category(&self.region),
            AccountField::Edition => FieldValue::Category(&self.edition),
            AccountField::MonthlyCost => FieldValue::number(self.monthly_cost),
            AccountField::CreatedAt => FieldValue::timestamp(self.created_at),
        }
    }
}

impl AccountRecord {
    pub const SEARCH_FIELDS: [AccountField; 2] = [AccountField::AccountId, AccountField::Name];

    pub fn comparators() -> Comparators<AccountField> {
        Comparators::new().with_rank(AccountField::Edition, RankTable::ordered(EDITIONS))
    }

    pub fn export_columns(precision: usize) -> Vec<ColumnSpec<AccountField>> {
        vec![
            ColumnSpec::new(AccountField::AccountId, "Account ID"),
            ColumnSpec::new(AccountField::Name, "Name"),
            ColumnSpec::new(AccountField::Region, "Region"),
            ColumnSpec::new(AccountField::Edition, "Edition"),
            ColumnSpec::new(AccountField::MonthlyCost, "Monthly Cost").with_precision(precision),
            ColumnSpec::new(AccountField::CreatedAt, "Created"),
        ]
    }

    pub fn default_view(page_size: PageSize) -> ViewState<AccountField> {
        ViewState::new(FilterCriteria::with_search_fields(Self::SEARCH_FIELDS), page_size)
    }
}
