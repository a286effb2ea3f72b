//! Table pipeline for the warehouse operations dashboard.
//!
//! Every dashboard table (queries, warehouses, accounts, users, notifications,
//! activity logs, assigned-query tickets) runs the same
//! filter → sort → paginate → export sequence over records that are already
//! resident in memory. The pipeline lives in [`usecase::pipeline`]; record
//! types describe their fields through [`domain::entities::record::Record`].

pub mod domain;
pub mod error;
pub mod infra;
pub mod platform;
pub mod tables;
pub mod ui;
pub mod usecase;

pub use domain::entities::criteria::{
    CategoryFilter, DateFilter, DatePreset, DateRange, DateSelector, FilterCriteria,
    NumericFilter, NumericRange, SearchFilter,
};
pub use domain::entities::pagination::{Page, PageSize, PaginationState};
pub use domain::entities::record::{FieldValue, Record};
pub use domain::entities::sort::{SortConfig, SortDirection};
pub use domain::entities::view::{ViewAction, ViewState};
pub use error::PipelineError;
pub use usecase::pipeline::export::ColumnSpec;
pub use usecase::pipeline::sort::{Comparator, Comparators, RankTable};

#[cfg(test)]
mod tests;
