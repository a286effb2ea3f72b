//! filter → sort → paginate, with export reading the un-paginated result.
//!
//! Every stage is a pure function of its inputs. Records are borrowed for the
//! duration of one call and never copied or retained.

pub mod export;
pub mod filter;
pub mod paginate;
pub mod sort;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::domain::entities::pagination::Page;
use crate::domain::entities::record::Record;
use crate::domain::entities::view::ViewState;
use crate::error::PipelineError;

use self::export::ColumnSpec;
use self::sort::Comparators;

/// What a table view renders after one pipeline run.
pub struct PipelineOutput<'a, R: Record> {
    pub page: Page<&'a R>,
    /// The state the page was computed with, current page clamped into range.
    pub view: ViewState<R::Field>,
    pub filtered_count: usize,
}

/// Filtered and sorted records, before pagination.
pub fn filtered_sorted<'a, R: Record>(
    records: &'a [R],
    view: &ViewState<R::Field>,
    comparators: &Comparators<R::Field>,
    now: DateTime<Utc>,
) -> Vec<&'a R> {
    let filtered = filter::filter(records, &view.criteria, now);
    sort::sort(filtered, view.sort.as_ref(), comparators)
}

pub fn run<'a, R: Record>(
    records: &'a [R],
    view: &ViewState<R::Field>,
    comparators: &Comparators<R::Field>,
    now: DateTime<Utc>,
) -> PipelineOutput<'a, R> {
    let sorted = filtered_sorted(records, view, comparators, now);
    let filtered_count = sorted.len();
    let view = view.clone().clamp_page(filtered_count);
    let page = paginate::paginate(&sorted, view.pagination);

    debug!(
        total = records.len(),
        filtered = filtered_count,
        page = page.current_page,
        total_pages = page.total_pages,
        active_filters = view.criteria.active_count(),
        "table pipeline run"
    );

    PipelineOutput {
        page,
        view,
        filtered_count,
    }
}

/// CSV of every record that passes the filters, in sorted order.
pub fn export<R: Record>(
    records: &[R],
    view: &ViewState<R::Field>,
    comparators: &Comparators<R::Field>,
    columns: &[ColumnSpec<R::Field>],
    now: DateTime<Utc>,
) -> Result<String, PipelineError> {
    let sorted = filtered_sorted(records, view, comparators, now);
    debug!(rows = sorted.len(), columns = columns.len(), "exporting table");
    export::to_csv(sorted, columns)
}
