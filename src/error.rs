//! Errors raised at the pipeline boundary.
//!
//! The pipeline itself is total: empty results, out-of-range pages and
//! unparseable numeric bounds are normal states. These variants cover values
//! that never come out of the filter controls.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    #[error("unsupported page size {0}; expected one of 10, 20, 50, 100")]
    InvalidPageSize(usize),

    #[error("unknown date preset '{0}'; expected one of 1d, 7d, 30d, All")]
    UnknownDatePreset(String),

    #[error("invalid date '{0}'; expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("date range needs both a start and an end date")]
    IncompleteDateRange,

    #[error("csv export needs at least one column")]
    NoColumns,

    #[error("csv export failed: {0}")]
    Export(String),
}
