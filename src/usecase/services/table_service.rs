use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::info;

use crate::domain::entities::record::Record;
use crate::domain::entities::view::ViewState;
use crate::error::PipelineError;
use crate::usecase::pipeline::export::{export_file_name, ColumnSpec};
use crate::usecase::pipeline::sort::Comparators;
use crate::usecase::pipeline::{self, PipelineOutput};
use crate::usecase::ports::sink::{ExportSink, SinkError};
use crate::usecase::ports::source::{RecordSource, SourceError};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// One dashboard table: where its records come from, how its fields sort and
/// which columns it exports.
pub struct TableService<T: Record> {
    source: Arc<dyn RecordSource<T>>,
    comparators: Comparators<T::Field>,
    columns: Vec<ColumnSpec<T::Field>>,
    export_prefix: String,
}

impl<T: Record + 'static> TableService<T> {
    pub fn new(source: Arc<dyn RecordSource<T>>, columns: Vec<ColumnSpec<T::Field>>) -> Self {
        Self {
            source,
            comparators: Comparators::new(),
            columns,
            export_prefix: "export".to_string(),
        }
    }

    pub fn with_comparators(mut self, comparators: Comparators<T::Field>) -> Self {
        self.comparators = comparators;
        self
    }

    pub fn with_export_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.export_prefix = prefix.into();
        self
    }

    pub fn columns(&self) -> &[ColumnSpec<T::Field>] {
        &self.columns
    }

    pub fn comparators(&self) -> &Comparators<T::Field> {
        &self.comparators
    }

    pub fn load(&self) -> Result<Vec<T>, SourceError> {
        let records = self.source.load()?;
        info!(
            source = %self.source.describe(),
            count = records.len(),
            "loaded table records"
        );
        Ok(records)
    }

    pub fn render<'a>(
        &self,
        records: &'a [T],
        view: &ViewState<T::Field>,
        now: DateTime<Utc>,
    ) -> PipelineOutput<'a, T> {
        pipeline::run(records, view, &self.comparators, now)
    }

    pub fn export_csv(
        &self,
        records: &[T],
        view: &ViewState<T::Field>,
        now: DateTime<Utc>,
    ) -> Result<String, PipelineError> {
        pipeline::export(records, view, &self.comparators, &self.columns, now)
    }

    /// Exports the full filtered and sorted set and hands it to `sink`.
    pub fn export(
        &self,
        records: &[T],
        view: &ViewState<T::Field>,
        now: DateTime<Utc>,
        sink: &dyn ExportSink,
    ) -> Result<Option<PathBuf>, ExportError> {
        let contents = self.export_csv(records, view, now)?;
        let file_name = export_file_name(&self.export_prefix, now);
        let delivered = sink.deliver(&file_name, &contents)?;
        match &delivered {
            Some(path) => info!(path = %path.display(), bytes = contents.len(), "export delivered"),
            None => info!(file_name = %file_name, "export cancelled"),
        }
        Ok(delivered)
    }
}
