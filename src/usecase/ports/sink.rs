use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to write export to {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Host mechanism that hands exported CSV to the user.
pub trait ExportSink {
    /// Returns where the file ended up, or `None` when the user cancelled.
    fn deliver(&self, file_name: &str, contents: &str) -> Result<Option<PathBuf>, SinkError>;
}
