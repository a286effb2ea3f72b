use std::path::PathBuf;

use rfd::FileDialog;

use crate::infra::export::file_sink::write_export;
use crate::usecase::ports::sink::{ExportSink, SinkError};

/// Asks where to save through the native save dialog.
pub struct SaveDialogSink {
    directory: Option<PathBuf>,
}

impl SaveDialogSink {
    pub fn new(directory: Option<PathBuf>) -> Self {
        Self { directory }
    }
}

impl ExportSink for SaveDialogSink {
    fn deliver(&self, file_name: &str, contents: &str) -> Result<Option<PathBuf>, SinkError> {
        let mut dialog = FileDialog::new()
            .set_title("Export CSV")
            .set_file_name(file_name)
            .add_filter("CSV", &["csv"]);
        if let Some(directory) = &self.directory {
            dialog = dialog.set_directory(directory);
        }

        let Some(path) = dialog.save_file() else {
            return Ok(None);
        };
        write_export(&path, contents)?;
        Ok(Some(path))
    }
}
