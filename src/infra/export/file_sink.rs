use std::path::{Path, PathBuf};

use crate::usecase::ports::sink::{ExportSink, SinkError};

/// Writes exports into a fixed directory, creating it when missing.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

pub fn write_export(path: &Path, contents: &str) -> Result<(), SinkError> {
    let to_error = |source| SinkError::Write {
        path: path.display().to_string(),
        source,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(to_error)?;
    }
    std::fs::write(path, contents).map_err(to_error)
}

impl ExportSink for DirectorySink {
    fn deliver(&self, file_name: &str, contents: &str) -> Result<Option<PathBuf>, SinkError> {
        let path = self.dir.join(file_name);
        write_export(&path, contents)?;
        Ok(Some(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn deliver_creates_directory_and_writes_file() {
        let temp_dir = tempfile::tempdir().expect("should create temp dir");
        let sink = DirectorySink::new(temp_dir.path().join("exports"));

        let path = sink
            .deliver("queries.csv", "Query ID\nQ-1\n")
            .expect("deliver should succeed")
            .expect("file sink never cancels");

        assert_eq!(path, temp_dir.path().join("exports").join("queries.csv"));
        assert_eq!(
            fs::read_to_string(&path).expect("should read export"),
            "Query ID\nQ-1\n"
        );
    }
}
