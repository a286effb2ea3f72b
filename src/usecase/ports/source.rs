use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read records from {location}: {message}")]
    Read { location: String, message: String },

    #[error("record {line} in {location} is malformed: {message}")]
    Malformed {
        location: String,
        line: u64,
        message: String,
    },
}

/// Supplies a fresh collection of records for each load.
///
/// Where the records come from (an API client, a fixture, a file) is up to
/// the implementation; the table pipeline only needs their field shape.
pub trait RecordSource<T> {
    fn load(&self) -> Result<Vec<T>, SourceError>;

    /// Short human-readable origin used in logs and status text.
    fn describe(&self) -> String;
}

/// Records already held in memory, e.g. static fixtures.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource<T> {
    records: Vec<T>,
}

impl<T> InMemorySource<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self { records }
    }
}

impl<T: Clone> RecordSource<T> for InMemorySource<T> {
    fn load(&self) -> Result<Vec<T>, SourceError> {
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        format!("{} in-memory records", self.records.len())
    }
}
