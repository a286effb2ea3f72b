use std::io::Read;
use std::marker::PhantomData;
use std::path::PathBuf;

use csv::ReaderBuilder;
use serde::de::DeserializeOwned;

use crate::usecase::ports::source::{RecordSource, SourceError};

/// Reads a table's records from a CSV file with one header row.
///
/// Header names match the record's field names; empty cells deserialize to
/// `None` for optional fields.
pub struct CsvRecordSource<T> {
    path: PathBuf,
    _record: PhantomData<fn() -> T>,
}

impl<T> CsvRecordSource<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _record: PhantomData,
        }
    }
}

impl<T: DeserializeOwned> RecordSource<T> for CsvRecordSource<T> {
    fn load(&self) -> Result<Vec<T>, SourceError> {
        let location = self.path.display().to_string();
        let file = std::fs::File::open(&self.path).map_err(|err| SourceError::Read {
            location: location.clone(),
            message: err.to_string(),
        })?;
        read_records(file, &location)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

pub fn read_records<T, R>(input: R, location: &str) -> Result<Vec<T>, SourceError>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut reader = ReaderBuilder::new().trim(csv::Trim::All).from_reader(input);

    let headers = reader
        .headers()
        .map_err(|err| SourceError::Read {
            location: location.to_string(),
            message: err.to_string(),
        })?
        .clone();
    if headers.is_empty() {
        return Err(SourceError::Read {
            location: location.to_string(),
            message: "csv header is required".to_string(),
        });
    }

    let mut records = Vec::new();
    for row in reader.deserialize::<T>() {
        let record = row.map_err(|err| SourceError::Malformed {
            location: location.to_string(),
            line: err.position().map_or(0, |position| position.line()),
            message: err.to_string(),
        })?;
        records.push(record);
    }
    Ok(records)
}
