//! Synchronous CSV reader with iterator interface
//!
//! Provides a streaming iterator over raw journal records from a CSV file.
//! Delegates format concerns to the csv_format module.
//!
//! # Design
//!
//! The JournalReader validates the input header row up front (a missing
//! required column is fatal before a single record is read), then yields
//! records one at a time via the Iterator trait.
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, missing required column) are returned
//!   from `new()`
//! - Structurally broken records (bad quoting, invalid UTF-8) are yielded
//!   as Err variants with line numbers; the caller decides whether to
//!   skip them
//! - Field-level data problems are not errors at this layer: empty fields
//!   deserialize to `None` and amounts stay as raw text for the
//!   normalizer to coerce

use crate::io::csv_format::{validate_headers, RawRecord};
use crate::types::SettlementError;
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

/// Streaming reader over journal CSV records
///
/// # Examples
///
/// ```no_run
/// use ledger_settle::io::reader::JournalReader;
/// use std::path::Path;
///
/// let reader = JournalReader::new(Path::new("journal.csv")).unwrap();
/// let records: Vec<_> = reader.filter_map(Result::ok).collect();
/// println!("read {} records", records.len());
/// ```
#[derive(Debug)]
pub struct JournalReader {
    reader: csv::Reader<File>,
    line_num: u64,
}

impl JournalReader {
    /// Create a new JournalReader from a file path
    ///
    /// Opens the CSV file, reads its header row and verifies that every
    /// required column is present. The CSV reader is configured to:
    /// - Trim whitespace from all fields
    /// - Allow flexible field counts (trailing empty cells)
    /// - Use an 8KB buffer for efficient I/O
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the CSV file
    ///
    /// # Returns
    ///
    /// * `Ok(JournalReader)` if the file opened and the header is complete
    /// * `Err(SettlementError)` for a missing file, I/O failure or an
    ///   incomplete header row
    pub fn new(path: &Path) -> Result<Self, SettlementError> {
        let file = File::open(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                SettlementError::file_not_found(&path.display().to_string())
            } else {
                SettlementError::from(e)
            }
        })?;

        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(file);

        // Fail fast on a malformed schema before any record is consumed
        let headers = reader.headers()?.clone();
        validate_headers(&headers)?;

        Ok(Self {
            reader,
            line_num: 1,
        })
    }
}

impl Iterator for JournalReader {
    type Item = Result<RawRecord, SettlementError>;

    /// Get the next raw record from the CSV file
    ///
    /// # Returns
    ///
    /// * `Some(Ok(RawRecord))` - Successfully deserialized record
    /// * `Some(Err(SettlementError))` - Structurally broken record
    /// * `None` - End of file reached
    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<RawRecord>();

        match deserializer.next()? {
            Ok(record) => {
                self.line_num += 1;
                Some(Ok(record))
            }
            Err(e) => {
                self.line_num += 1;
                let line = e.position().map(|pos| pos.line()).or(Some(self.line_num));
                Some(Err(SettlementError::Csv {
                    line,
                    message: e.to_string(),
                }))
            }
        }
    }
}
