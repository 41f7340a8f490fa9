//! I/O module
//!
//! Handles CSV parsing and artifact output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (raw records, header validation,
//!   artifact serialization)
//! - `reader` - Synchronous CSV reader with iterator interface

pub mod csv_format;
pub mod reader;

pub use csv_format::{
    validate_headers, write_extract, write_table_csv, RawRecord, REQUIRED_COLUMNS,
};
pub use reader::JournalReader;
