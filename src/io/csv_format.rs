//! CSV format handling for journal input and the two output artifacts
//!
//! This module centralizes all CSV format concerns, providing:
//! - RawRecord structure for deserialization
//! - Required-column validation for the input header row
//! - Augmented-table and settlement-extract serialization
//!
//! All functions are pure (no file I/O) for easy testing.

use crate::core::report::ExtractLine;
use crate::types::{LedgerRow, SettlementError};
use csv::StringRecord;
use serde::Deserialize;
use std::io::Write;

/// Columns the input file must carry, in canonical order.
///
/// Extra columns in the input are ignored; a missing one aborts the run.
pub const REQUIRED_COLUMNS: [&str; 6] = ["date", "code", "piece", "lot", "debit", "credit"];

/// Raw journal record as deserialized from one CSV row
///
/// Every field is optional: the export leaves cells empty for header rows
/// (no date), non-document rows (no piece) and rows outside any lot. The
/// csv crate maps empty fields to `None`. Amounts stay as text here; the
/// normalizer coerces them to decimals (unparsable values become zero,
/// never an error).
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct RawRecord {
    pub date: Option<String>,
    pub code: Option<String>,
    pub piece: Option<String>,
    pub lot: Option<String>,
    pub debit: Option<String>,
    pub credit: Option<String>,
}

/// Validate that the input header row names every required column
///
/// Comparison is exact on the trimmed header names. Returns an error
/// naming the first absent column, in [`REQUIRED_COLUMNS`] order, so the
/// caller can surface which field the dataset is missing.
///
/// # Arguments
///
/// * `headers` - The header record read from the input file
///
/// # Returns
///
/// * `Ok(())` if all required columns are present
/// * `Err(SettlementError::MissingColumn)` naming the first absent field
pub fn validate_headers(headers: &StringRecord) -> Result<(), SettlementError> {
    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(SettlementError::missing_column(required));
        }
    }
    Ok(())
}

/// Write the augmented table to CSV format
///
/// Writes every row, in its original order, with columns:
/// `group_id, date, code, piece, lot, debit, credit, settlement_date`.
/// The internal balance column is omitted. Absent optional fields are
/// written as empty cells.
///
/// # Arguments
///
/// * `rows` - The settled rows to write
/// * `output` - Mutable reference to a writer for outputting CSV
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(SettlementError)` if a write error occurred
pub fn write_table_csv(rows: &[LedgerRow], output: &mut dyn Write) -> Result<(), SettlementError> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    writer.write_record([
        "group_id",
        "date",
        "code",
        "piece",
        "lot",
        "debit",
        "credit",
        "settlement_date",
    ])?;

    for row in rows {
        writer.write_record(&[
            row.group_id.to_string(),
            row.date.clone().unwrap_or_default(),
            row.code.clone().unwrap_or_default(),
            row.piece.clone().unwrap_or_default(),
            row.lot.clone().unwrap_or_default(),
            row.debit.to_string(),
            row.credit.to_string(),
            row.settlement_date.clone().unwrap_or_default(),
        ])?;
    }

    writer.flush()?;

    Ok(())
}

/// Write the settlement extract
///
/// One line per settled document, three space-separated fields and no
/// header row: piece reference, compact date, signed amount.
pub fn write_extract(lines: &[ExtractLine], output: &mut dyn Write) -> Result<(), SettlementError> {
    for line in lines {
        writeln!(output, "{} {} {}", line.piece, line.compact_date, line.amount)?;
    }
    output.flush()?;

    Ok(())
}
