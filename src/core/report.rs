//! Report builder
//!
//! Derives the summary counts and the settlement-extract projection from
//! a settled row set. The augmented-table projection is the row set
//! itself (serialized by `io::csv_format::write_table_csv`); this module
//! owns what is computed, not how it is written.
//!
//! Both derivations are pure reads: running them any number of times over
//! the same rows yields identical results.

use crate::types::LedgerRow;
use rust_decimal::Decimal;
use std::fmt;

/// Summary counts for one batch run
///
/// `settled_documents` over `total_documents` is the match rate; the gap
/// between the two is the only trace unmatched rows leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettlementSummary {
    /// Rows that received a settlement date
    pub settled_documents: usize,

    /// Rows carrying a piece reference (the matching denominator)
    pub total_documents: usize,
}

impl fmt::Display for SettlementSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "settled {}/{} documents",
            self.settled_documents, self.total_documents
        )
    }
}

/// One line of the settlement extract
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractLine {
    /// Document reference
    pub piece: String,

    /// Settlement date with the `/` separators removed
    pub compact_date: String,

    /// Signed amount, recomputed as `debit - credit`
    pub amount: Decimal,
}

/// Count settled and total documents
pub fn summarize(rows: &[LedgerRow]) -> SettlementSummary {
    SettlementSummary {
        settled_documents: rows.iter().filter(|r| r.settlement_date.is_some()).count(),
        total_documents: rows.iter().filter(|r| r.is_document()).count(),
    }
}

/// Build the settlement extract: one line per settled row
///
/// Only rows with a settlement date appear. Stamping targets documents
/// exclusively, so every settled row carries a piece; both fields are
/// still checked here so the projection never invents a line from a
/// half-formed row.
pub fn extract_lines(rows: &[LedgerRow]) -> Vec<ExtractLine> {
    rows.iter()
        .filter_map(|row| {
            let date = row.settlement_date.as_deref()?;
            let piece = row.piece.as_deref()?;
            Some(ExtractLine {
                piece: piece.to_string(),
                compact_date: date.replace('/', ""),
                amount: row.debit - row.credit,
            })
        })
        .collect()
}
