//! Ledger row types for the settlement engine
//!
//! This module defines the in-memory representation of one journal row,
//! the group identifier assigned during client grouping, and the
//! classification-code constants that drive block eligibility and
//! settlement priority.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Client group identifier
///
/// Assigned in a single left-to-right pass over the row sequence and
/// never decreases. Rows appearing before the first header row share
/// group 0.
pub type GroupId = u32;

/// Canonical classification code for bank transactions.
///
/// The normalizer maps all known spelling variants onto this value;
/// the settlement resolver gives rows carrying it top priority.
pub const BANK_CODE: &str = "BQ";

/// Journal spellings that all denote a bank transaction.
///
/// The double spaces are part of the export format and must match exactly.
pub const BANK_CODE_VARIANTS: [&str; 4] = ["BQ  010", "EAR 000", "BQ  000", "OD  000"];

/// Classification code for voucher rows.
///
/// Voucher rows are settlement-date candidates only when their piece
/// reference starts with [`VOUCHER_PIECE_PREFIX`].
pub const VOUCHER_CODE: &str = "VT  000";

/// Required first character of a voucher row's piece reference for it to
/// qualify as a settlement-date candidate.
pub const VOUCHER_PIECE_PREFIX: char = 'A';

/// One normalized journal row
///
/// Produced by the row normalizer from a raw CSV record and mutated in
/// exactly two places afterwards: the grouper assigns `group_id`, and the
/// settlement resolver sets `settlement_date` (at most once per row).
///
/// Dates are carried as their raw source text because the observable
/// behavior depends on textual presence, not on parse success: a row with
/// an unparsable but non-empty date is *not* a header, the settlement
/// stamp copies the source text verbatim, and the extract's compact date
/// is the text with its separators removed. `parsed_date` exists solely
/// for the cutoff comparison and is `None` whenever the text is absent or
/// does not parse as `%d/%m/%y`.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerRow {
    /// Client group this row belongs to (0 before the first header)
    pub group_id: GroupId,

    /// Raw date text from the export, `None` when the field was empty
    pub date: Option<String>,

    /// `date` parsed as `%d/%m/%y`; used only for the cutoff filter
    pub parsed_date: Option<NaiveDate>,

    /// Classification code, canonicalized ([`BANK_CODE`] for bank variants)
    pub code: Option<String>,

    /// Document reference; a row with a piece is eligible to receive a
    /// settlement date
    pub piece: Option<String>,

    /// Lot code; rows without one never participate in block matching
    pub lot: Option<String>,

    /// Debit amount, zero when the source field was empty or unparsable
    pub debit: Decimal,

    /// Credit amount, zero when the source field was empty or unparsable
    pub credit: Decimal,

    /// `debit - credit`, computed once by the normalizer
    pub balance: Decimal,

    /// Settlement date stamped by the resolver; starts `None`, written at
    /// most once, never overwritten
    pub settlement_date: Option<String>,
}

impl LedgerRow {
    /// Whether this row opens a new client group.
    ///
    /// A header is a row with no date text and a non-empty classification
    /// code. Presence of unparsable date text disqualifies a row from
    /// being a header.
    pub fn is_header(&self) -> bool {
        self.date.is_none() && self.code.is_some()
    }

    /// Whether this row is a document, i.e. carries a piece reference and
    /// is therefore eligible to receive a settlement date.
    pub fn is_document(&self) -> bool {
        self.piece.is_some()
    }
}
