//! Row normalizer
//!
//! First stage of the pipeline: turns raw CSV records into typed
//! [`LedgerRow`] values. The normalizer:
//! - maps the known bank-code spelling variants onto the canonical
//!   [`BANK_CODE`]; any other code passes through unchanged
//! - coerces debit/credit text to decimals, defaulting to zero for empty
//!   or unparsable values (coercion never raises an error)
//! - computes `balance = debit - credit`
//! - parses the raw date text as `%d/%m/%y` for the cutoff comparison
//!   (parse failure is coerced to "no parsed date")
//!
//! It also owns the optional cutoff pre-filter, applied before grouping.

use crate::io::csv_format::RawRecord;
use crate::types::{LedgerRow, BANK_CODE, BANK_CODE_VARIANTS};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Date format used by the journal export (day/month/two-digit-year).
pub const DATE_FORMAT: &str = "%d/%m/%y";

/// Normalize one raw record into a typed ledger row
///
/// `group_id` is left at zero; the grouper assigns it in the next stage.
/// `settlement_date` starts empty and is only ever written by the
/// settlement resolver.
pub fn normalize(record: RawRecord) -> LedgerRow {
    let date = non_empty(record.date);
    let parsed_date = date.as_deref().and_then(parse_date);
    let code = canonicalize_code(non_empty(record.code));
    let debit = coerce_amount(record.debit.as_deref());
    let credit = coerce_amount(record.credit.as_deref());

    LedgerRow {
        group_id: 0,
        date,
        parsed_date,
        code,
        piece: non_empty(record.piece),
        lot: non_empty(record.lot),
        debit,
        credit,
        balance: debit - credit,
        settlement_date: None,
    }
}

/// Drop rows whose parsed date is not strictly greater than the cutoff
///
/// Rows with an absent or unparsable date count as "not greater" and are
/// dropped too. This intentionally removes header rows (which have no
/// date) and can therefore destroy the grouping structure of the filtered
/// set; the behavior is preserved from the upstream tool and the CLI
/// warns when the filter is active.
pub fn apply_cutoff(rows: Vec<LedgerRow>, cutoff: NaiveDate) -> Vec<LedgerRow> {
    rows.into_iter()
        .filter(|row| matches!(row.parsed_date, Some(d) if d > cutoff))
        .collect()
}

/// Map bank-code spelling variants onto the canonical bank code.
///
/// Unrecognized codes pass through unchanged.
fn canonicalize_code(code: Option<String>) -> Option<String> {
    code.map(|c| {
        if BANK_CODE_VARIANTS.contains(&c.as_str()) {
            BANK_CODE.to_string()
        } else {
            c
        }
    })
}

/// Coerce an amount field to a decimal, defaulting to zero.
///
/// Empty, absent and unparsable values all mean "no amount".
fn coerce_amount(field: Option<&str>) -> Decimal {
    field
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| Decimal::from_str(s).ok())
        .unwrap_or(Decimal::ZERO)
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, DATE_FORMAT).ok()
}

/// Treat an empty or whitespace-only field as absent.
fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.trim().is_empty())
}
