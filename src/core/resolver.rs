//! Settlement resolver
//!
//! For each closed block, selects zero or one representative date and
//! stamps it onto the block's documents. Split into two phases so the
//! date selection is a pure function over a read-only view and the
//! mutation is a separate, trivially testable pass:
//!
//! 1. [`plan_stamps`] walks a subgroup's blocks, resolves each block's
//!    date and records which rows it applies to;
//! 2. [`apply_stamps`] writes the planned dates, honoring the write-once
//!    rule for `settlement_date`.
//!
//! # Priority
//!
//! Evaluated over the rows of a block in their original order:
//! 1. the first row whose code is the canonical bank marker wins;
//! 2. otherwise the first voucher-marker row whose piece starts with `A`;
//! 3. otherwise the block gets no date.
//!
//! Rule 1 is taken whenever a bank row exists, even when that row carries
//! no date: the block then resolves to "no date" and rule 2 is not
//! consulted. The resolved date is stamped onto every row of the block
//! that carries a piece reference, not only the matched row. Orphans are
//! never stamped.

use crate::core::grouper::LotSubgroup;
use crate::core::matcher::MatchOutcome;
use crate::types::{LedgerRow, BANK_CODE, VOUCHER_CODE, VOUCHER_PIECE_PREFIX};

/// One planned settlement stamp
///
/// `indices` are global row positions; all of them receive `date`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stamp {
    /// Rows to stamp (documents of one closed block)
    pub indices: Vec<usize>,

    /// The resolved settlement date (raw journal text)
    pub date: String,
}

/// Resolve the representative date for one closed block
///
/// Pure function over the block's rows in original order. Returns `None`
/// when neither priority rule selects a dated row.
pub fn resolve_date(block: &[&LedgerRow]) -> Option<String> {
    if let Some(bank) = block.iter().find(|r| r.code.as_deref() == Some(BANK_CODE)) {
        // Rule 1 applies even when the bank row is dateless; rule 2 is
        // not a fallback in that case.
        return bank.date.clone();
    }

    block
        .iter()
        .find(|r| {
            r.code.as_deref() == Some(VOUCHER_CODE)
                && r.piece
                    .as_deref()
                    .is_some_and(|p| p.starts_with(VOUCHER_PIECE_PREFIX))
        })
        .and_then(|r| r.date.clone())
}

/// Plan the stamps for one matched subgroup
///
/// For every closed block, resolves its date and collects the global
/// indices of the block's piece-bearing rows. Blocks that resolve to no
/// date, and blocks without documents, contribute no stamp. Orphan rows
/// are ignored entirely.
pub fn plan_stamps(
    rows: &[LedgerRow],
    subgroup: &LotSubgroup,
    outcome: &MatchOutcome,
) -> Vec<Stamp> {
    let mut stamps = Vec::new();

    for block in &outcome.blocks {
        let members: Vec<&LedgerRow> = subgroup.indices[block.clone()]
            .iter()
            .map(|&i| &rows[i])
            .collect();

        let Some(date) = resolve_date(&members) else {
            continue;
        };

        let documents: Vec<usize> = subgroup.indices[block.clone()]
            .iter()
            .copied()
            .filter(|&i| rows[i].is_document())
            .collect();

        if !documents.is_empty() {
            stamps.push(Stamp {
                indices: documents,
                date,
            });
        }
    }

    stamps
}

/// Apply planned stamps to the row set
///
/// `settlement_date` is written at most once per row: a row already
/// stamped is never overwritten. With non-overlapping blocks this branch
/// is unreachable within one run; it enforces the invariant if stamps
/// from several plans are ever replayed.
pub fn apply_stamps(rows: &mut [LedgerRow], stamps: &[Stamp]) {
    for stamp in stamps {
        for &index in &stamp.indices {
            let row = &mut rows[index];
            if row.settlement_date.is_none() {
                row.settlement_date = Some(stamp.date.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::matcher::match_blocks;
    use rstest::rstest;
    use rust_decimal::Decimal;

    fn row(date: Option<&str>, code: Option<&str>, piece: Option<&str>, cents: i64) -> LedgerRow {
        LedgerRow {
            group_id: 1,
            date: date.map(String::from),
            parsed_date: None,
            code: code.map(String::from),
            piece: piece.map(String::from),
            lot: Some("L1".to_string()),
            debit: if cents >= 0 { Decimal::new(cents, 2) } else { Decimal::ZERO },
            credit: if cents < 0 { Decimal::new(-cents, 2) } else { Decimal::ZERO },
            balance: Decimal::new(cents, 2),
            settlement_date: None,
        }
    }

    #[test]
    fn test_bank_row_date_wins() {
        let a = row(Some("01/02/24"), Some("BQ"), Some("A1"), 10000);
        let b = row(Some("02/02/24"), Some("VT  000"), Some("A2"), -10000);
        assert_eq!(resolve_date(&[&a, &b]), Some("01/02/24".to_string()));
    }

    #[test]
    fn test_bank_beats_voucher_regardless_of_position() {
        // Voucher row comes first, bank row later: bank still wins.
        let a = row(Some("01/02/24"), Some("VT  000"), Some("A1"), 10000);
        let b = row(Some("02/02/24"), Some("BQ"), Some("P2"), -10000);
        assert_eq!(resolve_date(&[&a, &b]), Some("02/02/24".to_string()));
    }

    #[test]
    fn test_first_bank_row_in_block_order() {
        let a = row(Some("03/02/24"), Some("BQ"), None, 10000);
        let b = row(Some("04/02/24"), Some("BQ"), None, -10000);
        assert_eq!(resolve_date(&[&a, &b]), Some("03/02/24".to_string()));
    }

    #[rstest]
    #[case::eligible_voucher(Some("A123"), Some("05/02/24"))]
    #[case::wrong_prefix(Some("B123"), None)]
    #[case::no_piece(None, None)]
    fn test_voucher_rule_needs_a_prefixed_piece(
        #[case] piece: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        let a = row(Some("05/02/24"), Some("VT  000"), piece, 10000);
        let b = row(Some("06/02/24"), Some("411X"), Some("A9"), -10000);
        assert_eq!(resolve_date(&[&a, &b]), expected.map(String::from));
    }

    #[test]
    fn test_dateless_bank_row_blocks_voucher_fallback() {
        let a = row(None, Some("BQ"), Some("A1"), 10000);
        let b = row(Some("02/02/24"), Some("VT  000"), Some("A2"), -10000);
        assert_eq!(resolve_date(&[&a, &b]), None);
    }

    #[test]
    fn test_no_candidate_means_no_date() {
        let a = row(Some("01/02/24"), Some("411X"), Some("A1"), 10000);
        let b = row(Some("02/02/24"), Some("411X"), Some("A2"), -10000);
        assert_eq!(resolve_date(&[&a, &b]), None);
    }

    fn subgroup(indices: Vec<usize>) -> LotSubgroup {
        LotSubgroup {
            group_id: 1,
            lot: "L1".to_string(),
            indices,
        }
    }

    fn match_subgroup(rows: &[LedgerRow], sg: &LotSubgroup) -> MatchOutcome {
        let balances: Vec<Decimal> = sg.indices.iter().map(|&i| rows[i].balance).collect();
        match_blocks(&balances)
    }

    #[test]
    fn test_stamp_covers_every_document_in_block() {
        let rows = vec![
            row(Some("01/02/24"), Some("BQ"), Some("P1"), 10000),
            row(Some("02/02/24"), Some("VT  000"), Some("A2"), -6000),
            row(Some("03/02/24"), Some("411X"), None, -4000),
        ];
        let sg = subgroup(vec![0, 1, 2]);
        let outcome = match_subgroup(&rows, &sg);

        let stamps = plan_stamps(&rows, &sg, &outcome);
        assert_eq!(stamps.len(), 1);
        // Both documents, not the dateless third row
        assert_eq!(stamps[0].indices, vec![0, 1]);
        assert_eq!(stamps[0].date, "01/02/24");
    }

    #[test]
    fn test_orphans_are_never_stamped() {
        let rows = vec![
            row(Some("01/02/24"), Some("BQ"), Some("P1"), 1000),
            row(Some("02/02/24"), Some("BQ"), Some("P2"), 1000),
        ];
        let sg = subgroup(vec![0, 1]);
        let outcome = match_subgroup(&rows, &sg);
        assert!(outcome.blocks.is_empty());

        assert!(plan_stamps(&rows, &sg, &outcome).is_empty());
    }

    #[test]
    fn test_block_without_documents_stamps_nothing() {
        let rows = vec![
            row(Some("01/02/24"), Some("BQ"), None, 10000),
            row(Some("02/02/24"), Some("411X"), None, -10000),
        ];
        let sg = subgroup(vec![0, 1]);
        let outcome = match_subgroup(&rows, &sg);
        assert_eq!(outcome.blocks.len(), 1);

        assert!(plan_stamps(&rows, &sg, &outcome).is_empty());
    }

    #[test]
    fn test_apply_stamps_writes_planned_rows_only() {
        let mut rows = vec![
            row(Some("01/02/24"), Some("BQ"), Some("P1"), 10000),
            row(Some("02/02/24"), Some("411X"), Some("P2"), -10000),
            row(Some("03/02/24"), Some("411X"), Some("P3"), 700),
        ];
        let stamps = vec![Stamp {
            indices: vec![0, 1],
            date: "01/02/24".to_string(),
        }];

        apply_stamps(&mut rows, &stamps);
        assert_eq!(rows[0].settlement_date.as_deref(), Some("01/02/24"));
        assert_eq!(rows[1].settlement_date.as_deref(), Some("01/02/24"));
        assert_eq!(rows[2].settlement_date, None);
    }

    #[test]
    fn test_apply_stamps_never_overwrites() {
        let mut rows = vec![row(Some("01/02/24"), Some("BQ"), Some("P1"), 0)];
        rows[0].settlement_date = Some("31/01/24".to_string());

        apply_stamps(
            &mut rows,
            &[Stamp {
                indices: vec![0],
                date: "01/02/24".to_string(),
            }],
        );
        assert_eq!(rows[0].settlement_date.as_deref(), Some("31/01/24"));
    }

    #[test]
    fn test_self_closing_voucher_row() {
        // Lone row, debit == credit, voucher code, piece "A123": closes
        // on itself and takes its own date via rule 2.
        let mut lone = row(Some("07/02/24"), Some("VT  000"), Some("A123"), 0);
        lone.debit = Decimal::new(1000, 2);
        lone.credit = Decimal::new(1000, 2);

        let rows = vec![lone];
        let sg = subgroup(vec![0]);
        let outcome = match_subgroup(&rows, &sg);
        assert_eq!(outcome.blocks.len(), 1);

        let stamps = plan_stamps(&rows, &sg, &outcome);
        assert_eq!(stamps.len(), 1);
        assert_eq!(stamps[0].date, "07/02/24");
        assert_eq!(stamps[0].indices, vec![0]);
    }
}
