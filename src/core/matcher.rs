//! Block matcher
//!
//! The algorithmic heart of the engine: partitions one lot subgroup into
//! minimal contiguous zero-sum blocks plus orphan rows.
//!
//! # Algorithm
//!
//! A single greedy pass. From the current start position, balances are
//! accumulated forward; the block closes at the *earliest* position where
//! the running sum falls inside the tolerance, keeping blocks minimal so
//! unrelated later activity is not swallowed into one oversized block. If
//! no extension of the current start closes, that start row is abandoned
//! as an orphan and the scan resumes one position later.
//!
//! The retry-from-next-row policy is quadratic in the worst case (every
//! orphaned start rescans the tail) but linear on the expected input,
//! where each lot's debit/credit chain nets to zero within a few rows.
//! The policy is normative: a prefix-sum or two-pointer variant would
//! pick different block boundaries on ambiguous inputs and must not be
//! substituted.

use rust_decimal::Decimal;
use std::ops::Range;

/// Absolute tolerance under which a running balance counts as zero.
pub fn tolerance() -> Decimal {
    // 0.01
    Decimal::new(1, 2)
}

/// Result of matching one lot subgroup
///
/// Block ranges and orphan indices are positions in the subgroup's own
/// ordered row list, not global row positions. Together they cover the
/// subgroup exactly, with no overlap and no gap: blocks are contiguous
/// and emitted left to right, and every index outside a block is an
/// orphan.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchOutcome {
    /// Closed zero-sum blocks, in order of their start position
    pub blocks: Vec<Range<usize>>,

    /// Indices of rows not covered by any block, ascending
    pub orphans: Vec<usize>,
}

/// Partition a subgroup's balance sequence into zero-sum blocks
///
/// # Arguments
///
/// * `balances` - Per-row balances of one lot subgroup, in row order
///
/// # Returns
///
/// The blocks and orphans covering the sequence. A single balance inside
/// the tolerance forms a one-row block; a sequence that never returns to
/// zero leaves every row orphaned.
pub fn match_blocks(balances: &[Decimal]) -> MatchOutcome {
    let tolerance = tolerance();
    let mut outcome = MatchOutcome::default();

    let mut i = 0;
    while i < balances.len() {
        let mut cumsum = Decimal::ZERO;
        let mut closed = None;

        for (j, balance) in balances.iter().enumerate().skip(i) {
            cumsum += *balance;
            if cumsum.abs() < tolerance {
                closed = Some(j);
                break;
            }
        }

        match closed {
            Some(j) => {
                outcome.blocks.push(i..j + 1);
                i = j + 1;
            }
            None => {
                // Row i cannot open a block; retry from the next row
                outcome.orphans.push(i);
                i += 1;
            }
        }
    }

    outcome
}
