//! Settlement engine
//!
//! Orchestrates one batch run over an in-memory row collection, applying
//! the five pipeline stages in order:
//!
//! normalizer → grouper → matcher → resolver → report
//!
//! The engine is synchronous and single-threaded: the full row set is
//! materialized before matching begins, each run owns its collection, and
//! nothing is shared across invocations. All file I/O stays with the
//! caller.

use crate::core::grouper::{assign_group_ids, lot_subgroups};
use crate::core::matcher::match_blocks;
use crate::core::normalizer::{apply_cutoff, normalize};
use crate::core::report::{summarize, SettlementSummary};
use crate::core::resolver::{apply_stamps, plan_stamps};
use crate::io::csv_format::RawRecord;
use crate::types::LedgerRow;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Settlement engine for one batch run
///
/// # Examples
///
/// ```
/// use ledger_settle::core::engine::SettlementEngine;
/// use ledger_settle::io::csv_format::RawRecord;
///
/// let engine = SettlementEngine::new();
/// let batch = engine.run(Vec::<RawRecord>::new());
/// assert_eq!(batch.summary.total_documents, 0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SettlementEngine {
    cutoff: Option<NaiveDate>,
}

/// Output of one batch run: the stamped rows plus the summary counts
#[derive(Debug, Clone, PartialEq)]
pub struct SettledBatch {
    /// All post-filter rows, original order, settlement dates stamped
    pub rows: Vec<LedgerRow>,

    /// Settled/total document counts
    pub summary: SettlementSummary,
}

impl SettlementEngine {
    /// Create an engine with no cutoff filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine that drops rows not strictly after `cutoff`
    ///
    /// The filter runs before grouping and also removes rows with absent
    /// or unparsable dates, header rows included (upstream behavior,
    /// preserved; see `core::normalizer::apply_cutoff`).
    pub fn with_cutoff(cutoff: NaiveDate) -> Self {
        Self {
            cutoff: Some(cutoff),
        }
    }

    /// Run the full pipeline over one batch of raw records
    ///
    /// Normalizes the records, optionally applies the cutoff filter,
    /// assigns client groups, partitions into lot subgroups, matches
    /// zero-sum blocks per subgroup, stamps settlement dates and derives
    /// the summary. Infallible by design: journal data problems are
    /// coerced during normalization, unmatched rows simply stay
    /// unstamped.
    pub fn run(&self, records: Vec<RawRecord>) -> SettledBatch {
        let mut rows: Vec<LedgerRow> = records.into_iter().map(normalize).collect();

        if let Some(cutoff) = self.cutoff {
            rows = apply_cutoff(rows, cutoff);
        }

        assign_group_ids(&mut rows);

        for subgroup in lot_subgroups(&rows) {
            let balances: Vec<Decimal> =
                subgroup.indices.iter().map(|&i| rows[i].balance).collect();
            let outcome = match_blocks(&balances);
            let stamps = plan_stamps(&rows, &subgroup, &outcome);
            apply_stamps(&mut rows, &stamps);
        }

        let summary = summarize(&rows);
        SettledBatch { rows, summary }
    }
}
