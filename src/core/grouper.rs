//! Grouper
//!
//! Second stage of the pipeline: assigns a client group identifier to
//! every row from header markers, then partitions each group into lot
//! subgroups.
//!
//! A client group is the maximal run of rows from one header row (no
//! date, non-empty code) up to, but not including, the next header row.
//! Within a group, rows sharing a lot code form one subgroup per
//! `(group_id, lot)` pair; rows without a lot never participate in block
//! matching.

use crate::types::{GroupId, LedgerRow};
use std::collections::HashMap;

/// Ordered subsequence of one client group's rows sharing a lot value
///
/// `indices` point into the full row slice the subgroup was built from,
/// preserving original order. The matcher operates on these per-subgroup
/// lists and reports block boundaries as ranges into them; global row
/// positions are only recovered through `indices`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LotSubgroup {
    /// Client group the subgroup belongs to
    pub group_id: GroupId,

    /// The shared lot value
    pub lot: String,

    /// Positions of the member rows in the full row sequence, in order
    pub indices: Vec<usize>,
}

/// Assign group identifiers in a single left-to-right pass
///
/// The identifier is the running count of header rows seen so far,
/// incremented at each header and shared by the header and all following
/// non-header rows. Rows before the first header get group 0. Identifiers
/// never decrease.
pub fn assign_group_ids(rows: &mut [LedgerRow]) {
    let mut current: GroupId = 0;
    for row in rows.iter_mut() {
        if row.is_header() {
            current += 1;
        }
        row.group_id = current;
    }
}

/// Partition rows into lot subgroups
///
/// Rows without a lot are skipped. Subgroups are keyed by
/// `(group_id, lot)` and returned in the order their key first appears in
/// the row sequence, so downstream processing and output stay
/// deterministic.
pub fn lot_subgroups(rows: &[LedgerRow]) -> Vec<LotSubgroup> {
    let mut subgroups: Vec<LotSubgroup> = Vec::new();
    let mut positions: HashMap<(GroupId, String), usize> = HashMap::new();

    for (index, row) in rows.iter().enumerate() {
        let Some(lot) = row.lot.as_deref() else {
            continue;
        };

        let key = (row.group_id, lot.to_string());
        match positions.get(&key) {
            Some(&pos) => subgroups[pos].indices.push(index),
            None => {
                positions.insert(key, subgroups.len());
                subgroups.push(LotSubgroup {
                    group_id: row.group_id,
                    lot: lot.to_string(),
                    indices: vec![index],
                });
            }
        }
    }

    subgroups
}
