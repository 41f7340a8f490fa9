//! Benchmark suite for the block matcher
//!
//! Exercises the greedy zero-sum partition on its typical input (short
//! chains that close quickly) and on its quadratic worst case (a subgroup
//! that never nets to zero, so every start position rescans the tail).
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```

use ledger_settle::core::matcher::match_blocks;
use rust_decimal::Decimal;

fn main() {
    divan::main();
}

/// Pairs of balances that each close immediately: the linear typical case
fn closing_pairs(pairs: usize) -> Vec<Decimal> {
    let mut balances = Vec::with_capacity(pairs * 2);
    for i in 0..pairs {
        let amount = Decimal::new(100 + i as i64, 2);
        balances.push(amount);
        balances.push(-amount);
    }
    balances
}

/// Balances that never return to zero: every row orphans, quadratic scan
fn never_netting(rows: usize) -> Vec<Decimal> {
    (0..rows).map(|i| Decimal::new(100 + i as i64, 2)).collect()
}

#[divan::bench(args = [100, 1_000, 10_000])]
fn typical_closing_pairs(bencher: divan::Bencher, pairs: usize) {
    let balances = closing_pairs(pairs);
    bencher.bench(|| match_blocks(divan::black_box(&balances)));
}

#[divan::bench(args = [100, 1_000])]
fn worst_case_all_orphans(bencher: divan::Bencher, rows: usize) {
    let balances = never_netting(rows);
    bencher.bench(|| match_blocks(divan::black_box(&balances)));
}
