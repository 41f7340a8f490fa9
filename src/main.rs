//! Ledger Settlement Engine CLI
//!
//! Command-line interface for reconciling journal rows from a CSV export.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- journal.csv
//! cargo run -- --cutoff 31/12/23 journal.csv
//! cargo run -- --table out.csv --extract out.txt journal.csv
//! ```
//!
//! The program reads journal rows from the input CSV file, runs the
//! settlement pipeline, writes the augmented table and the settlement
//! extract to their output paths, and prints the match summary to stdout.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, file not found, missing column, etc.)

use ledger_settle::cli::{self, CliArgs};
use ledger_settle::core::report::extract_lines;
use ledger_settle::io::{write_extract, write_table_csv, JournalReader};
use ledger_settle::{RawRecord, SettlementEngine, SettlementError};
use std::fs::File;
use std::process;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    if args.cutoff.is_some() {
        // The filter also removes undated rows, and client headers carry
        // no date: grouping can collapse for the filtered set.
        eprintln!("Warning: cutoff filtering drops undated rows, including client header rows");
    }

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Run one batch: read, settle, write both artifacts, print the summary
fn run(args: &CliArgs) -> Result<(), SettlementError> {
    let reader = JournalReader::new(&args.input_file)?;

    // Materialize the full row set before matching begins
    let mut records: Vec<RawRecord> = Vec::new();
    for result in reader {
        match result {
            Ok(record) => records.push(record),
            // Structurally broken rows are skipped, like any other
            // recoverable data problem
            Err(e) => eprintln!("CSV parsing error: {}", e),
        }
    }

    let engine = match args.cutoff {
        Some(cutoff) => SettlementEngine::with_cutoff(cutoff),
        None => SettlementEngine::new(),
    };
    let batch = engine.run(records);

    let mut table = File::create(&args.table_file)?;
    write_table_csv(&batch.rows, &mut table)?;

    let mut extract = File::create(&args.extract_file)?;
    write_extract(&extract_lines(&batch.rows), &mut extract)?;

    println!("{}", batch.summary);

    Ok(())
}
