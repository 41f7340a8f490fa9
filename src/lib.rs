//! Ledger Settlement Engine Library
//! # Overview
//!
//! This library reconciles journal rows exported from an accounting
//! system: it groups rows by client and lot, finds minimal contiguous
//! runs whose balance nets to zero, and stamps a settlement date onto the
//! matched documents.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (LedgerRow, classification codes, errors)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic, one module per pipeline stage:
//!   - [`core::normalizer`] - code canonicalization, amount coercion, cutoff filter
//!   - [`core::grouper`] - client group and lot subgroup assignment
//!   - [`core::matcher`] - greedy zero-sum block matching
//!   - [`core::resolver`] - settlement date selection and stamping
//!   - [`core::report`] - summary counts and output projections
//!   - [`core::engine`] - batch orchestration
//! - [`io`] - CSV ingestion and artifact serialization
//!
//! # Pipeline
//!
//! Data flows strictly left to right, one synchronous pass per batch:
//!
//! reader → normalizer → grouper → matcher → resolver → report → writers
//!
//! # Settlement Priority
//!
//! Within a closed block, the representative date comes from the first
//! bank-marker row; failing that, from the first voucher-marker row whose
//! piece reference starts with "A"; failing that, the block settles no
//! date. The resolved date is stamped onto every document in the block.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use core::{SettledBatch, SettlementEngine, SettlementSummary};
pub use io::{write_extract, write_table_csv, JournalReader, RawRecord};
pub use types::{GroupId, LedgerRow, SettlementError};
