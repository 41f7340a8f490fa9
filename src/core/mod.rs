//! Core business logic module
//!
//! This module contains the settlement pipeline, one submodule per stage:
//! - `normalizer` - raw record canonicalization and the cutoff pre-filter
//! - `grouper` - client group assignment and lot subgroup partitioning
//! - `matcher` - zero-sum block matching (the algorithmic heart)
//! - `resolver` - settlement date selection and stamping
//! - `report` - summary counts and output projections
//! - `engine` - orchestration of one batch run

pub mod engine;
pub mod grouper;
pub mod matcher;
pub mod normalizer;
pub mod report;
pub mod resolver;

pub use engine::{SettledBatch, SettlementEngine};
pub use grouper::LotSubgroup;
pub use matcher::MatchOutcome;
pub use report::{ExtractLine, SettlementSummary};
