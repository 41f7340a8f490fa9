//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `row`: Ledger row types, group identifiers, classification codes
//! - `error`: Error types for the settlement engine

pub mod error;
pub mod row;

pub use error::SettlementError;
pub use row::{
    GroupId, LedgerRow, BANK_CODE, BANK_CODE_VARIANTS, VOUCHER_CODE, VOUCHER_PIECE_PREFIX,
};
