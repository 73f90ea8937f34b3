//! Compares two payment-processing fee schemes over a set of transactions.
//!
//! `engine` holds the fee calculation and enrichment; `report` is the
//! CSV and display boundary around it.

pub mod engine;
pub mod report;
