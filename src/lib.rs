//! Aggregation engine for UPS Billing Data CSV exports.
//!
//! An export spreads each shipment over several positional, headerless rows:
//! one weight-bearing package line plus charge-only lines (fuel surcharge,
//! tax, accessorials) sharing the tracking number. This crate parses those
//! rows, groups them by tracking number and reduces every group to a single
//! per-shipment cost summary, reconciling the result against the
//! invoice-level totals the export repeats on every row.

pub mod engine;
pub mod models;
pub mod parser;
pub mod storage;
pub mod types;
