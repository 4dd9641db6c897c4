// src/lib.rs
// Main library module declarations

pub mod config;
pub mod deal;
pub mod domain;
pub mod infrastructure;

pub use deal::{DealLedger, DealSeed, DealSnapshot};
pub use domain::errors::{AppError, AppResult, LedgerError, LedgerResult};
