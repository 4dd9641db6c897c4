// src/domain/errors.rs
use crate::domain::models::MilestoneStatus;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors raised by deal ledger operations. Every rejected mutation leaves
/// the ledger untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("No document with id {0}")]
    DocumentNotFound(String),

    #[error("No milestone with id {0}")]
    MilestoneNotFound(String),

    #[error("Milestone {0} is already released and cannot advance")]
    MilestoneComplete(String),

    #[error("Deal is already at kickoff; no further phase to advance to")]
    PhaseComplete,

    #[error("Escrow balance cannot be negative (got {0})")]
    NegativeEscrow(Decimal),

    #[error("Seed must define at least one milestone")]
    EmptyMilestones,

    #[error("Milestone percentages must sum to 100 (got {0})")]
    PercentageSum(Decimal),

    #[error("Milestone {id} amount {amount} does not match {percentage}% of deal value")]
    AmountMismatch {
        id: String,
        amount: Decimal,
        percentage: Decimal,
    },

    #[error("Seed must include at least one {0} participant")]
    MissingParticipant(&'static str),

    #[error("Duplicate {entity} id {id} in seed")]
    DuplicateId { entity: &'static str, id: String },

    #[error("Invalid milestone transition: {from} -> {to}")]
    InvalidMilestoneTransition {
        from: MilestoneStatus,
        to: MilestoneStatus,
    },
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
pub type LedgerResult<T> = Result<T, LedgerError>;
