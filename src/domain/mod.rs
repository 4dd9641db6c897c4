// src/domain/mod.rs
pub mod errors;
pub mod models;
pub mod service;

// Re-export common types for convenience
pub use errors::{AppError, AppResult, LedgerError, LedgerResult};
pub use models::{
    ChatMessage, Company, DealHealth, DealInfo, Document, DocumentType, MessageBody, Milestone,
    MilestoneStatus, Participant, Phase, SystemMessageType,
};
pub use service::{Clock, IdGenerator};
