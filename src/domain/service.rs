// src/domain/service.rs
// Capability interfaces injected into the ledger

use chrono::{DateTime, Utc};

/// Source of message timestamps. Injected so tests can pin time.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Source of unique, monotonically increasing message ids.
pub trait IdGenerator {
    fn next_message_id(&mut self) -> u64;
}
