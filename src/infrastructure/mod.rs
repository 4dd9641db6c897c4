// src/infrastructure/mod.rs
// Default capability implementations

use chrono::{DateTime, Utc};

use crate::domain::service::{Clock, IdGenerator};

/// Wall-clock time from the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Hands out message ids by counting up from a starting value.
#[derive(Debug, Clone, Default)]
pub struct SequentialIdGenerator {
    next: u64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self { next: 0 }
    }

    /// Resume numbering after ids already consumed by a seed.
    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_message_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}
