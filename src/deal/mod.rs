// src/deal/mod.rs
pub mod ledger;
pub mod seed;
pub mod snapshot;

pub use ledger::DealLedger;
pub use seed::DealSeed;
pub use snapshot::DealSnapshot;
