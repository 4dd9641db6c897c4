// src/deal/snapshot.rs
use serde::{Deserialize, Serialize};

use crate::domain::models::{ChatMessage, DealInfo, Document, Milestone, Participant};

/// Point-in-time copy of the whole deal state. This is what external
/// surfaces (dashboards, persistence, rendering) consume; it carries no
/// behavior and detaches from the ledger on creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DealSnapshot {
    pub info: DealInfo,
    pub milestones: Vec<Milestone>,
    pub documents: Vec<Document>,
    pub participants: Vec<Participant>,
    pub messages: Vec<ChatMessage>,
}

impl DealSnapshot {
    /// Portion of the deal value already past escrow (paid or released).
    pub fn completed_value(&self) -> rust_decimal::Decimal {
        use crate::domain::models::MilestoneStatus;

        self.milestones
            .iter()
            .filter(|m| m.status.ordinal() >= MilestoneStatus::Paid.ordinal())
            .map(|m| m.amount)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deal::seed::DealSeed;
    use crate::domain::models::MilestoneStatus;
    use rust_decimal_macros::dec;

    #[test]
    fn test_completed_value_counts_paid_and_released() {
        let seed = DealSeed::sample();
        let mut snapshot = DealSnapshot {
            info: DealInfo {
                deal_id: seed.deal_id.clone(),
                deal_title: seed.deal_title.clone(),
                provider_name: seed.provider_name.clone(),
                client_name: seed.client_name.clone(),
                total_value: seed.total_value,
                current_phase: seed.current_phase,
                health: seed.health,
                escrow_balance: seed.escrow_balance,
                provider_verified: seed.provider_verified,
                nda_signed: seed.nda_signed,
                proposal_approved: seed.proposal_approved,
            },
            milestones: seed.milestones,
            documents: seed.documents,
            participants: seed.participants,
            messages: Vec::new(),
        };

        // Sample seed: m1 (15000) is paid, the rest are not.
        assert_eq!(snapshot.completed_value(), dec!(15000));

        snapshot.milestones[0].status = MilestoneStatus::Released;
        snapshot.milestones[1].status = MilestoneStatus::Paid;
        assert_eq!(snapshot.completed_value(), dec!(32500));
    }
}
