// tests/negotiation.rs
// End-to-end negotiation flow against the public crate surface.

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal_macros::dec;

use deal_room::deal::{DealLedger, DealSeed};
use deal_room::domain::models::{
    Company, DealHealth, MessageBody, MilestoneStatus, Phase, SystemMessageType,
};
use deal_room::domain::service::Clock;
use deal_room::infrastructure::{SequentialIdGenerator, SystemClock};
use deal_room::LedgerError;

/// Fixed clock so timestamps are reproducible across runs.
struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

fn fixed_clock() -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap())
}

#[test]
fn proposal_approval_moves_deal_to_legal_without_touching_money() {
    // Seed scenario: [30% paid, 35% escrowed, 35% pending], escrow 15000,
    // phase proposal.
    let seed = DealSeed::sample();
    assert_eq!(seed.current_phase, Phase::Proposal);
    assert_eq!(seed.escrow_balance, dec!(15000));

    let mut ledger =
        DealLedger::new(seed, fixed_clock(), SequentialIdGenerator::new()).unwrap();

    ledger.approve_proposal();

    assert!(ledger.info().proposal_approved);
    assert_eq!(ledger.phase(), Phase::Legal);
    assert_eq!(ledger.escrow_balance(), dec!(15000));

    let statuses: Vec<MilestoneStatus> = ledger.milestones().iter().map(|m| m.status).collect();
    assert_eq!(
        statuses,
        vec![
            MilestoneStatus::Paid,
            MilestoneStatus::Escrowed,
            MilestoneStatus::Pending,
        ]
    );
}

#[test]
fn appending_to_an_eight_message_log() {
    let mut ledger = DealLedger::new(
        DealSeed::sample(),
        SystemClock,
        SequentialIdGenerator::new(),
    )
    .unwrap();

    // Grow the log to exactly 8 entries (1 seed announcement + 7).
    for i in 0..7 {
        ledger.add_message(MessageBody::User {
            sender: "Elena Vasquez".to_string(),
            sender_role: Company::Provider,
            content: format!("update {}", i),
        });
    }
    assert_eq!(ledger.messages().len(), 8);

    let id = ledger.add_message(MessageBody::User {
        sender: "Tom Okafor".to_string(),
        sender_role: Company::Client,
        content: "hello".to_string(),
    });

    let messages = ledger.messages();
    assert_eq!(messages.len(), 9);

    let last = messages.last().unwrap();
    assert_eq!(last.id, id);
    assert_eq!(last.body.content(), "hello");
    assert!(messages.iter().take(8).all(|m| m.id != id));
    assert!(messages.iter().all(|m| m.timestamp <= last.timestamp));
}

#[test]
fn full_negotiation_walkthrough() {
    let mut ledger = DealLedger::new(
        DealSeed::sample(),
        SystemClock,
        SequentialIdGenerator::new(),
    )
    .unwrap();

    // Client signs off on the proposal.
    ledger.approve_document("doc-proposal").unwrap();
    ledger.approve_proposal();
    assert_eq!(ledger.phase(), Phase::Legal);

    // Legal review wraps up, contract approved and signed.
    ledger.approve_document("doc-msa").unwrap();
    ledger.advance_phase().unwrap();
    assert_eq!(ledger.phase(), Phase::Signature);
    ledger.advance_phase().unwrap();
    assert_eq!(ledger.phase(), Phase::Kickoff);

    // Second milestone pays out, third goes into escrow.
    ledger.advance_milestone("m2").unwrap();
    ledger.advance_milestone("m3").unwrap();
    ledger.set_escrow_balance(dec!(17500)).unwrap();

    ledger.add_message(MessageBody::System {
        content: "Kickoff scheduled".to_string(),
        system_type: SystemMessageType::Info,
    });

    let snapshot = ledger.snapshot();
    assert!(snapshot.info.current_phase.is_terminal());
    assert_eq!(snapshot.completed_value(), dec!(32500));

    // Approvals latched along the way never reverted.
    assert!(snapshot
        .documents
        .iter()
        .filter(|d| d.id == "doc-proposal" || d.id == "doc-msa")
        .all(|d| d.approved));
}

#[test]
fn rejected_mutations_leave_no_trace() {
    let mut ledger = DealLedger::new(
        DealSeed::sample(),
        SystemClock,
        SequentialIdGenerator::new(),
    )
    .unwrap();

    let before = serde_json::to_string(&ledger.snapshot()).unwrap();

    assert!(matches!(
        ledger.approve_document("nope"),
        Err(LedgerError::DocumentNotFound(_))
    ));
    assert!(matches!(
        ledger.advance_milestone("nope"),
        Err(LedgerError::MilestoneNotFound(_))
    ));
    assert!(matches!(
        ledger.set_milestone_status("m1", MilestoneStatus::Pending),
        Err(LedgerError::InvalidMilestoneTransition { .. })
    ));
    assert!(matches!(
        ledger.set_escrow_balance(dec!(-1)),
        Err(LedgerError::NegativeEscrow(_))
    ));

    let after = serde_json::to_string(&ledger.snapshot()).unwrap();
    assert_eq!(before, after);
}

#[test]
fn health_is_an_external_fact() {
    let mut ledger = DealLedger::new(
        DealSeed::sample(),
        SystemClock,
        SequentialIdGenerator::new(),
    )
    .unwrap();

    ledger.set_health(DealHealth::AtRisk);
    assert_eq!(ledger.health(), DealHealth::AtRisk);

    // Health moves independently of phase.
    ledger.advance_phase().unwrap();
    assert_eq!(ledger.health(), DealHealth::AtRisk);
}
