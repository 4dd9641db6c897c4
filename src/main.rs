// src/main.rs
use deal_room::config::Config;
use deal_room::deal::{DealLedger, DealSeed};
use deal_room::domain::models::{Company, MessageBody, Phase, SystemMessageType};
use deal_room::domain::AppResult;
use deal_room::infrastructure::{SequentialIdGenerator, SystemClock};

fn main() -> AppResult<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    config.init_logging()?;

    log::info!("Starting deal_room v{}", env!("CARGO_PKG_VERSION"));

    // Seed the deal room
    let seed = match &config.deal.seed_path {
        Some(path) => {
            log::info!("Loading deal seed from {}", path);
            DealSeed::from_file(path)?
        }
        None => {
            log::info!("No seed file configured, using sample deal");
            DealSeed::sample()
        }
    };

    let mut ledger = DealLedger::new(seed, SystemClock, SequentialIdGenerator::new())?;

    log::info!(
        "Deal \"{}\": {} <-> {}, phase {}, health {}, escrow {}",
        ledger.info().deal_title,
        ledger.info().provider_name,
        ledger.info().client_name,
        ledger.phase(),
        ledger.health(),
        ledger.escrow_balance()
    );

    // Walk the default negotiation flow to completion
    ledger.add_message(MessageBody::User {
        sender: "Tom Okafor".to_string(),
        sender_role: Company::Client,
        content: "Reviewed the revised proposal, the milestone split works for us.".to_string(),
    });

    ledger.approve_document("doc-proposal")?;
    ledger.approve_proposal();
    ledger.add_message(MessageBody::System {
        content: "Proposal approved. Deal moved to legal review.".to_string(),
        system_type: SystemMessageType::Success,
    });

    ledger.approve_document("doc-msa")?;
    ledger.advance_phase()?;

    while ledger.phase() != Phase::Kickoff {
        ledger.advance_phase()?;
    }
    ledger.add_message(MessageBody::System {
        content: "Contract signed by both parties. Kickoff scheduled.".to_string(),
        system_type: SystemMessageType::Info,
    });

    // Print the final state for inspection
    let snapshot = ledger.snapshot();
    log::info!(
        "Negotiation finished in phase {} with {} log entries",
        snapshot.info.current_phase,
        snapshot.messages.len()
    );
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}
