// src/deal/ledger.rs
use rust_decimal::Decimal;

use crate::deal::seed::DealSeed;
use crate::deal::snapshot::DealSnapshot;
use crate::domain::errors::{LedgerError, LedgerResult};
use crate::domain::models::{
    ChatMessage, DealHealth, DealInfo, Document, MessageBody, Milestone, MilestoneStatus,
    Participant, Phase, SystemMessageType,
};
use crate::domain::service::{Clock, IdGenerator};

/// Single source of truth for one deal negotiation.
///
/// Mutations take `&mut self` and are atomic: every precondition is checked
/// before any field changes, so a rejected call leaves no partial state.
/// Reads are plain projections of the current state.
pub struct DealLedger<C: Clock, G: IdGenerator> {
    info: DealInfo,
    milestones: Vec<Milestone>,
    documents: Vec<Document>,
    participants: Vec<Participant>,
    messages: Vec<ChatMessage>,
    clock: C,
    ids: G,
}

impl<C: Clock, G: IdGenerator> DealLedger<C, G> {
    /// Build a ledger from a validated seed. The clock and id generator are
    /// injected so callers (and tests) control time and message numbering.
    /// A system message announcing the deal room opens the log.
    pub fn new(seed: DealSeed, clock: C, ids: G) -> LedgerResult<Self> {
        seed.validate()?;

        let mut ledger = Self {
            info: DealInfo {
                deal_id: seed.deal_id,
                deal_title: seed.deal_title,
                provider_name: seed.provider_name,
                client_name: seed.client_name,
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
            clock,
            ids,
        };

        let announcement = format!(
            "Deal room opened for \"{}\" between {} and {}",
            ledger.info.deal_title, ledger.info.provider_name, ledger.info.client_name
        );
        ledger.add_message(MessageBody::System {
            content: announcement,
            system_type: SystemMessageType::Info,
        });

        log::info!(
            "Created deal ledger {} in phase {}",
            ledger.info.deal_id,
            ledger.info.current_phase
        );

        Ok(ledger)
    }

    // --- Mutations ---

    /// Move to the next phase in the default forward flow.
    pub fn advance_phase(&mut self) -> LedgerResult<Phase> {
        let next = self
            .info
            .current_phase
            .next()
            .ok_or(LedgerError::PhaseComplete)?;

        log::info!(
            "Deal {}: phase {} -> {}",
            self.info.deal_id,
            self.info.current_phase,
            next
        );
        self.info.current_phase = next;
        Ok(next)
    }

    /// Set the phase directly, skipping transition rules. Administrative
    /// override for manual correction flows; prefer `advance_phase`.
    pub fn force_phase(&mut self, phase: Phase) {
        if phase != self.info.current_phase {
            log::warn!(
                "Deal {}: phase forced {} -> {}",
                self.info.deal_id,
                self.info.current_phase,
                phase
            );
        }
        self.info.current_phase = phase;
    }

    /// Latch a document's approval flag. Idempotent for an already-approved
    /// document; an unknown id changes nothing and reports the miss.
    pub fn approve_document(&mut self, doc_id: &str) -> LedgerResult<()> {
        let document = self
            .documents
            .iter_mut()
            .find(|d| d.id == doc_id)
            .ok_or_else(|| LedgerError::DocumentNotFound(doc_id.to_string()))?;

        if !document.approved {
            document.approved = true;
            log::info!("Deal {}: document {} approved", self.info.deal_id, doc_id);
        }
        Ok(())
    }

    /// Approve the proposal and advance the negotiation into legal review.
    /// This is the one built-in phase-transition rule: the target phase is
    /// `Legal` regardless of where the deal currently stands. Idempotent.
    pub fn approve_proposal(&mut self) {
        if !self.info.proposal_approved || self.info.current_phase != Phase::Legal {
            log::info!(
                "Deal {}: proposal approved, entering legal review",
                self.info.deal_id
            );
        }
        self.info.proposal_approved = true;
        self.info.current_phase = Phase::Legal;
    }

    /// Append a message to the communication log, assigning a fresh unique
    /// id and the current timestamp. The log is an audit trail: this is the
    /// only way in, and there is no way out.
    pub fn add_message(&mut self, body: MessageBody) -> u64 {
        let id = self.ids.next_message_id();
        let message = ChatMessage {
            id,
            timestamp: self.clock.now(),
            body,
        };
        self.messages.push(message);
        id
    }

    /// Move a milestone to the given status. Only the single forward step
    /// along `pending -> escrowed -> paid -> released` is accepted.
    pub fn set_milestone_status(
        &mut self,
        milestone_id: &str,
        to: MilestoneStatus,
    ) -> LedgerResult<()> {
        let milestone = self
            .milestones
            .iter_mut()
            .find(|m| m.id == milestone_id)
            .ok_or_else(|| LedgerError::MilestoneNotFound(milestone_id.to_string()))?;

        if !milestone.status.can_transition_to(to) {
            return Err(LedgerError::InvalidMilestoneTransition {
                from: milestone.status,
                to,
            });
        }

        log::info!(
            "Deal {}: milestone {} {} -> {}",
            self.info.deal_id,
            milestone_id,
            milestone.status,
            to
        );
        milestone.status = to;
        Ok(())
    }

    /// Convenience wrapper: advance a milestone one step forward.
    pub fn advance_milestone(&mut self, milestone_id: &str) -> LedgerResult<MilestoneStatus> {
        let current = self
            .milestones
            .iter()
            .find(|m| m.id == milestone_id)
            .map(|m| m.status)
            .ok_or_else(|| LedgerError::MilestoneNotFound(milestone_id.to_string()))?;

        let next = current
            .next()
            .ok_or_else(|| LedgerError::MilestoneComplete(milestone_id.to_string()))?;

        self.set_milestone_status(milestone_id, next)?;
        Ok(next)
    }

    /// Record an externally supplied health signal.
    pub fn set_health(&mut self, health: DealHealth) {
        if health != self.info.health {
            log::info!(
                "Deal {}: health {} -> {}",
                self.info.deal_id,
                self.info.health,
                health
            );
        }
        self.info.health = health;
    }

    /// Record an externally supplied escrow balance. Negative balances are
    /// rejected outright.
    pub fn set_escrow_balance(&mut self, amount: Decimal) -> LedgerResult<()> {
        if amount < Decimal::ZERO {
            return Err(LedgerError::NegativeEscrow(amount));
        }
        self.info.escrow_balance = amount;
        Ok(())
    }

    // --- Reads ---

    pub fn info(&self) -> &DealInfo {
        &self.info
    }

    pub fn phase(&self) -> Phase {
        self.info.current_phase
    }

    pub fn health(&self) -> DealHealth {
        self.info.health
    }

    pub fn escrow_balance(&self) -> Decimal {
        self.info.escrow_balance
    }

    pub fn milestones(&self) -> &[Milestone] {
        &self.milestones
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Full serializable view of the deal for external consumers.
    pub fn snapshot(&self) -> DealSnapshot {
        DealSnapshot {
            info: self.info.clone(),
            milestones: self.milestones.clone(),
            documents: self.documents.clone(),
            participants: self.participants.clone(),
            messages: self.messages.clone(),
        }
    }
}
