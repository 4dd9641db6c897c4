// src/domain/models.rs
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Negotiation lifecycle stage. Exactly one phase is current at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Discovery,
    Proposal,
    Legal,
    Signature,
    Kickoff,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Discovery => "discovery",
            Phase::Proposal => "proposal",
            Phase::Legal => "legal",
            Phase::Signature => "signature",
            Phase::Kickoff => "kickoff",
        }
    }

    /// The next phase in the default forward flow, if any.
    pub fn next(&self) -> Option<Phase> {
        match self {
            Phase::Discovery => Some(Phase::Proposal),
            Phase::Proposal => Some(Phase::Legal),
            Phase::Legal => Some(Phase::Signature),
            Phase::Signature => Some(Phase::Kickoff),
            Phase::Kickoff => None,
        }
    }

    /// True for the terminal phase of the lifecycle.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Kickoff)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Phase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "discovery" => Ok(Phase::Discovery),
            "proposal" => Ok(Phase::Proposal),
            "legal" => Ok(Phase::Legal),
            "signature" => Ok(Phase::Signature),
            "kickoff" => Ok(Phase::Kickoff),
            other => Err(format!("Unknown phase: {}", other)),
        }
    }
}

/// Risk signal for the deal, independent of phase. Externally supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DealHealth {
    Good,
    AtRisk,
}

impl fmt::Display for DealHealth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DealHealth::Good => write!(f, "good"),
            DealHealth::AtRisk => write!(f, "at-risk"),
        }
    }
}

/// Which side of the table a participant or upload belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Company {
    Provider,
    Client,
}

impl Company {
    pub fn as_str(&self) -> &'static str {
        match self {
            Company::Provider => "provider",
            Company::Client => "client",
        }
    }
}

impl fmt::Display for Company {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Payment tranche status. Strictly forward-moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MilestoneStatus {
    Pending,
    Escrowed,
    Paid,
    Released,
}

impl MilestoneStatus {
    /// Ordinal along the payment pipeline. Transitions may only increase it.
    pub fn ordinal(&self) -> u8 {
        match self {
            MilestoneStatus::Pending => 0,
            MilestoneStatus::Escrowed => 1,
            MilestoneStatus::Paid => 2,
            MilestoneStatus::Released => 3,
        }
    }

    /// The next status in the pipeline, if any.
    pub fn next(&self) -> Option<MilestoneStatus> {
        match self {
            MilestoneStatus::Pending => Some(MilestoneStatus::Escrowed),
            MilestoneStatus::Escrowed => Some(MilestoneStatus::Paid),
            MilestoneStatus::Paid => Some(MilestoneStatus::Released),
            MilestoneStatus::Released => None,
        }
    }

    /// Returns true if moving from self to `next` is a single forward step.
    pub fn can_transition_to(&self, next: MilestoneStatus) -> bool {
        self.next() == Some(next)
    }
}

impl fmt::Display for MilestoneStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MilestoneStatus::Pending => write!(f, "pending"),
            MilestoneStatus::Escrowed => write!(f, "escrowed"),
            MilestoneStatus::Paid => write!(f, "paid"),
            MilestoneStatus::Released => write!(f, "released"),
        }
    }
}

/// A contracted payment tranche tied to a share of total deal value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    pub id: String,
    pub name: String,
    /// Share of total deal value, in whole percent. All milestones sum to 100.
    pub percentage: Decimal,
    /// Currency units. Equals percentage x total deal value.
    pub amount: Decimal,
    pub status: MilestoneStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Proposal,
    Contract,
    Nda,
    Other,
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DocumentType::Proposal => write!(f, "proposal"),
            DocumentType::Contract => write!(f, "contract"),
            DocumentType::Nda => write!(f, "nda"),
            DocumentType::Other => write!(f, "other"),
        }
    }
}

/// A shared deal document. Approval is a one-way latch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub name: String,
    pub doc_type: DocumentType,
    /// Free-form version label, never compared semantically.
    pub version: String,
    pub uploaded_by: Company,
    pub uploaded_at: DateTime<Utc>,
    pub approved: bool,
}

/// A person in the deal room. Fixed at seeding, no add/remove.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub name: String,
    pub role: String,
    pub company: Company,
    pub avatar: Option<String>,
}

/// Severity tag for system-generated log entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemMessageType {
    Info,
    Success,
    Warning,
}

/// Payload of a chat message, split by origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MessageBody {
    User {
        sender: String,
        sender_role: Company,
        content: String,
    },
    System {
        content: String,
        system_type: SystemMessageType,
    },
}

impl MessageBody {
    pub fn content(&self) -> &str {
        match self {
            MessageBody::User { content, .. } => content,
            MessageBody::System { content, .. } => content,
        }
    }
}

/// One entry in the append-only communication log. Id and timestamp are
/// assigned by the ledger at append time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u64,
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub body: MessageBody,
}

/// Deal metadata and the mutable top-level negotiation state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DealInfo {
    pub deal_id: String,
    pub deal_title: String,
    pub provider_name: String,
    pub client_name: String,
    /// Total contracted value of the deal, currency-agnostic.
    pub total_value: Decimal,
    pub current_phase: Phase,
    pub health: DealHealth,
    /// Funds currently held in escrow. Never negative.
    pub escrow_balance: Decimal,
    pub provider_verified: bool,
    pub nda_signed: bool,
    pub proposal_approved: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_forward_chain() {
        assert_eq!(Phase::Discovery.next(), Some(Phase::Proposal));
        assert_eq!(Phase::Proposal.next(), Some(Phase::Legal));
        assert_eq!(Phase::Legal.next(), Some(Phase::Signature));
        assert_eq!(Phase::Signature.next(), Some(Phase::Kickoff));
        assert_eq!(Phase::Kickoff.next(), None);
        assert!(Phase::Kickoff.is_terminal());
    }

    #[test]
    fn test_phase_parse_roundtrip() {
        for phase in [
            Phase::Discovery,
            Phase::Proposal,
            Phase::Legal,
            Phase::Signature,
            Phase::Kickoff,
        ] {
            assert_eq!(phase.as_str().parse::<Phase>(), Ok(phase));
        }
        assert!("closed".parse::<Phase>().is_err());
    }

    #[test]
    fn test_milestone_status_single_step_only() {
        use MilestoneStatus::*;

        assert!(Pending.can_transition_to(Escrowed));
        assert!(Escrowed.can_transition_to(Paid));
        assert!(Paid.can_transition_to(Released));

        // No skips, no backward movement, no self-loops.
        assert!(!Pending.can_transition_to(Paid));
        assert!(!Paid.can_transition_to(Pending));
        assert!(!Escrowed.can_transition_to(Escrowed));
        assert!(!Released.can_transition_to(Pending));
        assert_eq!(Released.next(), None);
    }

    #[test]
    fn test_milestone_status_ordinals_monotonic() {
        use MilestoneStatus::*;

        let mut status = Pending;
        while let Some(next) = status.next() {
            assert!(next.ordinal() > status.ordinal());
            status = next;
        }
    }
}
