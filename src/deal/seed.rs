// src/deal/seed.rs
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::TimeZone;
use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::domain::errors::{AppError, AppResult, LedgerError, LedgerResult};
use crate::domain::models::{
    Company, DealHealth, Document, DocumentType, Milestone, MilestoneStatus, Participant, Phase,
};

/// Initial state for one negotiation. The ledger validates a seed before
/// accepting it; a seed that passes validation satisfies every ledger
/// invariant from the first instant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DealSeed {
    pub deal_id: String,
    pub deal_title: String,
    pub provider_name: String,
    pub client_name: String,
    pub total_value: Decimal,
    pub current_phase: Phase,
    pub health: DealHealth,
    pub escrow_balance: Decimal,
    pub provider_verified: bool,
    pub nda_signed: bool,
    pub proposal_approved: bool,
    pub milestones: Vec<Milestone>,
    pub documents: Vec<Document>,
    pub participants: Vec<Participant>,
}

impl DealSeed {
    /// Load a seed from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let mut file = File::open(path)
            .map_err(|e| AppError::Config(format!("Failed to open seed file: {}", e)))?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| AppError::Config(format!("Failed to read seed file: {}", e)))?;

        let seed: DealSeed = serde_json::from_str(&contents)
            .map_err(|e| AppError::Config(format!("Failed to parse seed file: {}", e)))?;

        Ok(seed)
    }

    /// Check internal consistency: milestone percentages sum to 100, amounts
    /// match the deal value, escrow is non-negative, both company sides are
    /// represented, and ids are unique per entity kind.
    pub fn validate(&self) -> LedgerResult<()> {
        if self.milestones.is_empty() {
            return Err(LedgerError::EmptyMilestones);
        }

        let percent_sum: Decimal = self.milestones.iter().map(|m| m.percentage).sum();
        if percent_sum != dec!(100) {
            return Err(LedgerError::PercentageSum(percent_sum));
        }

        for milestone in &self.milestones {
            let expected = self.total_value * milestone.percentage / dec!(100);
            if milestone.amount != expected {
                return Err(LedgerError::AmountMismatch {
                    id: milestone.id.clone(),
                    amount: milestone.amount,
                    percentage: milestone.percentage,
                });
            }
        }

        if self.escrow_balance < Decimal::ZERO {
            return Err(LedgerError::NegativeEscrow(self.escrow_balance));
        }

        for company in [Company::Provider, Company::Client] {
            if !self.participants.iter().any(|p| p.company == company) {
                return Err(LedgerError::MissingParticipant(company.as_str()));
            }
        }

        check_unique_ids("milestone", self.milestones.iter().map(|m| m.id.as_str()))?;
        check_unique_ids("document", self.documents.iter().map(|d| d.id.as_str()))?;
        check_unique_ids(
            "participant",
            self.participants.iter().map(|p| p.id.as_str()),
        )?;

        Ok(())
    }

    /// A representative mid-negotiation deal, used by the demo binary and
    /// the test suite.
    pub fn sample() -> Self {
        let uploaded_at = Utc.with_ymd_and_hms(2024, 3, 4, 9, 30, 0).unwrap();

        Self {
            deal_id: "deal-2847".to_string(),
            deal_title: "Customer Data Platform Rollout".to_string(),
            provider_name: "Northwind Analytics".to_string(),
            client_name: "Meridian Retail Group".to_string(),
            total_value: dec!(50000),
            current_phase: Phase::Proposal,
            health: DealHealth::Good,
            escrow_balance: dec!(15000),
            provider_verified: true,
            nda_signed: true,
            proposal_approved: false,
            milestones: vec![
                Milestone {
                    id: "m1".to_string(),
                    name: "Discovery & architecture".to_string(),
                    percentage: dec!(30),
                    amount: dec!(15000),
                    status: MilestoneStatus::Paid,
                },
                Milestone {
                    id: "m2".to_string(),
                    name: "Pilot integration".to_string(),
                    percentage: dec!(35),
                    amount: dec!(17500),
                    status: MilestoneStatus::Escrowed,
                },
                Milestone {
                    id: "m3".to_string(),
                    name: "Production rollout".to_string(),
                    percentage: dec!(35),
                    amount: dec!(17500),
                    status: MilestoneStatus::Pending,
                },
            ],
            documents: vec![
                Document {
                    id: "doc-nda".to_string(),
                    name: "Mutual NDA".to_string(),
                    doc_type: DocumentType::Nda,
                    version: "1.0".to_string(),
                    uploaded_by: Company::Client,
                    uploaded_at,
                    approved: true,
                },
                Document {
                    id: "doc-proposal".to_string(),
                    name: "Implementation Proposal".to_string(),
                    doc_type: DocumentType::Proposal,
                    version: "2.1-draft".to_string(),
                    uploaded_by: Company::Provider,
                    uploaded_at,
                    approved: false,
                },
                Document {
                    id: "doc-msa".to_string(),
                    name: "Master Services Agreement".to_string(),
                    doc_type: DocumentType::Contract,
                    version: "0.9".to_string(),
                    uploaded_by: Company::Provider,
                    uploaded_at,
                    approved: false,
                },
            ],
            participants: vec![
                Participant {
                    id: "p1".to_string(),
                    name: "Elena Vasquez".to_string(),
                    role: "Engagement Lead".to_string(),
                    company: Company::Provider,
                    avatar: None,
                },
                Participant {
                    id: "p2".to_string(),
                    name: "Priya Raman".to_string(),
                    role: "Solutions Architect".to_string(),
                    company: Company::Provider,
                    avatar: None,
                },
                Participant {
                    id: "p3".to_string(),
                    name: "Tom Okafor".to_string(),
                    role: "VP Procurement".to_string(),
                    company: Company::Client,
                    avatar: None,
                },
            ],
        }
    }
}

fn check_unique_ids<'a>(
    entity: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> LedgerResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(LedgerError::DuplicateId {
                entity,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}
