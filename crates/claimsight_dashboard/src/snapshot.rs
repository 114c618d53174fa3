//! Data snapshot model
//!
//! The read-only structured object supplying every numeric and textual
//! value the visual components consume. It is provided by an external
//! data-loading layer once per render cycle; the engine never mutates
//! it, and nothing here outlives the rendered view.

use serde::Deserialize;

use crate::error::Result;

/// The full dashboard snapshot
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DashboardSnapshot {
    /// Human-readable header date ("June 23, 2025")
    pub date: String,
    pub files_status: FilesStatus,
    pub settlements: Settlements,
    pub deadlines: Deadlines,
    pub assessments: Assessments,
    pub calendar: Calendar,
    pub pending_documents: Vec<String>,
}

impl DashboardSnapshot {
    /// Parse a snapshot from its JSON wire form
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Active and closed claim-file counts
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FilesStatus {
    pub active: ClaimCounts,
    pub closed: ClaimCounts,
}

/// Per-claim-type counts with their total
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ClaimCounts {
    pub total: u64,
    pub accident_benefit_claim: u64,
    pub bodily_injury_claim: u64,
    pub property_damage_claim: u64,
}

/// Settlement totals
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Settlements {
    pub total_settled_files: u64,
    pub accident_benefit_claim: u64,
    pub bodily_injury_claim: u64,
}

/// Deadline labels and insurance counts
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Deadlines {
    /// General deadline categories, one per progress bar
    pub general: Vec<String>,
    pub insurance: InsuranceDeadlines,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct InsuranceDeadlines {
    pub insurance_examinations: u64,
    pub upcoming_assessment: String,
    pub done_assessments: String,
    pub inform_to_ab_insurance: u64,
    pub inform_to_bi_insurance: u64,
}

/// Assessment counts and labels
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Assessments {
    pub upcoming_assessments: u64,
    pub inform_to_client: String,
    pub additional_text: String,
}

/// Calendar state
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Calendar {
    pub selected_date: String,
    pub note: String,
}
