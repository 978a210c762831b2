use serde::{Deserialize, Serialize};

use spine_core::hashing::Digest;
use spine_core::models::{AgentId, Payload, VantageId, Verdict, VerdictPayload};

use crate::mission::Mission;

/// An observable attestation outside the largest evidence group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disagreement {
    pub attestation: Digest,
    pub agent: AgentId,
    pub vantage: VantageId,
    pub evidence: Digest,
}

/// Conditions attached to a verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "flag", rename_all = "snake_case")]
pub enum RoundFlag {
    InsufficientVantageDiversity { distinct_vantages: usize, quorum: usize },
    /// A Canonical verdict was downgraded because its group carried no falsifier.
    MissingFalsifier,
}

/// Everything a round produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub topic: String,
    pub round: u64,
    pub quorum: usize,
    pub verdict: Verdict,
    pub disagreements: Vec<Disagreement>,
    pub missions: Vec<Mission>,
    pub flags: Vec<RoundFlag>,
    /// Evidence digest of the largest group when it reached quorum.
    pub winning_evidence: Option<Digest>,
    /// Distinct vantages in the largest evidence group.
    pub agreeing_vantages: usize,
    /// Agents in the largest evidence group, sorted.
    pub agreeing_agents: Vec<AgentId>,
    /// Agents with at least one observable attestation, sorted.
    pub participants: Vec<AgentId>,
    pub observable: usize,
    /// All attestations in the round, any layer.
    pub recorded: usize,
}

impl RoundOutcome {
    pub fn mission_ids(&self) -> Vec<&str> {
        self.missions.iter().map(|m| m.id.as_str()).collect()
    }

    /// Ledger payload that feeds this verdict back into the spine.
    pub fn to_payload(&self) -> Payload {
        Payload::Verdict(VerdictPayload {
            topic: self.topic.clone(),
            round: self.round,
            verdict: self.verdict,
            quorum: self.quorum,
            evidence: self.winning_evidence,
            agreeing_vantages: self.agreeing_vantages,
            missions: self.missions.iter().map(|m| m.id.clone()).collect(),
        })
    }
}
