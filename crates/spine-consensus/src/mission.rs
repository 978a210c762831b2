//! Mission seeds: follow-up investigations emitted by a round.

use serde::{Deserialize, Serialize};

use spine_core::constants::MISSION_TAG;
use spine_core::hashing::{tagged_digest, Digest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissionReason {
    /// Observable agreement came from too few distinct vantages.
    InsufficientVantageDiversity,
    /// An attestation disagreed with the largest evidence group.
    Disagreement,
}

impl MissionReason {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InsufficientVantageDiversity => "insufficient_vantage_diversity",
            Self::Disagreement => "disagreement",
        }
    }
}

/// A deterministic, content-addressed follow-up task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    pub id: String,
    pub reason: MissionReason,
    /// The attestation that prompted the mission, if one did.
    pub attestation: Option<Digest>,
}

impl Mission {
    /// Id is `mission-` plus a short digest of (topic, round, reason, attestation).
    pub fn seed(topic: &str, round: u64, reason: MissionReason, attestation: Option<Digest>) -> Self {
        let round_bytes = round.to_be_bytes();
        let attestation_bytes: &[u8] = match &attestation {
            Some(d) => d.as_bytes(),
            None => &[],
        };
        let digest = tagged_digest(
            MISSION_TAG,
            &[
                topic.as_bytes(),
                &round_bytes,
                reason.as_str().as_bytes(),
                attestation_bytes,
            ],
        );
        Self {
            id: format!("mission-{}", digest.short()),
            reason,
            attestation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_deterministic_and_round_scoped() {
        let a = Mission::seed("dns", 1, MissionReason::Disagreement, Some(Digest::of(b"x")));
        let b = Mission::seed("dns", 1, MissionReason::Disagreement, Some(Digest::of(b"x")));
        let c = Mission::seed("dns", 2, MissionReason::Disagreement, Some(Digest::of(b"x")));
        assert_eq!(a, b);
        assert_ne!(a.id, c.id);
        assert!(a.id.starts_with("mission-"));
    }
}
