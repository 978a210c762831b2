//! Bounded agent reputation.
//!
//! Small fixed increments, clamped to `[floor, ceiling]`, so no agent can be
//! silenced entirely or become a unilateral oracle.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use spine_core::config::ConsensusConfig;
use spine_core::models::{AgentId, Verdict};

use crate::outcome::RoundOutcome;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReputationBook {
    scores: BTreeMap<AgentId, f64>,
    initial: f64,
    floor: f64,
    ceiling: f64,
    canonical_bonus: f64,
    theatrical_penalty: f64,
}

impl ReputationBook {
    pub fn new(config: &ConsensusConfig) -> Self {
        Self {
            scores: BTreeMap::new(),
            initial: config.reputation_initial,
            floor: config.reputation_floor,
            ceiling: config.reputation_ceiling,
            canonical_bonus: config.canonical_bonus,
            theatrical_penalty: config.theatrical_penalty,
        }
    }

    /// Current score; unseen agents start at the initial reputation.
    pub fn score(&self, agent: &AgentId) -> f64 {
        self.scores.get(agent).copied().unwrap_or(self.initial)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AgentId, f64)> {
        self.scores.iter().map(|(a, s)| (a, *s))
    }

    /// Add `delta` to an agent's score, clamped to the bounds.
    pub fn adjust(&mut self, agent: &AgentId, delta: f64) -> f64 {
        let next = (self.score(agent) + delta).clamp(self.floor, self.ceiling);
        self.scores.insert(agent.clone(), next);
        next
    }

    /// Canonical rewards the agreeing agents; Theatrical penalizes every
    /// observable participant. Other verdicts leave scores unchanged.
    pub fn apply(&mut self, outcome: &RoundOutcome) {
        let (agents, delta) = match outcome.verdict {
            Verdict::Canonical => (&outcome.agreeing_agents, self.canonical_bonus),
            Verdict::Theatrical => (&outcome.participants, -self.theatrical_penalty),
            Verdict::Pending | Verdict::Verified => return,
        };
        for agent in agents {
            let score = self.adjust(agent, delta);
            debug!(agent = %agent, score, verdict = %outcome.verdict, "reputation adjusted");
        }
    }
}

impl Default for ReputationBook {
    fn default() -> Self {
        Self::new(&ConsensusConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_are_clamped() {
        let mut book = ReputationBook::default();
        let agent = AgentId::from("a");
        for _ in 0..500 {
            book.adjust(&agent, 0.1);
        }
        assert_eq!(book.score(&agent), 10.0);
        for _ in 0..500 {
            book.adjust(&agent, -0.05);
        }
        assert_eq!(book.score(&agent), 0.1);
    }

    #[test]
    fn unseen_agent_has_initial_score() {
        assert_eq!(ReputationBook::default().score(&AgentId::from("new")), 1.0);
    }
}
