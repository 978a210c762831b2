//! ConsensusRound: attestations for one topic and their evaluation.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use spine_core::config::FalsifierPolicy;
use spine_core::errors::{ConsensusError, SpineResult};
use spine_core::hashing::Digest;
use spine_core::models::{AgentId, Attestation, VantageId, Verdict};

use crate::context::RoundContext;
use crate::mission::{Mission, MissionReason};
use crate::outcome::{Disagreement, RoundFlag, RoundOutcome};

/// Attestations collected for one topic. Every layer is recorded; only
/// `Observable` attestations are evaluated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsensusRound {
    topic: String,
    attestations: Vec<Attestation>,
}

impl ConsensusRound {
    pub fn new(topic: impl Into<String>) -> SpineResult<Self> {
        let topic = topic.into();
        if topic.trim().is_empty() {
            return Err(ConsensusError::EmptyTopic.into());
        }
        Ok(Self {
            topic,
            attestations: Vec::new(),
        })
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn attestations(&self) -> &[Attestation] {
        &self.attestations
    }

    /// Record an attestation. Rejects attestations about another topic.
    pub fn add(&mut self, attestation: Attestation) -> SpineResult<()> {
        if attestation.topic() != self.topic {
            return Err(ConsensusError::TopicMismatch {
                round_topic: self.topic.clone(),
                attestation_topic: attestation.topic().to_string(),
            }
            .into());
        }
        self.attestations.push(attestation);
        Ok(())
    }

    pub fn extend<I>(&mut self, attestations: I) -> SpineResult<()>
    where
        I: IntoIterator<Item = Attestation>,
    {
        for attestation in attestations {
            self.add(attestation)?;
        }
        Ok(())
    }

    pub fn observable(&self) -> impl Iterator<Item = &Attestation> {
        self.attestations.iter().filter(|a| a.is_observable())
    }

    /// Verdict alone, advisory policy.
    pub fn verdict(&self, quorum: usize) -> Result<Verdict, ConsensusError> {
        let ctx = RoundContext::new(0, quorum)?;
        Ok(self.evaluate(&ctx, FalsifierPolicy::Advisory).verdict)
    }

    /// Evaluate the round under an explicit context.
    pub fn evaluate(&self, ctx: &RoundContext, policy: FalsifierPolicy) -> RoundOutcome {
        let observable: Vec<&Attestation> = self.observable().collect();
        let participants: Vec<AgentId> = observable
            .iter()
            .map(|a| a.agent().clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let mut outcome = RoundOutcome {
            topic: self.topic.clone(),
            round: ctx.round,
            quorum: ctx.quorum,
            verdict: Verdict::Pending,
            disagreements: Vec::new(),
            missions: Vec::new(),
            flags: Vec::new(),
            winning_evidence: None,
            agreeing_vantages: 0,
            agreeing_agents: Vec::new(),
            participants,
            observable: observable.len(),
            recorded: self.attestations.len(),
        };

        if observable.len() < ctx.quorum {
            return outcome;
        }

        let distinct_vantages = distinct_vantages(&observable);
        if distinct_vantages < ctx.quorum {
            outcome.verdict = Verdict::Theatrical;
            outcome.flags.push(RoundFlag::InsufficientVantageDiversity {
                distinct_vantages,
                quorum: ctx.quorum,
            });
            outcome.missions.push(Mission::seed(
                &self.topic,
                ctx.round,
                MissionReason::InsufficientVantageDiversity,
                None,
            ));
            return outcome;
        }

        let mut groups: BTreeMap<Digest, Vec<&Attestation>> = BTreeMap::new();
        for attestation in &observable {
            groups.entry(attestation.evidence()).or_default().push(*attestation);
        }
        let Some((evidence, group)) = largest_group(&groups) else {
            return outcome;
        };
        let group_vantages = self::distinct_vantages(group);
        outcome.agreeing_vantages = group_vantages;
        outcome.agreeing_agents = group
            .iter()
            .map(|a| a.agent().clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        // Repeated submissions of one claim share an id and yield one mission.
        let mut seen = BTreeSet::new();
        for attestation in observable
            .iter()
            .filter(|a| a.evidence() != evidence)
            .filter(|a| seen.insert(a.id()))
        {
            outcome.disagreements.push(Disagreement {
                attestation: attestation.id(),
                agent: attestation.agent().clone(),
                vantage: attestation.vantage().clone(),
                evidence: attestation.evidence(),
            });
            outcome.missions.push(Mission::seed(
                &self.topic,
                ctx.round,
                MissionReason::Disagreement,
                Some(attestation.id()),
            ));
        }

        if group.len() >= ctx.quorum {
            outcome.winning_evidence = Some(evidence);
            outcome.verdict = if group_vantages >= ctx.quorum {
                Verdict::Canonical
            } else {
                Verdict::Verified
            };
            if outcome.verdict == Verdict::Canonical
                && policy == FalsifierPolicy::Enforce
                && group.iter().all(|a| a.falsifier().map_or(true, |f| f.trim().is_empty()))
            {
                outcome.verdict = Verdict::Verified;
                outcome.flags.push(RoundFlag::MissingFalsifier);
            }
        }
        outcome
    }
}

fn distinct_vantages(attestations: &[&Attestation]) -> usize {
    attestations
        .iter()
        .map(|a| a.vantage())
        .collect::<BTreeSet<&VantageId>>()
        .len()
}

/// Largest group by size, then by distinct vantages; remaining ties go to
/// the smallest evidence digest.
fn largest_group<'g, 'a>(
    groups: &'g BTreeMap<Digest, Vec<&'a Attestation>>,
) -> Option<(Digest, &'g [&'a Attestation])> {
    let mut best: Option<(Digest, &'g [&'a Attestation], usize)> = None;
    for (evidence, group) in groups {
        let vantages = distinct_vantages(group);
        let better = match &best {
            None => true,
            Some((_, current, current_vantages)) => {
                (group.len(), vantages) > (current.len(), *current_vantages)
            }
        };
        if better {
            best = Some((*evidence, group.as_slice(), vantages));
        }
    }
    best.map(|(evidence, group, _)| (evidence, group))
}
