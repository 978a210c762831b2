//! ConsensusEngine: runs rounds and keeps the reputation book.

use rayon::prelude::*;
use tracing::instrument;

use spine_core::config::ConsensusConfig;
use spine_core::errors::SpineResult;
use spine_core::models::Attestation;
use spine_observability::tracing_setup::events;

use crate::context::RoundContext;
use crate::outcome::RoundOutcome;
use crate::reputation::ReputationBook;
use crate::round::ConsensusRound;

#[derive(Debug, Clone, Default)]
pub struct ConsensusEngine {
    config: ConsensusConfig,
    reputation: ReputationBook,
}

impl ConsensusEngine {
    pub fn new(config: ConsensusConfig) -> Self {
        let reputation = ReputationBook::new(&config);
        Self { config, reputation }
    }

    pub fn config(&self) -> &ConsensusConfig {
        &self.config
    }

    pub fn reputation(&self) -> &ReputationBook {
        &self.reputation
    }

    /// Context for `round` with the configured default quorum.
    pub fn context(&self, round: u64) -> SpineResult<RoundContext> {
        Ok(RoundContext::from_config(round, &self.config)?)
    }

    /// Collect, evaluate, and apply reputation for one round.
    #[instrument(skip(self, attestations), fields(round = ctx.round, quorum = ctx.quorum))]
    pub fn run<I>(&mut self, topic: &str, attestations: I, ctx: &RoundContext) -> SpineResult<RoundOutcome>
    where
        I: IntoIterator<Item = Attestation>,
    {
        let mut round = ConsensusRound::new(topic)?;
        round.extend(attestations)?;
        let outcome = self.evaluate(&round, ctx);
        self.reputation.apply(&outcome);
        Ok(outcome)
    }

    /// Evaluate without touching reputation.
    pub fn evaluate(&self, round: &ConsensusRound, ctx: &RoundContext) -> RoundOutcome {
        let outcome = round.evaluate(ctx, self.config.falsifier_policy);
        events::verdict_reached(&outcome.topic, outcome.round, outcome.verdict, outcome.missions.len());
        outcome
    }

    /// Evaluate independent rounds in parallel. Outcomes keep input order;
    /// reputation is not touched.
    pub fn evaluate_rounds_parallel(&self, rounds: &[(ConsensusRound, RoundContext)]) -> Vec<RoundOutcome> {
        rounds
            .par_iter()
            .map(|(round, ctx)| self.evaluate(round, ctx))
            .collect()
    }

    /// Apply reputation updates for outcomes, in order.
    pub fn apply_outcomes(&mut self, outcomes: &[RoundOutcome]) {
        for outcome in outcomes {
            self.reputation.apply(outcome);
        }
    }
}
