//! Attestations: immutable claims by one agent about one topic.
//!
//! # Examples
//!
//! ```
//! use spine_core::hashing::Digest;
//! use spine_core::models::{Attestation, Layer};
//!
//! let a = Attestation::new("agent-1", "dns/example.org", Layer::Observable, Digest::of(b"A 93.184.216.34"), "eu-west", 0.9).unwrap();
//! assert!(a.is_observable());
//! assert!(Attestation::new("agent-1", "t", Layer::Observable, Digest::of(b"e"), "v", 1.5).is_err());
//! ```

use serde::{Deserialize, Serialize};

use super::identity::{AgentId, VantageId};
use crate::constants::ATTESTATION_TAG;
use crate::errors::{ConsensusError, SpineResult};
use crate::hashing::{tagged_digest, Digest};

/// Epistemic layer of an attestation. Only `Observable` claims are
/// independently checkable and can produce a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    Observable,
    Interpretation,
    Recommendation,
}

impl Layer {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Observable => "observable",
            Self::Interpretation => "interpretation",
            Self::Recommendation => "recommendation",
        }
    }
}

/// A claim by one agent, from one vantage, about one topic.
///
/// Fields are private: an attestation never changes after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attestation {
    id: Digest,
    agent: AgentId,
    topic: String,
    layer: Layer,
    evidence: Digest,
    vantage: VantageId,
    confidence: f64,
    #[serde(default)]
    falsifier: Option<String>,
}

impl Attestation {
    /// Create an attestation. Fails if `confidence` is outside `[0, 1]` or
    /// the topic is empty.
    pub fn new(
        agent: impl Into<AgentId>,
        topic: impl Into<String>,
        layer: Layer,
        evidence: Digest,
        vantage: impl Into<VantageId>,
        confidence: f64,
    ) -> SpineResult<Self> {
        Self::build(agent.into(), topic.into(), layer, evidence, vantage.into(), confidence, None)
    }

    /// Create an attestation carrying a falsifier.
    pub fn with_falsifier(
        agent: impl Into<AgentId>,
        topic: impl Into<String>,
        layer: Layer,
        evidence: Digest,
        vantage: impl Into<VantageId>,
        confidence: f64,
        falsifier: impl Into<String>,
    ) -> SpineResult<Self> {
        Self::build(
            agent.into(),
            topic.into(),
            layer,
            evidence,
            vantage.into(),
            confidence,
            Some(falsifier.into()),
        )
    }

    fn build(
        agent: AgentId,
        topic: String,
        layer: Layer,
        evidence: Digest,
        vantage: VantageId,
        confidence: f64,
        falsifier: Option<String>,
    ) -> SpineResult<Self> {
        if !(0.0..=1.0).contains(&confidence) {
            return Err(ConsensusError::ConfidenceOutOfRange(confidence).into());
        }
        if topic.trim().is_empty() {
            return Err(ConsensusError::EmptyTopic.into());
        }
        let id = tagged_digest(
            ATTESTATION_TAG,
            &[
                agent.as_str().as_bytes(),
                topic.as_bytes(),
                layer.as_str().as_bytes(),
                evidence.as_bytes(),
                vantage.as_str().as_bytes(),
            ],
        );
        Ok(Self {
            id,
            agent,
            topic,
            layer,
            evidence,
            vantage,
            confidence,
            falsifier,
        })
    }

    pub fn id(&self) -> Digest {
        self.id
    }

    pub fn agent(&self) -> &AgentId {
        &self.agent
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn layer(&self) -> Layer {
        self.layer
    }

    pub fn evidence(&self) -> Digest {
        self.evidence
    }

    pub fn vantage(&self) -> &VantageId {
        &self.vantage
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn falsifier(&self) -> Option<&str> {
        self.falsifier.as_deref()
    }

    pub fn is_observable(&self) -> bool {
        self.layer == Layer::Observable
    }
}
