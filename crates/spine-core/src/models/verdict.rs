//! Consensus verdicts.

use serde::{Deserialize, Serialize};

use super::status::TruthStatus;

/// Outcome of one consensus round.
///
/// `Pending` and `Theatrical` are first-class results of sparse or undiverse
/// evidence, not failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Pending,
    Verified,
    Canonical,
    Theatrical,
}

impl Verdict {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Verified => "verified",
            Self::Canonical => "canonical",
            Self::Theatrical => "theatrical",
        }
    }
}

impl From<Verdict> for TruthStatus {
    fn from(v: Verdict) -> Self {
        match v {
            Verdict::Pending => TruthStatus::Pending,
            Verdict::Verified => TruthStatus::Verified,
            Verdict::Canonical => TruthStatus::Canonical,
            Verdict::Theatrical => TruthStatus::Theatrical,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
