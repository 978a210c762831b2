//! Classification state machine: the closed truth-status alphabet.
//!
//! Any status may follow any other; the machine only fixes the alphabet and
//! the index order used by transition matrices. It never rejects a
//! transition.
//!
//! # Examples
//!
//! ```
//! use spine_core::models::TruthStatus;
//!
//! assert_eq!(TruthStatus::ALL.len(), 5);
//! assert!(TruthStatus::Hyper.outranks(TruthStatus::Canonical));
//! assert_eq!(TruthStatus::from_index(TruthStatus::Verified.index()), Some(TruthStatus::Verified));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::STATUS_COUNT;

/// Truth status (truth plane) of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TruthStatus {
    Pending,
    Verified,
    Canonical,
    Theatrical,
    /// Rare terminal-influential status. Its self-transition uses a weaker prior.
    Hyper,
}

impl TruthStatus {
    /// Every status in matrix index order.
    pub const ALL: [TruthStatus; STATUS_COUNT] = [
        TruthStatus::Pending,
        TruthStatus::Verified,
        TruthStatus::Canonical,
        TruthStatus::Theatrical,
        TruthStatus::Hyper,
    ];

    /// Row/column index in a transition matrix.
    pub const fn index(self) -> usize {
        match self {
            Self::Pending => 0,
            Self::Verified => 1,
            Self::Canonical => 2,
            Self::Theatrical => 3,
            Self::Hyper => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Merge precedence: `Hyper > Canonical > Verified > Pending > Theatrical`.
    pub const fn rank(self) -> u8 {
        match self {
            Self::Theatrical => 0,
            Self::Pending => 1,
            Self::Verified => 2,
            Self::Canonical => 3,
            Self::Hyper => 4,
        }
    }

    /// True if `self` wins a merge conflict against `other`.
    pub fn outranks(self, other: TruthStatus) -> bool {
        self.rank() > other.rank()
    }

    pub const fn is_terminal_influential(self) -> bool {
        matches!(self, Self::Hyper)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Verified => "verified",
            Self::Canonical => "canonical",
            Self::Theatrical => "theatrical",
            Self::Hyper => "hyper",
        }
    }

    /// All (source, destination) pairs in row-major order.
    pub fn pairs() -> impl Iterator<Item = StatusPair> {
        Self::ALL
            .into_iter()
            .flat_map(|from| Self::ALL.into_iter().map(move |to| StatusPair { from, to }))
    }
}

impl fmt::Display for TruthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TruthStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown truth status: {s}"))
    }
}

/// An ordered (source, destination) status pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StatusPair {
    pub from: TruthStatus,
    pub to: TruthStatus,
}

impl StatusPair {
    pub const fn new(from: TruthStatus, to: TruthStatus) -> Self {
        Self { from, to }
    }

    /// Flat index into a row-major `STATUS_COUNT × STATUS_COUNT` table.
    pub const fn flat_index(self) -> usize {
        self.from.index() * STATUS_COUNT + self.to.index()
    }

    pub const fn is_hyper_self(self) -> bool {
        matches!((self.from, self.to), (TruthStatus::Hyper, TruthStatus::Hyper))
    }
}

impl fmt::Display for StatusPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_roundtrip_covers_alphabet() {
        for status in TruthStatus::ALL {
            assert_eq!(TruthStatus::from_index(status.index()), Some(status));
        }
        assert_eq!(TruthStatus::from_index(STATUS_COUNT), None);
    }

    #[test]
    fn merge_precedence_is_total() {
        use TruthStatus::*;
        let order = [Theatrical, Pending, Verified, Canonical, Hyper];
        for w in order.windows(2) {
            assert!(w[1].outranks(w[0]), "{} should outrank {}", w[1], w[0]);
        }
    }

    #[test]
    fn pairs_are_row_major() {
        let pairs: Vec<_> = TruthStatus::pairs().collect();
        assert_eq!(pairs.len(), 25);
        for (i, pair) in pairs.iter().enumerate() {
            assert_eq!(pair.flat_index(), i);
        }
        assert!(pairs[24].is_hyper_self());
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Canonical".parse::<TruthStatus>(), Ok(TruthStatus::Canonical));
        assert!("bogus".parse::<TruthStatus>().is_err());
    }
}
