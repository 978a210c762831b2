//! Writer and agent identities.
//!
//! # Examples
//!
//! ```
//! use spine_core::models::{AgentId, VantageId};
//!
//! let v = VantageId::generate();
//! assert!(!v.0.is_empty());
//! assert_eq!(AgentId::from("auditor").to_string(), "auditor");
//! ```

use serde::{Deserialize, Serialize};

/// Identity of an independent observation context (a ledger writer/replica).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VantageId(pub String);

impl VantageId {
    /// A fresh vantage with a random UUID v4.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VantageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for VantageId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for VantageId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Identity of an attesting agent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AgentId(pub String);

impl AgentId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for AgentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for AgentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
