//! Error taxonomy for the spine engine.
//!
//! Integrity and malformed-input errors are fatal to the operation that
//! raised them. Sparse or undiverse evidence is never an error: it surfaces
//! as `Pending`/`Theatrical` outcomes instead.

mod config_error;
mod consensus_error;
mod integrity_error;
mod merge_error;
mod recovery_error;
mod spine_error;

pub use config_error::ConfigError;
pub use consensus_error::ConsensusError;
pub use integrity_error::IntegrityError;
pub use merge_error::MergeError;
pub use recovery_error::RecoveryError;
pub use spine_error::{SpineError, SpineResult};
