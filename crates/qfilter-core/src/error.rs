//! Error types for qfilter-core.
//!
//! Building a predicate does no I/O, so the only builder failure is a
//! malformed condition. Dataset loading has its own [`StoreError`].

use std::path::PathBuf;

/// A search condition that cannot be translated into a predicate.
///
/// Raised before any clause is synthesized; the caller can correct the
/// condition and retry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConditionError {
    #[error("invalid range for {field}: lower bound {lower} is greater than upper bound {upper}")]
    InvalidRange {
        field: &'static str,
        lower: String,
        upper: String,
    },
}

/// Failures while assembling an [`InMemoryStore`](crate::store::InMemoryStore).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read dataset {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed dataset document")]
    Parse(#[from] serde_json::Error),
    #[error("member {member:?} references unknown team {team:?}")]
    UnknownTeam { member: String, team: String },
    #[error("no team with id {0}")]
    UnknownTeamId(u64),
}
