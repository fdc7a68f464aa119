//! qfilter-core — type-safe dynamic query conditions.
//!
//! This crate exposes the predicate model, the conditional builder that turns
//! sparse search criteria into a predicate, and the query collaborator that
//! executes it.
//!
//! # Architecture
//!
//! ```text
//! MemberSearchCondition ──► builder ──► Predicate ──► MemberQuery ──► rows
//! ```
//!
//! Everything up to the predicate is pure and synchronous; only the store
//! sees data.

pub mod builder;
pub mod condition;
pub mod config;
pub mod error;
pub mod predicate;
pub mod store;
pub mod types;

pub use condition::MemberSearchCondition;
pub use error::{ConditionError, StoreError};
pub use predicate::{member, team, Attr, CompareOp, Comparison, Predicate, Record, Value};
pub use store::{InMemoryStore, MemberQuery, OrderBy, Page, PageRequest};
pub use types::{Member, MemberTeamRow, Team};
