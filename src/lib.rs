//! qfilter — type-safe dynamic query conditions.
//!
//! A search condition with optional fields is folded into a single
//! predicate, omitting every clause whose input is absent, and handed to a
//! query collaborator. The library lives in `qfilter-core`; this crate adds
//! the command-line front end.
//!
//! # Architecture
//!
//! ```text
//! CLI flags ──► MemberSearchCondition ──► Predicate ──► MemberQuery ──► output
//! ```

pub mod cli;

pub use qfilter_core::*;
