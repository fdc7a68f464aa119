//! Member search condition.
//!
//! [`MemberSearchCondition`] is a sparse set of optional criteria. Text
//! criteria that are empty or whitespace-only are normalised to absent when
//! the condition is constructed, whether through the `with_*` setters,
//! [`MemberSearchCondition::from_parts`] or deserialization.

use crate::builder::{build_equals, build_range, combine};
use crate::error::ConditionError;
use crate::predicate::{member, team, Predicate};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ConditionInput")]
pub struct MemberSearchCondition {
    username: Option<String>,
    team_name: Option<String>,
    age_goe: Option<i64>,
    age_loe: Option<i64>,
}

/// Wire shape accepted by `Deserialize`; normalised into the real condition.
#[derive(Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConditionInput {
    username: Option<String>,
    team_name: Option<String>,
    age_goe: Option<i64>,
    age_loe: Option<i64>,
}

impl From<ConditionInput> for MemberSearchCondition {
    fn from(input: ConditionInput) -> Self {
        Self::from_parts(input.username, input.team_name, input.age_goe, input.age_loe)
    }
}

fn non_blank(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.trim().is_empty())
}

impl MemberSearchCondition {
    /// An empty condition; translates to `MatchAll`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(
        username: Option<String>,
        team_name: Option<String>,
        age_goe: Option<i64>,
        age_loe: Option<i64>,
    ) -> Self {
        Self {
            username: non_blank(username),
            team_name: non_blank(team_name),
            age_goe,
            age_loe,
        }
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = non_blank(Some(username.into()));
        self
    }

    pub fn with_team_name(mut self, team_name: impl Into<String>) -> Self {
        self.team_name = non_blank(Some(team_name.into()));
        self
    }

    /// Inclusive lower bound on age.
    pub fn with_age_goe(mut self, age: i64) -> Self {
        self.age_goe = Some(age);
        self
    }

    /// Inclusive upper bound on age.
    pub fn with_age_loe(mut self, age: i64) -> Self {
        self.age_loe = Some(age);
        self
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn team_name(&self) -> Option<&str> {
        self.team_name.as_deref()
    }

    pub fn age_goe(&self) -> Option<i64> {
        self.age_goe
    }

    pub fn age_loe(&self) -> Option<i64> {
        self.age_loe
    }

    /// True when no criterion is present.
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.team_name.is_none()
            && self.age_goe.is_none()
            && self.age_loe.is_none()
    }

    /// Check the condition without building anything.
    pub fn validate(&self) -> Result<(), ConditionError> {
        build_range(member::AGE, self.age_goe, self.age_loe).map(|_| ())
    }

    /// Translate into a predicate, one clause per present criterion in
    /// declaration order: username, team name, age lower bound, age upper
    /// bound.
    pub fn to_predicate(&self) -> Result<Predicate, ConditionError> {
        let [age_goe, age_loe] = build_range(member::AGE, self.age_goe, self.age_loe)?;

        let predicate = combine([
            build_equals(member::USERNAME, self.username.clone()),
            build_equals(team::NAME, self.team_name.clone()),
            age_goe,
            age_loe,
        ]);
        debug!(%predicate, clauses = predicate.terms().len(), "translated search condition");
        Ok(predicate)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
