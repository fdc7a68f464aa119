//! Core types for qfilter-core.
//!
//! The entities filtered by predicates: [`Member`], the [`Team`] it may
//! belong to, and the joined [`MemberTeamRow`] projection returned by
//! searches.

use crate::predicate::{Attr, Record, Value};
use serde::{Deserialize, Serialize};

/// A team. Members reference it by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: u64,
    pub name: String,
}

/// A member, optionally assigned to a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: u64,
    pub username: String,
    pub age: i64,
    /// `None` for members without a team.
    pub team_id: Option<u64>,
}

/// A member left-joined with its team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberTeamRow {
    pub member_id: u64,
    pub username: String,
    pub age: i64,
    pub team_id: Option<u64>,
    pub team_name: Option<String>,
}

impl MemberTeamRow {
    pub fn join(member: &Member, team: Option<&Team>) -> Self {
        Self {
            member_id: member.id,
            username: member.username.clone(),
            age: member.age,
            team_id: team.map(|t| t.id),
            team_name: team.map(|t| t.name.clone()),
        }
    }
}

impl Record for MemberTeamRow {
    fn value(&self, attr: Attr) -> Option<Value> {
        match attr {
            Attr::MemberUsername => Some(Value::Text(self.username.clone())),
            Attr::MemberAge => Some(Value::Int(self.age)),
            Attr::TeamName => self.team_name.clone().map(Value::Text),
        }
    }
}
