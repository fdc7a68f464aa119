//! Store — the query-execution side of a search.
//!
//! [`MemberQuery`] is the contract a data store fulfils: accept a
//! [`Predicate`] and return matching rows in a stable order. The predicate
//! builder never talks to a store directly.
//!
//! [`InMemoryStore`] is the reference implementation. It keeps teams and
//! members in insertion order and evaluates predicates row by row against
//! the member/team left join.

use crate::error::StoreError;
use crate::predicate::Predicate;
use crate::types::{Member, MemberTeamRow, Team};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, trace};

// ---------------------------------------------------------------------------
// Query contract
// ---------------------------------------------------------------------------

/// Result ordering for paged searches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderBy {
    #[default]
    MemberIdAsc,
    UsernameDesc,
    /// Age descending, ties broken by username ascending.
    AgeDescUsernameAsc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub offset: usize,
    pub limit: usize,
    #[serde(default)]
    pub order: OrderBy,
}

impl PageRequest {
    pub fn new(offset: usize, limit: usize) -> Self {
        Self {
            offset,
            limit,
            order: OrderBy::default(),
        }
    }

    pub fn ordered(mut self, order: OrderBy) -> Self {
        self.order = order;
        self
    }
}

/// One page of results plus the number of rows matching before paging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub rows: Vec<T>,
    pub total: usize,
    pub offset: usize,
    pub limit: usize,
}

pub trait MemberQuery {
    /// All rows matching `predicate`, ordered by member id.
    fn search(&self, predicate: &Predicate) -> Vec<MemberTeamRow>;

    /// Rows matching `predicate`, sorted by `page.order`, then sliced.
    fn search_page(&self, predicate: &Predicate, page: PageRequest) -> Page<MemberTeamRow> {
        let mut rows = self.search(predicate);
        sort_rows(&mut rows, page.order);
        let total = rows.len();
        let rows = rows.into_iter().skip(page.offset).take(page.limit).collect();
        Page {
            rows,
            total,
            offset: page.offset,
            limit: page.limit,
        }
    }
}

fn sort_rows(rows: &mut [MemberTeamRow], order: OrderBy) {
    match order {
        OrderBy::MemberIdAsc => rows.sort_by_key(|r| r.member_id),
        OrderBy::UsernameDesc => rows.sort_by(|a, b| b.username.cmp(&a.username)),
        OrderBy::AgeDescUsernameAsc => {
            rows.sort_by(|a, b| b.age.cmp(&a.age).then_with(|| a.username.cmp(&b.username)))
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset documents
// ---------------------------------------------------------------------------

/// JSON dataset: team names plus members referencing teams by name.
#[derive(Debug, Clone, Deserialize)]
struct Dataset {
    #[serde(default)]
    teams: Vec<String>,
    #[serde(default)]
    members: Vec<DatasetMember>,
}

#[derive(Debug, Clone, Deserialize)]
struct DatasetMember {
    username: String,
    age: i64,
    #[serde(default)]
    team: Option<String>,
}

// ---------------------------------------------------------------------------
// InMemoryStore
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    teams: Vec<Team>,
    members: Vec<Member>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// teamA/teamB with four members aged 10 through 40.
    pub fn sample() -> Self {
        let mut store = Self::new();
        let team_a = store.add_team("teamA");
        let team_b = store.add_team("teamB");
        for (username, age, team) in [
            ("member1", 10, team_a),
            ("member2", 20, team_a),
            ("member3", 30, team_b),
            ("member4", 40, team_b),
        ] {
            let id = store.members.len() as u64 + 1;
            store.members.push(Member {
                id,
                username: username.to_string(),
                age,
                team_id: Some(team),
            });
        }
        store
    }

    pub fn from_json(document: &str) -> Result<Self, StoreError> {
        let dataset: Dataset = serde_json::from_str(document)?;
        let mut store = Self::new();
        for name in &dataset.teams {
            store.add_team(name.clone());
        }
        for m in dataset.members {
            let team_id = match &m.team {
                Some(name) => Some(store.find_team_by_name(name).map(|t| t.id).ok_or_else(
                    || StoreError::UnknownTeam {
                        member: m.username.clone(),
                        team: name.clone(),
                    },
                )?),
                None => None,
            };
            store.add_member(m.username, m.age, team_id)?;
        }
        debug!(
            teams = store.teams.len(),
            members = store.members.len(),
            "loaded dataset"
        );
        Ok(store)
    }

    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let document = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&document)
    }

    /// Insert a team and return its id. Ids start at 1.
    pub fn add_team(&mut self, name: impl Into<String>) -> u64 {
        let id = self.teams.len() as u64 + 1;
        self.teams.push(Team {
            id,
            name: name.into(),
        });
        id
    }

    /// Insert a member and return its id. `team` must be an existing team id.
    pub fn add_member(
        &mut self,
        username: impl Into<String>,
        age: i64,
        team: Option<u64>,
    ) -> Result<u64, StoreError> {
        if let Some(team_id) = team {
            if self.team(team_id).is_none() {
                return Err(StoreError::UnknownTeamId(team_id));
            }
        }
        let id = self.members.len() as u64 + 1;
        self.members.push(Member {
            id,
            username: username.into(),
            age,
            team_id: team,
        });
        Ok(id)
    }

    pub fn team(&self, id: u64) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn find_team_by_name(&self, name: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.name == name)
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    fn rows(&self) -> impl Iterator<Item = MemberTeamRow> + '_ {
        self.members.iter().map(move |m| {
            let team = m.team_id.and_then(|id| self.team(id));
            MemberTeamRow::join(m, team)
        })
    }
}

impl MemberQuery for InMemoryStore {
    fn search(&self, predicate: &Predicate) -> Vec<MemberTeamRow> {
        let rows: Vec<_> = self
            .rows()
            .filter(|row| {
                let hit = predicate.matches(row);
                trace!(member_id = row.member_id, hit, "evaluated row");
                hit
            })
            .collect();
        debug!(%predicate, matched = rows.len(), scanned = self.len(), "search");
        rows
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
