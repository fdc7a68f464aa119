//! Test builders — ergonomic constructors for stores and rows.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use qfilter_core::{InMemoryStore, MemberTeamRow};

// ---------------------------------------------------------------------------
// StoreBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`InMemoryStore`] fixtures. Members reference teams by
/// name; naming a team that was not added panics.
///
/// ```rust
/// let store = StoreBuilder::new()
///     .team("teamA")
///     .member("member1", 10, Some("teamA"))
///     .member("loner", 50, None)
///     .build();
/// ```
#[derive(Default)]
pub struct StoreBuilder {
    store: InMemoryStore,
}

impl StoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn team(mut self, name: &str) -> Self {
        self.store.add_team(name);
        self
    }

    pub fn member(mut self, username: &str, age: i64, team: Option<&str>) -> Self {
        let team_id = team.map(|name| {
            self.store
                .find_team_by_name(name)
                .unwrap_or_else(|| panic!("team {name:?} not added to StoreBuilder"))
                .id
        });
        self.store
            .add_member(username, age, team_id)
            .expect("team id resolved above");
        self
    }

    pub fn build(self) -> InMemoryStore {
        self.store
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// A detached row, for evaluating predicates without a store.
pub fn row(username: &str, age: i64, team: Option<&str>) -> MemberTeamRow {
    MemberTeamRow {
        member_id: 1,
        username: username.to_string(),
        age,
        team_id: team.map(|_| 1),
        team_name: team.map(str::to_string),
    }
}

/// `n` members aged `0..n`, spread round-robin over `teams` teams.
pub fn build_store(n: usize, teams: usize) -> InMemoryStore {
    let mut store = InMemoryStore::new();
    let ids: Vec<u64> = (0..teams).map(|t| store.add_team(format!("team{t}"))).collect();
    for i in 0..n {
        let team = if ids.is_empty() { None } else { Some(ids[i % ids.len()]) };
        store
            .add_member(format!("member{i}"), i as i64, team)
            .expect("team ids come from this store");
    }
    store
}
