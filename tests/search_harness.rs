#![allow(unused)]
//! Search integration harness — predicates executed by the query collaborator.
//!
//! # What this covers
//!
//! - **Match all**: an empty condition returns every record.
//! - **Team + age range**: the sample store filtered by `teamB` and ages
//!   35..=40 returns only `member4`.
//! - **Left join**: members without a team appear for conditions that do not
//!   name a team, and never for conditions that do.
//! - **Paging and ordering**: offset/limit slice after filtering, and the
//!   reported total counts every match.
//! - **Property: results ⊆ store** and every returned row satisfies the
//!   predicate; no matching row is left out.
//!
//! # Running
//!
//! ```sh
//! cargo test --test search_harness
//! ```

mod common;
use common::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use qfilter_core::{
    member, team, InMemoryStore, MemberQuery, MemberSearchCondition, OrderBy, PageRequest,
    Predicate,
};
use rstest::rstest;

fn search(store: &InMemoryStore, cond: MemberSearchCondition) -> Vec<qfilter_core::MemberTeamRow> {
    store.search(&cond.to_predicate().unwrap())
}

// ---------------------------------------------------------------------------
// Sample dataset
// ---------------------------------------------------------------------------

#[test]
fn empty_condition_returns_all_four() {
    let rows = search(&InMemoryStore::sample(), MemberSearchCondition::new());
    assert_eq!(rows.len(), 4);
}

#[test]
fn team_and_age_range() {
    let cond = MemberSearchCondition::new()
        .with_age_goe(35)
        .with_age_loe(40)
        .with_team_name("teamB");
    assert_usernames!(search(&InMemoryStore::sample(), cond), ["member4"]);
}

#[rstest]
#[case::username(MemberSearchCondition::new().with_username("member1"), &["member1"])]
#[case::team(MemberSearchCondition::new().with_team_name("teamA"), &["member1", "member2"])]
#[case::lower_bound(MemberSearchCondition::new().with_age_goe(30), &["member3", "member4"])]
#[case::upper_bound(MemberSearchCondition::new().with_age_loe(20), &["member1", "member2"])]
#[case::no_match(MemberSearchCondition::new().with_username("member1").with_team_name("teamB"), &[])]
#[case::blank_is_ignored(MemberSearchCondition::new().with_username("  "), &["member1", "member2", "member3", "member4"])]
fn sample_searches(#[case] cond: MemberSearchCondition, #[case] expected: &[&str]) {
    let rows = search(&InMemoryStore::sample(), cond);
    let actual: Vec<&str> = rows.iter().map(|r| r.username.as_str()).collect();
    assert_eq!(actual, expected);
}

#[test]
fn json_sample_matches_builtin_sample() {
    let loaded = InMemoryStore::from_json(DATASET_SAMPLE).unwrap();
    assert_eq!(
        loaded.search(&Predicate::MatchAll),
        InMemoryStore::sample().search(&Predicate::MatchAll)
    );
}

// ---------------------------------------------------------------------------
// Left join
// ---------------------------------------------------------------------------

#[test]
fn teamless_member_only_matches_teamless_conditions() {
    let store = InMemoryStore::from_json(DATASET_WITH_LONER).unwrap();

    let by_age = search(&store, MemberSearchCondition::new().with_age_goe(35));
    assert_usernames!(by_age, ["member4", "loner"]);

    let by_team = search(
        &store,
        MemberSearchCondition::new().with_age_goe(35).with_team_name("teamB"),
    );
    assert_usernames!(by_team, ["member4"]);
}

// ---------------------------------------------------------------------------
// Paging and ordering
// ---------------------------------------------------------------------------

#[test]
fn paging_username_desc_offset_one_limit_two() {
    let page = InMemoryStore::sample().search_page(
        &Predicate::MatchAll,
        PageRequest::new(1, 2).ordered(OrderBy::UsernameDesc),
    );
    assert_eq!(page.total, 4);
    assert_usernames!(page.rows, ["member3", "member2"]);
}

#[test]
fn sort_age_desc_username_asc() {
    let store = StoreBuilder::new()
        .team("teamA")
        .member("member5", 100, None)
        .member("member6", 100, None)
        .member("member1", 10, Some("teamA"))
        .build();
    let page = store.search_page(
        &Predicate::MatchAll,
        PageRequest::new(0, 10).ordered(OrderBy::AgeDescUsernameAsc),
    );
    assert_usernames!(page.rows, ["member5", "member6", "member1"]);
}

#[test]
fn paging_total_counts_filtered_rows_only() {
    let store = build_store(50, 3);
    let predicate = member::AGE.goe(10) & member::AGE.loe(29);
    let page = store.search_page(&predicate, PageRequest::new(5, 10));
    assert_eq!(page.total, 20);
    assert_eq!(page.rows.len(), 10);
    assert_eq!(page.rows[0].age, 15);
    assert_rows_match!(page.rows, predicate);
}

// ---------------------------------------------------------------------------
// Property tests
// ---------------------------------------------------------------------------

proptest! {
    /// Search returns exactly the rows of the full scan that satisfy the
    /// predicate, in the same order.
    #[test]
    fn prop_search_is_filtered_full_scan(
        n in 0usize..60,
        teams in 0usize..4,
        goe in proptest::option::of(0i64..60),
        width in proptest::option::of(0i64..30),
        team_pick in proptest::option::of(0usize..4),
    ) {
        let store = build_store(n, teams);
        let loe = match (goe, width) {
            (Some(g), Some(w)) => Some(g + w),
            (None, w) => w,
            (Some(_), None) => None,
        };
        let mut cond = MemberSearchCondition::from_parts(None, None, goe, loe);
        if let Some(t) = team_pick {
            cond = cond.with_team_name(format!("team{t}"));
        }
        let predicate = cond.to_predicate().unwrap();

        let all = store.search(&Predicate::MatchAll);
        prop_assert_eq!(all.len(), n);
        let expected: Vec<_> = all.into_iter().filter(|r| predicate.matches(r)).collect();
        prop_assert_eq!(store.search(&predicate), expected);
    }
}
