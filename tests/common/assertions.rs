//! Domain-specific assertion macros for qfilter harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that show the
//! predicate involved.

// ---------------------------------------------------------------------------
// Result assertions
// ---------------------------------------------------------------------------

/// Assert that a result set contains exactly these usernames, in order.
///
/// ```rust
/// assert_usernames!(rows, ["member3", "member4"]);
/// ```
#[macro_export]
macro_rules! assert_usernames {
    ($rows:expr, [$($name:expr),* $(,)?]) => {{
        let rows: &[qfilter_core::MemberTeamRow] = &$rows;
        let actual: Vec<&str> = rows.iter().map(|r| r.username.as_str()).collect();
        let expected: Vec<&str> = vec![$($name),*];
        pretty_assertions::assert_eq!(actual, expected, "usernames of result rows");
    }};
}

/// Assert that every row in a result set satisfies `predicate`.
#[macro_export]
macro_rules! assert_rows_match {
    ($rows:expr, $predicate:expr) => {{
        let rows: &[qfilter_core::MemberTeamRow] = &$rows;
        let predicate: &qfilter_core::Predicate = &$predicate;
        let failing: Vec<_> = rows.iter().filter(|r| !predicate.matches(*r)).collect();
        if !failing.is_empty() {
            panic!(
                "assert_rows_match! failed: {} of {} rows do not satisfy `{}`:\n  {:?}",
                failing.len(),
                rows.len(),
                predicate,
                failing
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Predicate assertions
// ---------------------------------------------------------------------------

/// Assert the rendered form of a predicate.
///
/// ```rust
/// assert_renders!(predicate, "member.age >= 35 AND member.age <= 40");
/// ```
#[macro_export]
macro_rules! assert_renders {
    ($predicate:expr, $expected:expr) => {{
        let predicate: &qfilter_core::Predicate = &$predicate;
        pretty_assertions::assert_eq!(predicate.to_string(), $expected);
    }};
}
