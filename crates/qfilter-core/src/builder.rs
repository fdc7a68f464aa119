//! Conditional predicate builder.
//!
//! Each `build_*` function turns one optional criterion into zero or more
//! atomic predicates; [`combine`] folds the results into a single
//! conjunction. An absent criterion yields `None`, which `combine` treats as
//! the conjunction identity, so call sites never special-case the first
//! clause.
//!
//! ```
//! use qfilter_core::builder::{build_equals, build_range, combine};
//! use qfilter_core::predicate::{member, team};
//!
//! let [goe, loe] = build_range(member::AGE, Some(35), None).unwrap();
//! let predicate = combine([
//!     build_equals(member::USERNAME, None),
//!     build_equals(team::NAME, Some("teamB".to_string())),
//!     goe,
//!     loe,
//! ]);
//! assert_eq!(predicate.to_string(), "team.name = 'teamB' AND member.age >= 35");
//! ```

use crate::error::ConditionError;
use crate::predicate::{Attr, CompareOp, Predicate, TypedAttr};
use std::fmt::Display;

/// `attr == value` when `value` is present.
pub fn build_equals<A: TypedAttr>(attr: A, value: Option<A::Value>) -> Option<Predicate> {
    value.map(|v| Predicate::compare(attr.attr(), CompareOp::Eq, v.into()))
}

/// `[attr >= lower, attr <= upper]`, each slot filled only when its bound is
/// present.
///
/// Fails with [`ConditionError::InvalidRange`] when both bounds are present
/// and `lower > upper`; such a range would otherwise silently match nothing.
pub fn build_range<A>(
    attr: A,
    lower: Option<A::Value>,
    upper: Option<A::Value>,
) -> Result<[Option<Predicate>; 2], ConditionError>
where
    A: TypedAttr,
    A::Value: PartialOrd + Display,
{
    if let (Some(lo), Some(hi)) = (&lower, &upper) {
        if lo > hi {
            return Err(ConditionError::InvalidRange {
                field: attr.attr().path(),
                lower: lo.to_string(),
                upper: hi.to_string(),
            });
        }
    }

    let key: Attr = attr.attr();
    Ok([
        lower.map(|v| Predicate::compare(key, CompareOp::Goe, v.into())),
        upper.map(|v| Predicate::compare(key, CompareOp::Loe, v.into())),
    ])
}

/// Fold optional predicates with AND, starting from `MatchAll`.
///
/// Absent entries are skipped; if none are present the result is
/// `Predicate::MatchAll`. Clause order follows iteration order.
pub fn combine<I>(predicates: I) -> Predicate
where
    I: IntoIterator<Item = Option<Predicate>>,
{
    predicates
        .into_iter()
        .flatten()
        .fold(Predicate::MatchAll, Predicate::and)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
