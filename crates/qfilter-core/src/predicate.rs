//! Predicate model — composable boolean filters over entity attributes.
//!
//! A [`Predicate`] is either the conjunction identity ([`Predicate::MatchAll`]),
//! a single [`Comparison`], or a flat [`Conjunction`] of two or more
//! comparisons. Conjunctions can only be built through [`Predicate::and`], so
//! they never nest and never contain `MatchAll`.
//!
//! Attributes are reached through typed handles ([`member::USERNAME`],
//! [`member::AGE`], [`team::NAME`]); a text attribute cannot be compared with
//! an integer and vice versa.

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::ops::BitAnd;

// ---------------------------------------------------------------------------
// Attributes and values
// ---------------------------------------------------------------------------

/// Every attribute a predicate can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Attr {
    #[serde(rename = "member.username")]
    MemberUsername,
    #[serde(rename = "member.age")]
    MemberAge,
    #[serde(rename = "team.name")]
    TeamName,
}

impl Attr {
    /// Dotted `entity.attribute` path used when rendering predicates.
    pub const fn path(self) -> &'static str {
        match self {
            Attr::MemberUsername => "member.username",
            Attr::MemberAge => "member.age",
            Attr::TeamName => "team.name",
        }
    }
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// A scalar attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    Int(i64),
}

impl PartialOrd for Value {
    /// Values of different kinds are unordered.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => write!(f, "'{}'", s.replace('\'', "''")),
            Value::Int(n) => write!(f, "{n}"),
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

// ---------------------------------------------------------------------------
// Typed attribute handles
// ---------------------------------------------------------------------------

/// An attribute handle that fixes the Rust type its values must have.
pub trait TypedAttr: Copy {
    type Value: Into<Value>;

    fn attr(self) -> Attr;
}

/// Handle for a text-valued attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextAttr(Attr);

/// Handle for an integer-valued attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntAttr(Attr);

impl TypedAttr for TextAttr {
    type Value = String;

    fn attr(self) -> Attr {
        self.0
    }
}

impl TypedAttr for IntAttr {
    type Value = i64;

    fn attr(self) -> Attr {
        self.0
    }
}

impl TextAttr {
    pub fn equals(self, value: impl Into<String>) -> Predicate {
        Predicate::compare(self.0, CompareOp::Eq, Value::Text(value.into()))
    }
}

impl IntAttr {
    pub fn equals(self, value: i64) -> Predicate {
        Predicate::compare(self.0, CompareOp::Eq, Value::Int(value))
    }

    /// `attr >= value`
    pub fn goe(self, value: i64) -> Predicate {
        Predicate::compare(self.0, CompareOp::Goe, Value::Int(value))
    }

    /// `attr <= value`
    pub fn loe(self, value: i64) -> Predicate {
        Predicate::compare(self.0, CompareOp::Loe, Value::Int(value))
    }

    pub fn gt(self, value: i64) -> Predicate {
        Predicate::compare(self.0, CompareOp::Gt, Value::Int(value))
    }

    pub fn lt(self, value: i64) -> Predicate {
        Predicate::compare(self.0, CompareOp::Lt, Value::Int(value))
    }
}

/// Attributes of the member entity.
pub mod member {
    use super::{Attr, IntAttr, TextAttr};

    pub const USERNAME: TextAttr = TextAttr(Attr::MemberUsername);
    pub const AGE: IntAttr = IntAttr(Attr::MemberAge);
}

/// Attributes of the team a member belongs to.
pub mod team {
    use super::{Attr, TextAttr};

    pub const NAME: TextAttr = TextAttr(Attr::TeamName);
}

// ---------------------------------------------------------------------------
// Comparisons
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompareOp {
    Eq,
    Goe,
    Loe,
    Gt,
    Lt,
}

impl CompareOp {
    pub const fn symbol(self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::Goe => ">=",
            CompareOp::Loe => "<=",
            CompareOp::Gt => ">",
            CompareOp::Lt => "<",
        }
    }

    /// Apply the operator to `lhs op rhs`. Unordered operands never match.
    pub fn test(self, lhs: &Value, rhs: &Value) -> bool {
        let Some(ord) = lhs.partial_cmp(rhs) else {
            return false;
        };
        match self {
            CompareOp::Eq => ord == Ordering::Equal,
            CompareOp::Goe => ord != Ordering::Less,
            CompareOp::Loe => ord != Ordering::Greater,
            CompareOp::Gt => ord == Ordering::Greater,
            CompareOp::Lt => ord == Ordering::Less,
        }
    }
}

/// A single `attr op value` clause.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Comparison {
    pub attr: Attr,
    pub op: CompareOp,
    pub value: Value,
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.attr, self.op.symbol(), self.value)
    }
}

/// Two or more comparisons joined with AND, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Conjunction(Vec<Comparison>);

impl Conjunction {
    pub fn terms(&self) -> &[Comparison] {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// Predicate
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Predicate {
    /// Conjunction identity; matches every record.
    #[default]
    MatchAll,
    Compare(Comparison),
    And(Conjunction),
}

impl Predicate {
    pub fn compare(attr: Attr, op: CompareOp, value: Value) -> Self {
        Predicate::Compare(Comparison { attr, op, value })
    }

    pub fn is_match_all(&self) -> bool {
        matches!(self, Predicate::MatchAll)
    }

    /// The atomic clauses of this predicate, in order. Empty for `MatchAll`.
    pub fn terms(&self) -> &[Comparison] {
        match self {
            Predicate::MatchAll => &[],
            Predicate::Compare(c) => std::slice::from_ref(c),
            Predicate::And(conj) => conj.terms(),
        }
    }

    /// Logical AND. `MatchAll` on either side returns the other operand
    /// unchanged; otherwise the clauses of both sides are concatenated into
    /// one flat conjunction.
    pub fn and(self, other: Predicate) -> Predicate {
        match (self, other) {
            (Predicate::MatchAll, p) | (p, Predicate::MatchAll) => p,
            (lhs, rhs) => {
                let mut terms = lhs.into_terms();
                terms.extend(rhs.into_terms());
                Predicate::And(Conjunction(terms))
            }
        }
    }

    fn into_terms(self) -> Vec<Comparison> {
        match self {
            Predicate::MatchAll => Vec::new(),
            Predicate::Compare(c) => vec![c],
            Predicate::And(Conjunction(terms)) => terms,
        }
    }

    /// Evaluate against a record. A comparison whose attribute the record
    /// does not have (e.g. `team.name` for a member without a team) is false.
    pub fn matches<R: Record + ?Sized>(&self, record: &R) -> bool {
        self.terms().iter().all(|c| {
            record
                .value(c.attr)
                .is_some_and(|actual| c.op.test(&actual, &c.value))
        })
    }
}

impl BitAnd for Predicate {
    type Output = Predicate;

    fn bitand(self, rhs: Predicate) -> Predicate {
        self.and(rhs)
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::MatchAll => f.write_str("TRUE"),
            Predicate::Compare(c) => write!(f, "{c}"),
            Predicate::And(conj) => {
                for (i, c) in conj.terms().iter().enumerate() {
                    if i > 0 {
                        f.write_str(" AND ")?;
                    }
                    write!(f, "{c}")?;
                }
                Ok(())
            }
        }
    }
}

/// Anything a predicate can be evaluated against.
pub trait Record {
    /// The record's value for `attr`, or `None` if it has none.
    fn value(&self, attr: Attr) -> Option<Value>;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
