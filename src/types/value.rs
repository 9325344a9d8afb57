use std::collections::BTreeSet;
use std::fmt;

use super::item::CondOperator;

/// Discriminant of a [`PropValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueType {
    #[default]
    Unknown,
    Bool,
    String,
    Array,
    Number,
}

/// A typed property value read from a node or parsed from a rule's `value` field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PropValue {
    /// No value. Never matches anything.
    #[default]
    Unknown,
    Bool(bool),
    String(String),
    /// A set of strings, e.g. a node's action names.
    Array(BTreeSet<String>),
    /// A 32-bit signed integer.
    Number(i32),
}

impl PropValue {
    #[must_use]
    pub fn value_type(&self) -> ValueType {
        match self {
            PropValue::Unknown => ValueType::Unknown,
            PropValue::Bool(_) => ValueType::Bool,
            PropValue::String(_) => ValueType::String,
            PropValue::Array(_) => ValueType::Array,
            PropValue::Number(_) => ValueType::Number,
        }
    }

    /// Compare this value (the subject) to `other` using the given operator.
    ///
    /// Only these combinations can match:
    ///
    /// | subject | operator               | other  |
    /// |---------|------------------------|--------|
    /// | String  | `eq`, `ne`             | String |
    /// | String  | `is_oneof`, `not_oneof`| Array  |
    /// | Array   | `has_any`              | Array  |
    /// | Number  | `eq`, `ne`             | Number |
    /// | Bool    | `eq`, `ne`             | Bool   |
    ///
    /// Every other pairing returns `false`.
    #[must_use]
    pub fn compare(&self, op: CondOperator, other: &PropValue) -> bool {
        match (self, op, other) {
            (PropValue::String(a), CondOperator::Eq, PropValue::String(b)) => a == b,
            (PropValue::String(a), CondOperator::Ne, PropValue::String(b)) => a != b,
            (PropValue::String(a), CondOperator::IsOneOf, PropValue::Array(set)) => {
                set.contains(a)
            }
            (PropValue::String(a), CondOperator::NotOneOf, PropValue::Array(set)) => {
                !set.contains(a)
            }
            (PropValue::Array(a), CondOperator::HasAny, PropValue::Array(b)) => {
                b.iter().any(|item| a.contains(item))
            }
            (PropValue::Number(a), CondOperator::Eq, PropValue::Number(b)) => a == b,
            (PropValue::Number(a), CondOperator::Ne, PropValue::Number(b)) => a != b,
            (PropValue::Bool(a), CondOperator::Eq, PropValue::Bool(b)) => a == b,
            (PropValue::Bool(a), CondOperator::Ne, PropValue::Bool(b)) => a != b,
            _ => false,
        }
    }

    /// Returns the inner string for `String` values.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the inner flag for `Bool` values.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<bool> for PropValue {
    fn from(v: bool) -> Self {
        PropValue::Bool(v)
    }
}

impl From<i32> for PropValue {
    fn from(v: i32) -> Self {
        PropValue::Number(v)
    }
}

impl From<&str> for PropValue {
    fn from(v: &str) -> Self {
        PropValue::String(v.to_owned())
    }
}

impl From<String> for PropValue {
    fn from(v: String) -> Self {
        PropValue::String(v)
    }
}

impl From<BTreeSet<String>> for PropValue {
    fn from(v: BTreeSet<String>) -> Self {
        PropValue::Array(v)
    }
}

impl<const N: usize> From<[&str; N]> for PropValue {
    fn from(v: [&str; N]) -> Self {
        PropValue::Array(v.into_iter().map(str::to_owned).collect())
    }
}

impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValue::Unknown => write!(f, "<unknown>"),
            PropValue::Bool(v) => write!(f, "{v}"),
            PropValue::String(v) => write!(f, "\"{v}\""),
            PropValue::Number(v) => write!(f, "{v}"),
            PropValue::Array(items) => {
                let joined: Vec<&str> = items.iter().map(String::as_str).collect();
                write!(f, "[{}]", joined.join(", "))
            }
        }
    }
}
