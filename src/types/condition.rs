use std::fmt;

use super::custom_props::CustomProps;
use super::item::ConditionItem;
use super::node::NodeRef;
use crate::evaluate::{EvalContext, check_condition};

/// How a [`Condition`] combines its elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CondType {
    /// Never matches.
    #[default]
    Unknown,
    /// Exactly one item.
    Single,
    And,
    Or,
}

impl CondType {
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "single" => Some(CondType::Single),
            "and" => Some(CondType::And),
            "or" => Some(CondType::Or),
            _ => None,
        }
    }
}

impl fmt::Display for CondType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CondType::Unknown => "unknown",
            CondType::Single => "single",
            CondType::And => "and",
            CondType::Or => "or",
        };
        f.write_str(name)
    }
}

/// A boolean combination of condition items, or of nested conditions.
///
/// The default value has type [`CondType::Unknown`] and never matches.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Condition {
    pub(crate) cond_type: CondType,
    pub(crate) body: ConditionBody,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ConditionBody {
    Items(Vec<ConditionItem>),
    Combined(Vec<Condition>),
}

impl Default for ConditionBody {
    fn default() -> Self {
        ConditionBody::Items(Vec::new())
    }
}

impl Condition {
    /// A condition holding exactly one item.
    #[must_use]
    pub fn single(item: ConditionItem) -> Self {
        Self {
            cond_type: CondType::Single,
            body: ConditionBody::Items(vec![item]),
        }
    }

    /// A flat AND over items.
    #[must_use]
    pub fn all(items: Vec<ConditionItem>) -> Self {
        Self::items(CondType::And, items)
    }

    /// A flat OR over items.
    #[must_use]
    pub fn any(items: Vec<ConditionItem>) -> Self {
        Self::items(CondType::Or, items)
    }

    #[must_use]
    pub fn items(cond_type: CondType, items: Vec<ConditionItem>) -> Self {
        Self {
            cond_type,
            body: ConditionBody::Items(items),
        }
    }

    /// A condition combining nested conditions.
    #[must_use]
    pub fn combined(cond_type: CondType, conditions: Vec<Condition>) -> Self {
        Self {
            cond_type,
            body: ConditionBody::Combined(conditions),
        }
    }

    /// Evaluate against `node`, resolving custom items through `custom_props`.
    #[must_use]
    pub fn check(&self, node: &NodeRef, custom_props: &CustomProps) -> bool {
        check_condition(self, node, EvalContext::new(custom_props))
    }

    #[must_use]
    pub fn cond_type(&self) -> CondType {
        self.cond_type
    }

    #[must_use]
    pub fn is_combined(&self) -> bool {
        matches!(self.body, ConditionBody::Combined(_))
    }

    /// The flat item list; empty for combined conditions.
    #[must_use]
    pub fn condition_items(&self) -> &[ConditionItem] {
        match &self.body {
            ConditionBody::Items(items) => items,
            ConditionBody::Combined(_) => &[],
        }
    }

    /// The nested conditions; empty for flat conditions.
    #[must_use]
    pub fn combined_conditions(&self) -> &[Condition] {
        match &self.body {
            ConditionBody::Combined(conds) => conds,
            ConditionBody::Items(_) => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prop;

    #[test]
    fn cond_type_names() {
        assert_eq!(CondType::from_name("single"), Some(CondType::Single));
        assert_eq!(CondType::from_name("and"), Some(CondType::And));
        assert_eq!(CondType::from_name("or"), Some(CondType::Or));
        assert_eq!(CondType::from_name("AND"), None);
        assert_eq!(CondType::from_name(""), None);
        assert_eq!(CondType::Or.to_string(), "or");
    }

    #[test]
    fn default_is_unknown() {
        let cond = Condition::default();
        assert_eq!(cond.cond_type(), CondType::Unknown);
        assert!(!cond.is_combined());
        assert!(cond.condition_items().is_empty());
    }

    #[test]
    fn constructors() {
        let single = Condition::single(prop("type").eq("button"));
        assert_eq!(single.cond_type(), CondType::Single);
        assert_eq!(single.condition_items().len(), 1);

        let all = Condition::all(vec![prop("text").ne(""), prop("isEnable").eq(true)]);
        assert_eq!(all.cond_type(), CondType::And);
        assert_eq!(all.condition_items().len(), 2);

        let nested = Condition::combined(CondType::Or, vec![single.clone(), all]);
        assert!(nested.is_combined());
        assert_eq!(nested.combined_conditions().len(), 2);
        assert!(nested.condition_items().is_empty());
        assert_eq!(nested.combined_conditions()[0], single);
    }
}
