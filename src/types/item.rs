use std::fmt;

use super::custom_props::CustomProps;
use super::node::{NodeProp, NodeRef};
use super::value::PropValue;
use crate::evaluate::{EvalContext, check_item};

/// Comparison operators supported in condition items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CondOperator {
    Eq,
    Ne,
    NotOneOf,
    IsOneOf,
    HasAny,
}

impl CondOperator {
    /// Resolve an operator from its rule-document spelling.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "eq" => Some(CondOperator::Eq),
            "ne" => Some(CondOperator::Ne),
            "not_oneof" => Some(CondOperator::NotOneOf),
            "is_oneof" => Some(CondOperator::IsOneOf),
            "has_any" => Some(CondOperator::HasAny),
            _ => None,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            CondOperator::Eq => "eq",
            CondOperator::Ne => "ne",
            CondOperator::NotOneOf => "not_oneof",
            CondOperator::IsOneOf => "is_oneof",
            CondOperator::HasAny => "has_any",
        }
    }
}

impl fmt::Display for CondOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which nodes, relative to the evaluated one, an item inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetNode {
    /// The evaluated node itself.
    #[default]
    Default,
    /// The parent, or every ancestor when cascading.
    Parent,
    /// The direct children, or the whole subtree when cascading.
    Children,
}

impl TargetNode {
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "default" => Some(TargetNode::Default),
            "parent" => Some(TargetNode::Parent),
            "children" => Some(TargetNode::Children),
            _ => None,
        }
    }
}

/// One atomic predicate of a [`Condition`](super::Condition).
///
/// Either compares a node property against a literal value, or (when
/// `custom` is set) evaluates a named predicate from
/// [`CustomProps`](super::CustomProps) and compares its outcome against a
/// boolean literal. The predicate holds if it holds for any target node.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionItem {
    pub(crate) prop: String,
    pub(crate) node_prop: Option<NodeProp>,
    pub(crate) op: CondOperator,
    pub(crate) value: PropValue,
    pub(crate) target: TargetNode,
    pub(crate) cascade: bool,
    pub(crate) custom: bool,
}

impl ConditionItem {
    #[must_use]
    pub fn new(prop: impl Into<String>, op: CondOperator, value: impl Into<PropValue>) -> Self {
        let prop = prop.into();
        Self {
            node_prop: NodeProp::from_name(&prop),
            prop,
            op,
            value: value.into(),
            target: TargetNode::Default,
            cascade: false,
            custom: false,
        }
    }

    /// Select the nodes this item inspects.
    #[must_use]
    pub fn with_target(mut self, target: TargetNode) -> Self {
        self.target = target;
        self
    }

    /// Walk all ancestors / descendants instead of the immediate relation.
    #[must_use]
    pub fn with_cascade(mut self, cascade: bool) -> Self {
        self.cascade = cascade;
        self
    }

    /// Interpret `prop` as the name of a custom predicate.
    #[must_use]
    pub fn with_custom(mut self, custom: bool) -> Self {
        self.custom = custom;
        self
    }

    /// True if the predicate holds for any of this item's target nodes.
    #[must_use]
    pub fn check(&self, node: &NodeRef, custom_props: &CustomProps) -> bool {
        check_item(self, node, EvalContext::new(custom_props))
    }

    #[must_use]
    pub fn prop(&self) -> &str {
        &self.prop
    }

    #[must_use]
    pub fn operator(&self) -> CondOperator {
        self.op
    }

    #[must_use]
    pub fn value(&self) -> &PropValue {
        &self.value
    }

    #[must_use]
    pub fn target(&self) -> TargetNode {
        self.target
    }

    #[must_use]
    pub fn is_cascade(&self) -> bool {
        self.cascade
    }

    #[must_use]
    pub fn is_custom(&self) -> bool {
        self.custom
    }
}

/// Intermediate builder for property comparisons.
/// Created by [`prop()`] or [`custom()`]; a comparison method yields the item.
#[derive(Debug, Clone)]
pub struct PropExpr {
    name: String,
    custom: bool,
}

impl PropExpr {
    fn build(self, op: CondOperator, value: PropValue) -> ConditionItem {
        ConditionItem::new(self.name, op, value).with_custom(self.custom)
    }

    #[must_use]
    pub fn eq(self, value: impl Into<PropValue>) -> ConditionItem {
        self.build(CondOperator::Eq, value.into())
    }

    #[must_use]
    pub fn ne(self, value: impl Into<PropValue>) -> ConditionItem {
        self.build(CondOperator::Ne, value.into())
    }

    #[must_use]
    pub fn is_one_of(self, value: impl Into<PropValue>) -> ConditionItem {
        self.build(CondOperator::IsOneOf, value.into())
    }

    #[must_use]
    pub fn not_one_of(self, value: impl Into<PropValue>) -> ConditionItem {
        self.build(CondOperator::NotOneOf, value.into())
    }

    #[must_use]
    pub fn has_any(self, value: impl Into<PropValue>) -> ConditionItem {
        self.build(CondOperator::HasAny, value.into())
    }
}

/// Start an item comparing the node property `name`.
#[must_use]
pub fn prop(name: &str) -> PropExpr {
    PropExpr {
        name: name.to_owned(),
        custom: false,
    }
}

/// Start an item evaluating the custom predicate `name`.
#[must_use]
pub fn custom(name: &str) -> PropExpr {
    PropExpr {
        name: name.to_owned(),
        custom: true,
    }
}
