use std::collections::BTreeSet;
use std::sync::Arc;

use super::value::PropValue;

/// Shared handle to a node of the accessibility tree.
pub type NodeRef = Arc<dyn ReadableRulesNode>;

/// Read-only view of one UI element, implemented by the tree owner.
///
/// Every property getter returns `None` when the element does not carry the
/// property; rules treat that as a non-match. Getters default to `None`, so
/// implementers only override what their tree exposes.
///
/// `parent()` is a navigation relation only. Implementations should hold
/// parents weakly so that parent and child handles never form a cycle.
pub trait ReadableRulesNode: Send + Sync {
    fn accessibility_id(&self) -> i64;

    fn text(&self) -> Option<String> {
        None
    }

    fn hint_text(&self) -> Option<String> {
        None
    }

    fn description(&self) -> Option<String> {
        None
    }

    fn accessibility_text(&self) -> Option<String> {
        None
    }

    /// The component type, e.g. `"Button"` or `"Dialog"`.
    fn node_type(&self) -> Option<String> {
        None
    }

    fn accessibility_level(&self) -> Option<String> {
        None
    }

    fn accessibility_group(&self) -> Option<bool> {
        None
    }

    fn is_enable(&self) -> Option<bool> {
        None
    }

    fn children_count(&self) -> Option<i32> {
        None
    }

    fn action_names(&self) -> Option<BTreeSet<String>> {
        None
    }

    fn parent(&self) -> Option<NodeRef>;

    fn children(&self) -> Vec<NodeRef>;

    fn is_modal(&self) -> bool {
        true
    }
}

/// The node properties a condition item can read, keyed by their rule-document name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeProp {
    Text,
    HintText,
    Description,
    AccessibilityText,
    Type,
    AccessibilityLevel,
    AccessibilityGroup,
    IsEnable,
    ChildrenCount,
    ActionNames,
}

impl NodeProp {
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "text" => Some(NodeProp::Text),
            "hintText" => Some(NodeProp::HintText),
            "description" => Some(NodeProp::Description),
            "accessibilityText" => Some(NodeProp::AccessibilityText),
            "type" => Some(NodeProp::Type),
            "accessibilityLevel" => Some(NodeProp::AccessibilityLevel),
            "accessibilityGroup" => Some(NodeProp::AccessibilityGroup),
            "isEnable" => Some(NodeProp::IsEnable),
            "children_count" => Some(NodeProp::ChildrenCount),
            "actionNames" => Some(NodeProp::ActionNames),
            _ => None,
        }
    }

    /// Read this property from `node`. `None` if the node lacks it.
    pub fn read(self, node: &dyn ReadableRulesNode) -> Option<PropValue> {
        match self {
            NodeProp::Text => node.text().map(PropValue::String),
            NodeProp::HintText => node.hint_text().map(PropValue::String),
            NodeProp::Description => node.description().map(PropValue::String),
            NodeProp::AccessibilityText => node.accessibility_text().map(PropValue::String),
            NodeProp::Type => node.node_type().map(PropValue::String),
            NodeProp::AccessibilityLevel => node.accessibility_level().map(PropValue::String),
            NodeProp::AccessibilityGroup => node.accessibility_group().map(PropValue::Bool),
            NodeProp::IsEnable => node.is_enable().map(PropValue::Bool),
            NodeProp::ChildrenCount => node.children_count().map(PropValue::Number),
            NodeProp::ActionNames => node.action_names().map(PropValue::Array),
        }
    }
}
