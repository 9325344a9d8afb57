use super::condition::Condition;
use super::custom_props::CustomProps;
use super::node::NodeRef;
use crate::evaluate::{EvalContext, check_condition};

/// A named rule: when `condition` matches a node, the node's readability is `is_focus`.
///
/// Rules are checked in document order and the first match decides.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadableRule {
    pub(crate) name: String,
    pub(crate) condition: Condition,
    pub(crate) is_focus: bool,
}

/// Whether a rule took a decision for a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleResult {
    Handled,
    Unhandled,
}

/// Outcome of checking one rule against one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckResult {
    pub is_readable: bool,
    pub handle_result: HandleResult,
}

impl CheckResult {
    pub(crate) const UNHANDLED: CheckResult = CheckResult {
        is_readable: false,
        handle_result: HandleResult::Unhandled,
    };

    pub(crate) fn handled(is_readable: bool) -> Self {
        Self {
            is_readable,
            handle_result: HandleResult::Handled,
        }
    }

    #[must_use]
    pub fn is_handled(&self) -> bool {
        self.handle_result == HandleResult::Handled
    }
}

impl ReadableRule {
    #[must_use]
    pub fn new(name: impl Into<String>, condition: Condition, is_focus: bool) -> Self {
        Self {
            name: name.into(),
            condition,
            is_focus,
        }
    }

    /// Handled with `is_focus` when the condition matches, unhandled otherwise.
    #[must_use]
    pub fn is_readable(&self, node: &NodeRef, custom_props: &CustomProps) -> CheckResult {
        self.check(node, EvalContext::new(custom_props))
    }

    pub(crate) fn check(&self, node: &NodeRef, ctx: EvalContext<'_>) -> CheckResult {
        if check_condition(&self.condition, node, ctx) {
            CheckResult::handled(self.is_focus)
        } else {
            CheckResult::UNHANDLED
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn condition(&self) -> &Condition {
        &self.condition
    }

    #[must_use]
    pub fn is_focus(&self) -> bool {
        self.is_focus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prop;

    #[test]
    fn accessors() {
        let rule = ReadableRule::new("buttons", Condition::single(prop("type").eq("button")), true);
        assert_eq!(rule.name(), "buttons");
        assert!(rule.is_focus());
        assert_eq!(rule.condition().condition_items().len(), 1);
    }

    #[test]
    fn is_readable_reports_handled_only_on_match() {
        let rule = ReadableRule::new("hide", Condition::single(prop("type").eq("Image")), false);
        let props = CustomProps::new();
        let image: NodeRef = crate::Element::builder(1).node_type("Image").build();
        let text: NodeRef = crate::Element::builder(2).node_type("Text").build();

        assert_eq!(rule.is_readable(&image, &props), CheckResult::handled(false));
        assert_eq!(rule.is_readable(&text, &props), CheckResult::UNHANDLED);
    }

    #[test]
    fn check_result_states() {
        assert!(!CheckResult::UNHANDLED.is_handled());
        let handled = CheckResult::handled(false);
        assert!(handled.is_handled());
        assert!(!handled.is_readable);
    }
}
