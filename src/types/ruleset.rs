use std::fmt;

use serde_json::Value as JsonValue;

use super::condition::Condition;
use super::custom_props::CustomProps;
use super::defines::RulesDefines;
use super::node::{NodeRef, ReadableRulesNode};
use super::rule::ReadableRule;
use super::verdict::Verdict;
use crate::evaluate::EvalContext;
use crate::parse::{ParseError, ParseOptions};

/// Builder for assembling a [`ReadableRules`] in code.
///
/// Rules are checked in the order they are added.
///
/// # Example
///
/// ```
/// use readable_rules::{Condition, Element, NodeRef, ReadableRules, RulesDefines, prop};
///
/// let rules = ReadableRules::builder()
///     .defines(RulesDefines::new().root_type("Dialog"))
///     .rule("buttons", true, Condition::single(prop("type").eq("Button")))
///     .rule("images", false, Condition::single(prop("type").eq("Image")))
///     .build();
///
/// let button: NodeRef = Element::builder(1).node_type("Button").build();
/// assert!(rules.is_readable(&button));
/// ```
#[derive(Debug, Default)]
pub struct ReadableRulesBuilder {
    defines: RulesDefines,
    custom_props: CustomProps,
    rules: Vec<ReadableRule>,
}

impl ReadableRulesBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn defines(mut self, defines: RulesDefines) -> Self {
        self.defines = defines;
        self
    }

    /// Register a named predicate that items with `is_custom` refer to.
    #[must_use]
    pub fn custom_prop(mut self, name: &str, condition: Condition) -> Self {
        self.custom_props.insert(name, condition);
        self
    }

    #[must_use]
    pub fn rule(mut self, name: &str, is_focus: bool, condition: Condition) -> Self {
        self.rules.push(ReadableRule::new(name, condition, is_focus));
        self
    }

    #[must_use]
    pub fn build(self) -> ReadableRules {
        ReadableRules {
            defines: self.defines,
            custom_props: self.custom_props,
            rules: self.rules,
        }
    }
}

/// An accepted rule document. Immutable and safe to share across threads.
#[derive(Debug, Clone)]
pub struct ReadableRules {
    pub(crate) defines: RulesDefines,
    pub(crate) custom_props: CustomProps,
    pub(crate) rules: Vec<ReadableRule>,
}

impl ReadableRules {
    #[must_use]
    pub fn builder() -> ReadableRulesBuilder {
        ReadableRulesBuilder::new()
    }

    /// Parse a JSON rule document with default options.
    ///
    /// # Errors
    ///
    /// Returns [`ReadableRulesError`](crate::ReadableRulesError) if the text is
    /// not JSON or the document is structurally invalid.
    pub fn from_json(text: &str) -> Result<Self, crate::ReadableRulesError> {
        Self::from_json_with(text, &ParseOptions::default())
    }

    /// Parse a JSON rule document.
    ///
    /// # Errors
    ///
    /// Returns [`ReadableRulesError`](crate::ReadableRulesError) if the text is
    /// not JSON or the document is structurally invalid.
    pub fn from_json_with(
        text: &str,
        options: &ParseOptions,
    ) -> Result<Self, crate::ReadableRulesError> {
        let root: JsonValue = serde_json::from_str(text)?;
        Ok(Self::from_value(&root, options)?)
    }

    /// Build from an already decoded JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] locating the first structural violation.
    pub fn from_value(root: &JsonValue, options: &ParseOptions) -> Result<Self, ParseError> {
        let parsed = crate::parse::parse(root, options)?;
        Ok(Self {
            defines: parsed.defines,
            custom_props: parsed.custom_props,
            rules: parsed.rules,
        })
    }

    /// The first rule whose condition matches `node`, with its outcome.
    #[must_use]
    pub fn evaluate(&self, node: &NodeRef) -> Option<Verdict> {
        let ctx = EvalContext::new(&self.custom_props);
        let verdict = self.rules.iter().find_map(|rule| {
            let result = rule.check(node, ctx);
            result
                .is_handled()
                .then(|| Verdict::new(rule.name(), result.is_readable))
        });
        match &verdict {
            Some(v) => tracing::debug!(
                id = node.accessibility_id(),
                rule = v.rule(),
                readable = v.readable(),
                "readable rule matched"
            ),
            None => tracing::trace!(id = node.accessibility_id(), "no readable rule matched"),
        }
        verdict
    }

    /// Outcome of the first matching rule; `false` when none match.
    #[must_use]
    pub fn is_readable(&self, node: &NodeRef) -> bool {
        self.evaluate(node).is_some_and(|v| v.readable())
    }

    /// A modal node whose type is a root type.
    #[must_use]
    pub fn is_root_type(&self, node: &dyn ReadableRulesNode) -> bool {
        node.node_type()
            .is_some_and(|t| self.defines.is_root_type(&t) && node.is_modal())
    }

    #[must_use]
    pub fn is_scroll_ignore_types(&self, node: &dyn ReadableRulesNode) -> bool {
        node.node_type()
            .is_some_and(|t| self.defines.is_scroll_ignore_type(&t))
    }

    #[must_use]
    pub fn is_scrollable_types(&self, node: &dyn ReadableRulesNode) -> bool {
        node.node_type()
            .is_some_and(|t| self.defines.is_scrollable_type(&t))
    }

    /// Walks from `node` to the root. A root-type ancestor (or `node` itself)
    /// makes it available; a root-type last child at any level hides it.
    #[must_use]
    pub fn is_available(&self, node: &NodeRef) -> bool {
        let mut current = Some(node.clone());
        while let Some(n) = current {
            if self.is_root_type(&*n) {
                return true;
            }
            let children = n.children();
            if let Some(last) = children.last()
                && self.is_root_type(&**last)
            {
                return false;
            }
            current = n.parent();
        }
        true
    }

    #[must_use]
    pub fn defines(&self) -> &RulesDefines {
        &self.defines
    }

    #[must_use]
    pub fn custom_props(&self) -> &CustomProps {
        &self.custom_props
    }

    #[must_use]
    pub fn rules(&self) -> &[ReadableRule] {
        &self.rules
    }

    /// Rule names in evaluation order.
    #[must_use]
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(ReadableRule::name).collect()
    }
}

impl fmt::Display for ReadableRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ReadableRules({} rules, {} custom props)",
            self.rules.len(),
            self.custom_props.len(),
        )
    }
}
