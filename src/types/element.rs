use std::collections::BTreeSet;
use std::sync::{Arc, Weak};

use super::node::{NodeRef, ReadableRulesNode};

/// An immutable, in-memory accessibility element.
///
/// A snapshot of a UI tree built with [`ElementBuilder`]. Children are owned,
/// parents are held weakly.
///
/// # Example
///
/// ```
/// use readable_rules::Element;
///
/// let root = Element::builder(1)
///     .node_type("Column")
///     .child(Element::builder(2).node_type("Button").text("OK"))
///     .build();
///
/// let button = root.find(2).unwrap();
/// assert_eq!(button.parent_element().unwrap().id(), 1);
/// ```
#[derive(Debug)]
pub struct Element {
    id: i64,
    props: ElementProps,
    modal: bool,
    parent: Weak<Element>,
    children: Vec<Arc<Element>>,
}

#[derive(Debug, Clone, Default)]
struct ElementProps {
    text: Option<String>,
    hint_text: Option<String>,
    description: Option<String>,
    accessibility_text: Option<String>,
    node_type: Option<String>,
    accessibility_level: Option<String>,
    accessibility_group: Option<bool>,
    is_enable: Option<bool>,
    action_names: Option<BTreeSet<String>>,
}

/// Builder for an [`Element`] subtree.
#[derive(Debug, Clone)]
pub struct ElementBuilder {
    id: i64,
    props: ElementProps,
    modal: bool,
    children: Vec<ElementBuilder>,
}

impl Element {
    #[must_use]
    pub fn builder(id: i64) -> ElementBuilder {
        ElementBuilder {
            id,
            props: ElementProps::default(),
            modal: true,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> i64 {
        self.id
    }

    #[must_use]
    pub fn parent_element(&self) -> Option<Arc<Element>> {
        self.parent.upgrade()
    }

    #[must_use]
    pub fn child_elements(&self) -> &[Arc<Element>] {
        &self.children
    }

    /// Find the element with `id` in this subtree, including `self`.
    #[must_use]
    pub fn find(self: &Arc<Self>, id: i64) -> Option<Arc<Element>> {
        if self.id == id {
            return Some(Arc::clone(self));
        }
        self.children.iter().find_map(|child| child.find(id))
    }
}

impl ElementBuilder {
    #[must_use]
    pub fn text(mut self, v: &str) -> Self {
        self.props.text = Some(v.to_owned());
        self
    }

    #[must_use]
    pub fn hint_text(mut self, v: &str) -> Self {
        self.props.hint_text = Some(v.to_owned());
        self
    }

    #[must_use]
    pub fn description(mut self, v: &str) -> Self {
        self.props.description = Some(v.to_owned());
        self
    }

    #[must_use]
    pub fn accessibility_text(mut self, v: &str) -> Self {
        self.props.accessibility_text = Some(v.to_owned());
        self
    }

    #[must_use]
    pub fn node_type(mut self, v: &str) -> Self {
        self.props.node_type = Some(v.to_owned());
        self
    }

    #[must_use]
    pub fn accessibility_level(mut self, v: &str) -> Self {
        self.props.accessibility_level = Some(v.to_owned());
        self
    }

    #[must_use]
    pub fn accessibility_group(mut self, v: bool) -> Self {
        self.props.accessibility_group = Some(v);
        self
    }

    #[must_use]
    pub fn enabled(mut self, v: bool) -> Self {
        self.props.is_enable = Some(v);
        self
    }

    #[must_use]
    pub fn action_names<'a>(mut self, names: impl IntoIterator<Item = &'a str>) -> Self {
        self.props.action_names = Some(names.into_iter().map(str::to_owned).collect());
        self
    }

    /// Defaults to `true`.
    #[must_use]
    pub fn modal(mut self, v: bool) -> Self {
        self.modal = v;
        self
    }

    #[must_use]
    pub fn child(mut self, child: ElementBuilder) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = ElementBuilder>) -> Self {
        self.children.extend(children);
        self
    }

    #[must_use]
    pub fn build(self) -> Arc<Element> {
        self.build_with_parent(Weak::new())
    }

    fn build_with_parent(self, parent: Weak<Element>) -> Arc<Element> {
        let ElementBuilder {
            id,
            props,
            modal,
            children,
        } = self;
        Arc::new_cyclic(|me| Element {
            id,
            props,
            modal,
            parent,
            children: children
                .into_iter()
                .map(|c| c.build_with_parent(me.clone()))
                .collect(),
        })
    }
}

impl ReadableRulesNode for Element {
    fn accessibility_id(&self) -> i64 {
        self.id
    }

    fn text(&self) -> Option<String> {
        self.props.text.clone()
    }

    fn hint_text(&self) -> Option<String> {
        self.props.hint_text.clone()
    }

    fn description(&self) -> Option<String> {
        self.props.description.clone()
    }

    fn accessibility_text(&self) -> Option<String> {
        self.props.accessibility_text.clone()
    }

    fn node_type(&self) -> Option<String> {
        self.props.node_type.clone()
    }

    fn accessibility_level(&self) -> Option<String> {
        self.props.accessibility_level.clone()
    }

    fn accessibility_group(&self) -> Option<bool> {
        self.props.accessibility_group
    }

    fn is_enable(&self) -> Option<bool> {
        self.props.is_enable
    }

    fn children_count(&self) -> Option<i32> {
        i32::try_from(self.children.len()).ok()
    }

    fn action_names(&self) -> Option<BTreeSet<String>> {
        self.props.action_names.clone()
    }

    fn parent(&self) -> Option<NodeRef> {
        self.parent.upgrade().map(|p| p as NodeRef)
    }

    fn children(&self) -> Vec<NodeRef> {
        self.children
            .iter()
            .map(|c| Arc::clone(c) as NodeRef)
            .collect()
    }

    fn is_modal(&self) -> bool {
        self.modal
    }
}
