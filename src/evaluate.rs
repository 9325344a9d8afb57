use crate::types::ConditionBody;
use crate::{CondOperator, CondType, Condition, ConditionItem, CustomProps, NodeRef, TargetNode};

/// Nested custom-predicate lookups allowed before a lookup counts as a non-match.
pub(crate) const MAX_CUSTOM_DEPTH: usize = 32;

/// A custom predicate being evaluated for a node, linked to the lookups enclosing it.
#[derive(Debug)]
struct ActiveCustom<'a> {
    name: &'a str,
    node_id: i64,
    outer: Option<&'a ActiveCustom<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct EvalContext<'a> {
    custom_props: &'a CustomProps,
    active: Option<&'a ActiveCustom<'a>>,
    depth: usize,
}

impl<'a> EvalContext<'a> {
    pub(crate) fn new(custom_props: &'a CustomProps) -> Self {
        Self {
            custom_props,
            active: None,
            depth: 0,
        }
    }

    /// Whether `name` is already being evaluated for the node `node_id`.
    fn is_active(self, name: &str, node_id: i64) -> bool {
        let mut frame = self.active;
        while let Some(f) = frame {
            if f.node_id == node_id && f.name == name {
                return true;
            }
            frame = f.outer;
        }
        false
    }

    fn enter<'b>(self, frame: &'b ActiveCustom<'b>) -> EvalContext<'b>
    where
        'a: 'b,
    {
        EvalContext {
            custom_props: self.custom_props,
            active: Some(frame),
            depth: self.depth + 1,
        }
    }
}

pub(crate) fn check_condition(cond: &Condition, node: &NodeRef, ctx: EvalContext<'_>) -> bool {
    match (cond.cond_type, &cond.body) {
        (CondType::Unknown, _) => false,
        (CondType::Single, ConditionBody::Items(items)) => match items.as_slice() {
            [item] => check_item(item, node, ctx),
            _ => false,
        },
        (CondType::Single, ConditionBody::Combined(_)) => false,
        (cond_type, ConditionBody::Combined(conds)) => check_common(
            cond_type,
            conds.iter().map(|c| check_condition(c, node, ctx)),
        ),
        (cond_type, ConditionBody::Items(items)) => check_common(
            cond_type,
            items.iter().map(|item| check_item(item, node, ctx)),
        ),
    }
}

/// Fold lazily evaluated results by `cond_type`.
///
/// AND stops at the first `false`, OR at the first `true`. When nothing
/// decides, the result is `cond_type == And`, so an empty AND is `true`.
pub(crate) fn check_common(cond_type: CondType, results: impl IntoIterator<Item = bool>) -> bool {
    for result in results {
        if cond_type == CondType::And && !result {
            return false;
        }
        if cond_type == CondType::Or && result {
            return true;
        }
    }
    cond_type == CondType::And
}

pub(crate) fn check_item(item: &ConditionItem, node: &NodeRef, ctx: EvalContext<'_>) -> bool {
    let targets = target_nodes(item, node);
    if item.custom {
        targets.iter().any(|t| check_custom(item, t, ctx))
    } else {
        targets.iter().any(|t| check_prop(item, t))
    }
}

/// The nodes `item` inspects, relative to `node`.
///
/// Cascading children are collected level by level per subtree: all direct
/// children first, then each child's own expansion in order.
pub(crate) fn target_nodes(item: &ConditionItem, node: &NodeRef) -> Vec<NodeRef> {
    match item.target {
        TargetNode::Default => vec![NodeRef::clone(node)],
        TargetNode::Parent if !item.cascade => node.parent().into_iter().collect(),
        TargetNode::Parent => {
            let mut ancestors = Vec::new();
            let mut current = node.parent();
            while let Some(parent) = current {
                current = parent.parent();
                ancestors.push(parent);
            }
            ancestors
        }
        TargetNode::Children if !item.cascade => node.children(),
        TargetNode::Children => {
            let mut descendants = Vec::new();
            collect_descendants(node, &mut descendants);
            descendants
        }
    }
}

fn collect_descendants(node: &NodeRef, out: &mut Vec<NodeRef>) {
    let direct = node.children();
    out.extend(direct.iter().cloned());
    for child in &direct {
        collect_descendants(child, out);
    }
}

fn check_prop(item: &ConditionItem, node: &NodeRef) -> bool {
    item.node_prop
        .and_then(|p| p.read(&**node))
        .is_some_and(|value| value.compare(item.op, &item.value))
}

fn check_custom(item: &ConditionItem, node: &NodeRef, ctx: EvalContext<'_>) -> bool {
    let Some(expected) = item.value.as_bool() else {
        return false;
    };
    if !matches!(item.op, CondOperator::Eq | CondOperator::Ne) {
        return false;
    }
    if ctx.depth >= MAX_CUSTOM_DEPTH {
        tracing::debug!(prop = %item.prop, depth = ctx.depth, "custom prop nesting too deep");
        return false;
    }
    let node_id = node.accessibility_id();
    if ctx.is_active(&item.prop, node_id) {
        tracing::debug!(prop = %item.prop, id = node_id, "custom prop refers to itself");
        return false;
    }
    let Some(cond) = ctx.custom_props.get_condition(&item.prop) else {
        return false;
    };

    let frame = ActiveCustom {
        name: &item.prop,
        node_id,
        outer: ctx.active,
    };
    let result = check_condition(cond, node, ctx.enter(&frame));
    match item.op {
        CondOperator::Eq => result == expected,
        _ => result != expected,
    }
}
