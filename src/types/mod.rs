mod condition;
mod custom_props;
mod defines;
mod element;
mod item;
mod node;
mod rule;
mod ruleset;
mod value;
mod verdict;

pub(crate) use condition::ConditionBody;
pub use condition::{CondType, Condition};
pub use custom_props::CustomProps;
pub use defines::RulesDefines;
pub use element::{Element, ElementBuilder};
pub use item::{CondOperator, ConditionItem, PropExpr, TargetNode, custom, prop};
pub use node::{NodeProp, NodeRef, ReadableRulesNode};
pub use rule::{CheckResult, HandleResult, ReadableRule};
pub use ruleset::{ReadableRules, ReadableRulesBuilder};
pub use value::{PropValue, ValueType};
pub use verdict::Verdict;
