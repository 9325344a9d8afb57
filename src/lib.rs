//! Readable-rules engine: decides from a JSON rule document whether an
//! accessibility element should receive focus.

mod checker;
mod error;
mod evaluate;
mod parse;
mod types;

pub use checker::{InitState, ReadableRulesChecker, global};
pub use error::ReadableRulesError;
pub use parse::{ParseError, ParseOptions, ParsedDocument};
pub use types::{
    CheckResult, CondOperator, CondType, Condition, ConditionItem, CustomProps, Element,
    ElementBuilder, HandleResult, NodeProp, NodeRef, PropExpr, PropValue, ReadableRule,
    ReadableRules, ReadableRulesBuilder, ReadableRulesNode, RulesDefines, TargetNode, ValueType,
    Verdict, custom, prop,
};
