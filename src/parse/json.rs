//! JSON rule document → rule model.

use std::collections::BTreeSet;

use serde_json::{Map, Value as JsonValue};

use super::error::ParseError;
use super::parser::ParsedDocument;
use super::ParseOptions;
use crate::{
    CondOperator, CondType, Condition, ConditionItem, CustomProps, PropValue, ReadableRule,
    RulesDefines, TargetNode,
};

type JsonObject = Map<String, JsonValue>;

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_owned()
    } else {
        format!("{path}.{key}")
    }
}

fn index(path: &str, i: usize) -> String {
    format!("{path}[{i}]")
}

fn as_object<'a>(value: &'a JsonValue, path: &str) -> Result<&'a JsonObject, ParseError> {
    value
        .as_object()
        .ok_or_else(|| ParseError::expected("an object", path))
}

fn required<'a>(obj: &'a JsonObject, key: &str, path: &str) -> Result<&'a JsonValue, ParseError> {
    obj.get(key).ok_or_else(|| ParseError::missing(&join(path, key)))
}

fn required_str<'a>(obj: &'a JsonObject, key: &str, path: &str) -> Result<&'a str, ParseError> {
    required(obj, key, path)?
        .as_str()
        .ok_or_else(|| ParseError::expected("a string", &join(path, key)))
}

/// Absent keys yield `default`; present keys must be booleans.
fn optional_bool(obj: &JsonObject, key: &str, path: &str, default: bool) -> Result<bool, ParseError> {
    match obj.get(key) {
        None => Ok(default),
        Some(value) => value
            .as_bool()
            .ok_or_else(|| ParseError::expected("a boolean", &join(path, key))),
    }
}

pub(crate) fn parse_document(
    root: &JsonValue,
    options: &ParseOptions,
) -> Result<ParsedDocument, ParseError> {
    let root = as_object(root, "")?;
    let defines = parse_defines(root)?;
    let custom_props = parse_custom_props(root, options)?;
    let rules = parse_rules(root, options)?;
    Ok(ParsedDocument {
        defines,
        custom_props,
        rules,
    })
}

fn parse_defines(root: &JsonObject) -> Result<RulesDefines, ParseError> {
    let defines_obj = as_object(required(root, "defines", "")?, "defines")?;
    let mut defines = RulesDefines::new();

    for name in string_list(defines_obj, "root_types", "defines")? {
        defines.add_root_type(name);
    }
    for name in string_list(defines_obj, "disabled_scroll_types", "defines")? {
        defines.add_scroll_ignore_type(name);
    }

    if let Some(value) = defines_obj.get("scrollable_types") {
        let path = join("defines", "scrollable_types");
        let arr = value
            .as_array()
            .ok_or_else(|| ParseError::expected("an array", &path))?;
        for (i, item) in arr.iter().enumerate() {
            match item.as_str() {
                Some(name) => defines.add_scrollable_type(name),
                None => tracing::trace!(path = %index(&path, i), "skipping non-string scrollable type"),
            }
        }
    }

    Ok(defines)
}

/// An optional array whose elements must all be strings.
fn string_list<'a>(
    obj: &'a JsonObject,
    key: &str,
    path: &str,
) -> Result<Vec<&'a str>, ParseError> {
    let Some(value) = obj.get(key) else {
        return Ok(Vec::new());
    };
    let path = join(path, key);
    let arr = value
        .as_array()
        .ok_or_else(|| ParseError::expected("an array", &path))?;
    arr.iter()
        .enumerate()
        .map(|(i, item)| {
            item.as_str()
                .ok_or_else(|| ParseError::expected("a string", &index(&path, i)))
        })
        .collect()
}

fn parse_custom_props(root: &JsonObject, options: &ParseOptions) -> Result<CustomProps, ParseError> {
    let mut props = CustomProps::new();
    let Some(value) = root.get("custom_props") else {
        return Ok(props);
    };
    for (name, cond) in as_object(value, "custom_props")? {
        let path = join("custom_props", name);
        props.insert(name.clone(), parse_condition(cond, &path, options)?);
    }
    Ok(props)
}

fn parse_rules(root: &JsonObject, options: &ParseOptions) -> Result<Vec<ReadableRule>, ParseError> {
    let arr = required(root, "rules", "")?
        .as_array()
        .ok_or_else(|| ParseError::expected("an array", "rules"))?;
    if arr.is_empty() {
        return Err(ParseError::new("at least one rule is required", "rules"));
    }
    arr.iter()
        .enumerate()
        .map(|(i, rule)| parse_rule(rule, &index("rules", i), options))
        .collect()
}

pub(crate) fn parse_rule(
    value: &JsonValue,
    path: &str,
    options: &ParseOptions,
) -> Result<ReadableRule, ParseError> {
    let obj = as_object(value, path)?;
    let name = required_str(obj, "name", path)?;
    let is_focus = required(obj, "isfocus", path)?
        .as_bool()
        .ok_or_else(|| ParseError::expected("a boolean", &join(path, "isfocus")))?;
    let condition = parse_condition(required(obj, "check", path)?, &join(path, "check"), options)?;
    Ok(ReadableRule::new(name, condition, is_focus))
}

pub(crate) fn parse_condition(
    value: &JsonValue,
    path: &str,
    options: &ParseOptions,
) -> Result<Condition, ParseError> {
    let obj = as_object(value, path)?;

    let type_name = required_str(obj, "condition_type", path)?;
    let cond_type = CondType::from_name(type_name).ok_or_else(|| {
        ParseError::new(
            format!("unknown condition type '{type_name}'"),
            join(path, "condition_type"),
        )
    })?;

    if let Some(combined) = obj.get("combined_condition") {
        let combined_path = join(path, "combined_condition");
        let children = parse_combined(combined, &combined_path, options)?;
        return Ok(Condition::combined(cond_type, children));
    }

    let items_value = required(obj, "condition", path)?;
    let items_path = join(path, "condition");
    if cond_type == CondType::Single {
        let item = parse_item(items_value, &items_path)?;
        return Ok(Condition::single(item));
    }

    let arr = items_value
        .as_array()
        .ok_or_else(|| ParseError::expected("an array", &items_path))?;
    if arr.len() < 2 {
        return Err(ParseError::new(
            format!("'{cond_type}' needs at least two items"),
            items_path,
        ));
    }
    let items = arr
        .iter()
        .enumerate()
        .map(|(i, item)| parse_item(item, &index(&items_path, i)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Condition::items(cond_type, items))
}

fn parse_combined(
    value: &JsonValue,
    path: &str,
    options: &ParseOptions,
) -> Result<Vec<Condition>, ParseError> {
    let arr = value
        .as_array()
        .ok_or_else(|| ParseError::expected("an array", path))?;
    if arr.is_empty() {
        return Err(ParseError::new("at least one condition is required", path));
    }

    let mut children = Vec::with_capacity(arr.len());
    for (i, child) in arr.iter().enumerate() {
        let child_path = index(path, i);
        match parse_condition(child, &child_path, options) {
            Ok(cond) => children.push(cond),
            Err(err) if options.strict_combined_conditions => return Err(err),
            Err(err) => {
                tracing::warn!(error = %err, "combined condition ignored, evaluates as false");
                children.push(Condition::default());
            }
        }
    }
    Ok(children)
}

/// Fields are validated in order: prop, operator, value, target, is_custom, cascade.
pub(crate) fn parse_item(value: &JsonValue, path: &str) -> Result<ConditionItem, ParseError> {
    let obj = as_object(value, path)?;

    let prop = required_str(obj, "prop", path)?;

    let op_name = required_str(obj, "operator", path)?;
    let op = CondOperator::from_name(op_name).ok_or_else(|| {
        ParseError::new(format!("unknown operator '{op_name}'"), join(path, "operator"))
    })?;

    let value = parse_value(required(obj, "value", path)?, &join(path, "value"))?;

    let target = match obj.get("target") {
        None => TargetNode::Default,
        Some(target) => {
            let target_path = join(path, "target");
            let name = target
                .as_str()
                .ok_or_else(|| ParseError::expected("a string", &target_path))?;
            TargetNode::from_name(name).ok_or_else(|| {
                ParseError::new(format!("unknown target '{name}'"), target_path)
            })?
        }
    };

    let custom = optional_bool(obj, "is_custom", path, false)?;
    let cascade = optional_bool(obj, "cascade", path, false)?;

    Ok(ConditionItem::new(prop, op, value)
        .with_target(target)
        .with_custom(custom)
        .with_cascade(cascade))
}

fn parse_value(value: &JsonValue, path: &str) -> Result<PropValue, ParseError> {
    match value {
        JsonValue::Bool(b) => Ok(PropValue::Bool(*b)),
        JsonValue::String(s) => Ok(PropValue::String(s.clone())),
        JsonValue::Array(arr) => arr
            .iter()
            .enumerate()
            .map(|(i, item)| {
                item.as_str()
                    .map(str::to_owned)
                    .ok_or_else(|| ParseError::expected("a string", &index(path, i)))
            })
            .collect::<Result<BTreeSet<_>, _>>()
            .map(PropValue::Array),
        JsonValue::Number(n) => parse_number(n, path).map(PropValue::Number),
        JsonValue::Null | JsonValue::Object(_) => Err(ParseError::expected(
            "a boolean, string, array of strings or number",
            path,
        )),
    }
}

/// Integers must fit in `i32`; fractional numbers are truncated toward zero first.
#[allow(clippy::cast_possible_truncation)]
fn parse_number(n: &serde_json::Number, path: &str) -> Result<i32, ParseError> {
    let out_of_range = || ParseError::new(format!("number {n} does not fit in 32 bits"), path);
    if let Some(i) = n.as_i64() {
        return i32::try_from(i).map_err(|_| out_of_range());
    }
    let truncated = n.as_f64().map(f64::trunc).filter(|f| f.is_finite());
    match truncated {
        Some(f) if (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&f) => Ok(f as i32),
        _ => Err(out_of_range()),
    }
}
