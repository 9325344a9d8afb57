use crate::{CustomProps, ReadableRule, RulesDefines};

/// The sections of a parsed rule document.
#[derive(Debug)]
pub struct ParsedDocument {
    pub defines: RulesDefines,
    pub custom_props: CustomProps,
    pub rules: Vec<ReadableRule>,
}
