mod error;
mod json;
mod parser;

pub use error::ParseError;
pub use parser::ParsedDocument;

use serde_json::Value as JsonValue;

/// Options controlling how a rule document is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    /// When `false` (the default), a `combined_condition` entry that fails to
    /// parse is kept as an always-false condition instead of rejecting the
    /// document. When `true`, the failure rejects the whole document.
    pub strict_combined_conditions: bool,
}

impl ParseOptions {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            strict_combined_conditions: false,
        }
    }

    #[must_use]
    pub const fn strict() -> Self {
        Self {
            strict_combined_conditions: true,
        }
    }
}

/// Parse a rule document that has already been decoded into JSON.
///
/// Sections are parsed in order (`defines`, `custom_props`, `rules`) and the
/// first violation aborts the whole document.
///
/// # Errors
///
/// Returns [`ParseError`] locating the first structural violation.
pub fn parse(root: &JsonValue, options: &ParseOptions) -> Result<ParsedDocument, ParseError> {
    json::parse_document(root, options)
}
