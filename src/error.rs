use thiserror::Error;

use crate::parse::ParseError;

/// Unified error for loading a rule document.
///
/// Returned by [`ReadableRules::from_json()`](crate::ReadableRules::from_json).
#[derive(Debug, Error)]
pub enum ReadableRulesError {
    /// The text is not valid JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),
}
