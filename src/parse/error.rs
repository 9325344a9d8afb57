use std::fmt;

/// A structural violation in a rule document.
///
/// `path` locates the offending JSON node, e.g. `rules[1].check.condition.operator`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    message: String,
    path: String,
}

impl ParseError {
    pub(crate) fn new(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: path.into(),
        }
    }

    pub(crate) fn missing(path: &str) -> Self {
        Self::new("required field is missing", path)
    }

    pub(crate) fn expected(what: &str, path: &str) -> Self {
        Self::new(format!("expected {what}"), path)
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "parse error: {}", self.message)
        } else {
            write!(f, "parse error at {}: {}", self.path, self.message)
        }
    }
}

impl std::error::Error for ParseError {}
