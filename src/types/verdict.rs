use std::fmt;

/// The rule that decided a node's readability, and its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Verdict {
    rule: String,
    readable: bool,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.rule, self.readable)
    }
}

impl Verdict {
    pub fn new(rule: impl Into<String>, readable: bool) -> Self {
        Self {
            rule: rule.into(),
            readable,
        }
    }

    #[must_use]
    pub fn rule(&self) -> &str {
        &self.rule
    }

    #[must_use]
    pub fn readable(&self) -> bool {
        self.readable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_verdict() {
        let v = Verdict::new("buttons", true);
        assert_eq!(v.rule(), "buttons");
        assert!(v.readable());
        assert_eq!(v.to_string(), "buttons = true");
    }

    #[test]
    fn verdict_equality() {
        assert_eq!(Verdict::new("r", false), Verdict::new("r", false));
        assert_ne!(Verdict::new("r", true), Verdict::new("s", true));
    }
}
