use std::collections::HashMap;

use super::condition::Condition;

/// Named, reusable conditions referenced by custom condition items.
#[derive(Debug, Clone, Default)]
pub struct CustomProps {
    props: HashMap<String, Condition>,
}

impl CustomProps {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `cond` under `name`, replacing any previous entry.
    pub fn insert(&mut self, name: impl Into<String>, cond: Condition) {
        self.props.insert(name.into(), cond);
    }

    #[must_use]
    pub fn with(mut self, name: &str, cond: Condition) -> Self {
        self.insert(name, cond);
        self
    }

    #[must_use]
    pub fn get_condition(&self, name: &str) -> Option<&Condition> {
        self.props.get(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.props.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.props.keys().map(String::as_str)
    }
}
