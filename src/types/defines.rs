use std::collections::HashSet;

/// Type classification sets from the `defines` section of a rule document.
///
/// All names are stored ASCII lower-cased and matched ASCII case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct RulesDefines {
    root_types: HashSet<String>,
    scroll_ignore_types: HashSet<String>,
    scrollable_types: HashSet<String>,
}

impl RulesDefines {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn root_type(mut self, name: &str) -> Self {
        self.add_root_type(name);
        self
    }

    #[must_use]
    pub fn scroll_ignore_type(mut self, name: &str) -> Self {
        self.add_scroll_ignore_type(name);
        self
    }

    #[must_use]
    pub fn scrollable_type(mut self, name: &str) -> Self {
        self.add_scrollable_type(name);
        self
    }

    pub fn add_root_type(&mut self, name: &str) {
        self.root_types.insert(name.to_ascii_lowercase());
    }

    pub fn add_scroll_ignore_type(&mut self, name: &str) {
        self.scroll_ignore_types.insert(name.to_ascii_lowercase());
    }

    pub fn add_scrollable_type(&mut self, name: &str) {
        self.scrollable_types.insert(name.to_ascii_lowercase());
    }

    #[must_use]
    pub fn is_root_type(&self, type_name: &str) -> bool {
        self.root_types.contains(&type_name.to_ascii_lowercase())
    }

    #[must_use]
    pub fn is_scroll_ignore_type(&self, type_name: &str) -> bool {
        self.scroll_ignore_types.contains(&type_name.to_ascii_lowercase())
    }

    #[must_use]
    pub fn is_scrollable_type(&self, type_name: &str) -> bool {
        self.scrollable_types.contains(&type_name.to_ascii_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_is_case_insensitive() {
        let defines = RulesDefines::new().root_type("Dialog");
        assert!(defines.is_root_type("dialog"));
        assert!(defines.is_root_type("DIALOG"));
        assert!(defines.is_root_type("Dialog"));
        assert!(!defines.is_root_type("dialogs"));
    }

    #[test]
    fn only_ascii_letters_fold() {
        let defines = RulesDefines::new().root_type("ΑΒΓ").scrollable_type("ListΣ");
        assert!(defines.is_root_type("ΑΒΓ"));
        assert!(!defines.is_root_type("αβγ"));
        assert!(defines.is_scrollable_type("LISTΣ"));
        assert!(!defines.is_scrollable_type("listσ"));
    }

    #[test]
    fn sets_are_independent() {
        let defines = RulesDefines::new()
            .root_type("Dialog")
            .scroll_ignore_type("Swiper")
            .scrollable_type("List");
        assert!(!defines.is_scroll_ignore_type("dialog"));
        assert!(defines.is_scroll_ignore_type("swiper"));
        assert!(!defines.is_scrollable_type("swiper"));
        assert!(defines.is_scrollable_type("LIST"));
        assert!(!defines.is_root_type("list"));
    }

    #[test]
    fn empty_matches_nothing() {
        let defines = RulesDefines::new();
        assert!(!defines.is_root_type(""));
        assert!(!defines.is_scrollable_type("list"));
    }
}
