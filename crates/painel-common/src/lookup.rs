use std::collections::HashMap;

/// Column-name lookup that prefers an exact match and falls back to a
/// trimmed, case-insensitive one.
#[derive(Debug, Clone)]
pub struct CaseInsensitiveSet {
    exact: HashMap<String, String>,
    folded: HashMap<String, String>,
}

impl CaseInsensitiveSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut exact = HashMap::new();
        let mut folded = HashMap::new();
        for name in names {
            let name = name.as_ref();
            exact
                .entry(name.to_string())
                .or_insert_with(|| name.to_string());
            folded
                .entry(fold(name))
                .or_insert_with(|| name.to_string());
        }
        Self { exact, folded }
    }

    /// Returns the stored spelling of `name`, if any column matches.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.exact
            .get(name)
            .or_else(|| self.folded.get(&fold(name)))
            .map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

fn fold(name: &str) -> String {
    name.trim().to_lowercase()
}
