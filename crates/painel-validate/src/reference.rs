//! Reference key sets built from the EDUCAPI and COMERCIAL tables.

use std::collections::HashSet;

use painel_common::{CaseInsensitiveSet, string_values};
use polars::prelude::DataFrame;
use tracing::{debug, warn};

/// Trimmed, non-empty keys of one reference table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceSet {
    keys: HashSet<String>,
}

impl ReferenceSet {
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keys = keys
            .into_iter()
            .map(|key| key.as_ref().trim().to_string())
            .filter(|key| !key.is_empty())
            .collect();
        Self { keys }
    }

    /// Collects the keys of `key_column`.
    ///
    /// An absent table, or one without the key column, gives an empty set.
    pub fn from_frame(name: &str, frame: Option<&DataFrame>, key_column: &str) -> Self {
        let Some(frame) = frame else {
            debug!(reference = name, "no reference table supplied");
            return Self::default();
        };
        if frame.height() == 0 {
            return Self::default();
        }
        let lookup = CaseInsensitiveSet::new(
            frame
                .get_column_names()
                .into_iter()
                .map(|name| name.as_str()),
        );
        let Some(column) = lookup.get(key_column) else {
            warn!(
                reference = name,
                key_column, "reference table has no key column; treating it as empty"
            );
            return Self::default();
        };
        match string_values(frame, column) {
            Ok(values) => Self::from_keys(values.into_iter().flatten()),
            Err(error) => {
                warn!(reference = name, %error, "could not read reference keys");
                Self::default()
            }
        }
    }

    /// `key` must already be trimmed; matching is exact and case-sensitive.
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Both reference sets, built once before the row pass.
#[derive(Debug, Clone, Default)]
pub struct ReferenceSets {
    pub educapi: ReferenceSet,
    pub comercial: ReferenceSet,
}

impl ReferenceSets {
    pub fn new(educapi: ReferenceSet, comercial: ReferenceSet) -> Self {
        Self { educapi, comercial }
    }

    pub fn from_frames(
        educapi: Option<&DataFrame>,
        comercial: Option<&DataFrame>,
        key_column: &str,
    ) -> Self {
        Self {
            educapi: ReferenceSet::from_frame("EDUCAPI", educapi, key_column),
            comercial: ReferenceSet::from_frame("COMERCIAL", comercial, key_column),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;

    #[test]
    fn keys_are_trimmed_and_blanks_dropped() {
        let set = ReferenceSet::from_keys([" 123 ", "", "   ", "456"]);
        assert_eq!(set.len(), 2);
        assert!(set.contains("123"));
        assert!(!set.contains(""));
        assert!(!set.contains(" 123 "));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let set = ReferenceSet::from_keys(["abc"]);
        assert!(!set.contains("ABC"));
    }

    #[test]
    fn frame_without_key_column_is_empty() {
        let frame = df! { "NOME" => &["Ana"] }.unwrap();
        assert!(ReferenceSet::from_frame("EDUCAPI", Some(&frame), "E").is_empty());
        assert!(ReferenceSet::from_frame("EDUCAPI", None, "E").is_empty());
    }

    #[test]
    fn frame_keys_skip_nulls() {
        let frame = df! { "e" => &[Some(" 1 "), None, Some("2")] }.unwrap();
        let set = ReferenceSet::from_frame("COMERCIAL", Some(&frame), "E");
        assert_eq!(set.len(), 2);
        assert!(set.contains("1"));
    }
}
