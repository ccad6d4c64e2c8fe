//! Header row normalization shared by both load strategies.

use std::collections::{HashMap, HashSet};

/// Makes a raw header row usable as frame column names.
///
/// - a leading byte-order mark is removed
/// - blank names become `Unnamed: <index>`
/// - repeated names get a `.1`, `.2`, … suffix
pub fn normalize_headers<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut used: HashSet<String> = HashSet::new();
    let mut suffixes: HashMap<String, usize> = HashMap::new();
    let mut headers = Vec::new();
    for (idx, name) in raw.into_iter().enumerate() {
        let cleaned = name.as_ref().trim_start_matches('\u{feff}');
        let base = if cleaned.trim().is_empty() {
            format!("Unnamed: {idx}")
        } else {
            cleaned.to_string()
        };
        let mut candidate = base.clone();
        while used.contains(&candidate) {
            let counter = suffixes.entry(base.clone()).or_insert(0);
            *counter += 1;
            candidate = format!("{base}.{counter}");
        }
        used.insert(candidate.clone());
        headers.push(candidate);
    }
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_headers_get_positional_names() {
        assert_eq!(
            normalize_headers(["A", "", "  "]),
            vec!["A", "Unnamed: 1", "Unnamed: 2"]
        );
    }

    #[test]
    fn test_duplicates_are_suffixed() {
        assert_eq!(
            normalize_headers(["CPF", "CPF", "CPF.1", "CPF"]),
            vec!["CPF", "CPF.1", "CPF.1.1", "CPF.2"]
        );
    }

    #[test]
    fn test_bom_is_stripped() {
        assert_eq!(normalize_headers(["\u{feff}NOME", "H"]), vec!["NOME", "H"]);
    }
}
