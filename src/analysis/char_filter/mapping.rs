//! Mapping char filter implementation.

use std::collections::HashMap;

use aho_corasick::{AhoCorasick, MatchKind};

use super::{CharFilter, SEPARATORS};
use crate::error::{Result, TextprepError};

/// A char filter that replaces literal strings using a mapping table.
///
/// All keys are matched in a single leftmost-longest pass, so replacement
/// output is never re-scanned.
#[derive(Clone, Debug)]
pub struct MappingCharFilter {
    ac: AhoCorasick,
    replacements: Vec<String>,
}

impl MappingCharFilter {
    /// Create a new mapping char filter.
    pub fn new(mapping: HashMap<String, String>) -> Result<Self> {
        let (keys, replacements): (Vec<String>, Vec<String>) = mapping.into_iter().unzip();

        let ac = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&keys)
            .map_err(|e| TextprepError::analysis(format!("invalid mapping table: {e}")))?;

        Ok(Self { ac, replacements })
    }

    /// Create the filter that turns each word separator into one space.
    pub fn separators() -> Result<Self> {
        let mapping = SEPARATORS
            .iter()
            .map(|c| (c.to_string(), " ".to_string()))
            .collect();
        Self::new(mapping)
    }
}

impl CharFilter for MappingCharFilter {
    fn filter(&self, input: &str) -> Result<String> {
        let mut output = String::with_capacity(input.len());
        let mut last_match_end = 0;

        for m in self.ac.find_iter(input) {
            output.push_str(&input[last_match_end..m.start()]);
            output.push_str(&self.replacements[m.pattern().as_usize()]);
            last_match_end = m.end();
        }

        output.push_str(&input[last_match_end..]);

        Ok(output)
    }

    fn name(&self) -> &'static str {
        "mapping"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_char_filter() {
        let mut mapping = HashMap::new();
        mapping.insert("ph".to_string(), "f".to_string());
        mapping.insert("qu".to_string(), "k".to_string());

        let filter = MappingCharFilter::new(mapping).unwrap();
        assert_eq!(filter.filter("phone queue").unwrap(), "fone keue");
    }

    #[test]
    fn test_mapping_overlap() {
        let mut mapping = HashMap::new();
        mapping.insert("ab".to_string(), "1".to_string());
        mapping.insert("abc".to_string(), "2".to_string());
        let filter = MappingCharFilter::new(mapping).unwrap();

        assert_eq!(filter.filter("abc").unwrap(), "2");
    }

    #[test]
    fn test_separators_become_single_spaces() {
        let filter = MappingCharFilter::separators().unwrap();

        assert_eq!(
            filter.filter("state-of-the-art").unwrap(),
            "state of the art"
        );
        assert_eq!(filter.filter("and/or snake_case R&D").unwrap(), "and or snake case R D");
        // One space per separator, even when they are adjacent.
        assert_eq!(filter.filter("a--b").unwrap(), "a  b");
        assert_eq!(filter.filter("no separators.").unwrap(), "no separators.");
    }
}
