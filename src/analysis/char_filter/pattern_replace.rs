use regex::Regex;

use super::{CharFilter, PUNCTUATION, SEPARATORS};
use crate::error::{Result, TextprepError};

/// A char filter that replaces text matching a regex pattern.
#[derive(Clone, Debug)]
pub struct PatternReplaceCharFilter {
    pattern: Regex,
    replacement: String,
}

impl PatternReplaceCharFilter {
    /// Create a new pattern replace char filter.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)
                .map_err(|e| TextprepError::analysis(format!("invalid pattern: {e}")))?,
            replacement: replacement.to_string(),
        })
    }

    /// Create the filter that deletes punctuation other than the word
    /// separators, which are handled by the separator mapping beforehand.
    pub fn punctuation() -> Result<Self> {
        let class: String = PUNCTUATION
            .chars()
            .filter(|c| !SEPARATORS.contains(c))
            .map(|c| regex::escape(&c.to_string()))
            .collect();
        Self::new(&format!("[{class}]+"), "")
    }
}

impl CharFilter for PatternReplaceCharFilter {
    fn filter(&self, input: &str) -> Result<String> {
        Ok(self
            .pattern
            .replace_all(input, self.replacement.as_str())
            .into_owned())
    }

    fn name(&self) -> &'static str {
        "pattern_replace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_replace() {
        let filter = PatternReplaceCharFilter::new(r"\d+", "NUM").unwrap();
        assert_eq!(filter.filter("Year 2024").unwrap(), "Year NUM");
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(PatternReplaceCharFilter::new("[unclosed", "").is_err());
    }

    #[test]
    fn test_punctuation_deletion() {
        let filter = PatternReplaceCharFilter::punctuation().unwrap();

        assert_eq!(filter.filter("Hello, world!").unwrap(), "Hello world");
        assert_eq!(filter.filter("don't").unwrap(), "dont");
        assert_eq!(
            filter.filter(r##"!"#$%'()*+,.:;<=>?@[\]^`{|}~"##).unwrap(),
            ""
        );
    }

    #[test]
    fn test_punctuation_deletion_keeps_separators() {
        let filter = PatternReplaceCharFilter::punctuation().unwrap();
        assert_eq!(filter.filter("a-b/c_d&e.").unwrap(), "a-b/c_d&e");
    }
}
