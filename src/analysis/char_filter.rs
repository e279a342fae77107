//! Char filter implementations for text normalization.
//!
//! Char filters rewrite the raw text before it reaches the tokenizer. The
//! preprocessor is an ordered chain of them: lower-casing, separator
//! mapping, punctuation deletion and digit handling.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseCharFilter`] - Locale-independent lower-casing
//! - [`mapping::MappingCharFilter`] - Literal string replacement (separators to spaces)
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement (punctuation deletion)
//! - [`numeric::NumericWordRemovalCharFilter`] - Drops purely numeric words
//! - [`numeric::NumberSpellingCharFilter`] - Spells out purely numeric words
//!
//! # Examples
//!
//! ```
//! use textprep::analysis::char_filter::CharFilter;
//! use textprep::analysis::char_filter::mapping::MappingCharFilter;
//!
//! let filter = MappingCharFilter::separators().unwrap();
//! assert_eq!(filter.filter("state-of-the-art").unwrap(), "state of the art");
//! ```

use crate::error::Result;

/// Characters that separate words and are mapped to a single space each.
pub const SEPARATORS: [char; 4] = ['-', '/', '_', '&'];

/// The ASCII punctuation set. Everything here except [`SEPARATORS`] is
/// deleted when punctuation removal is enabled.
pub const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> Result<String>;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

/// Returns true for whitespace-delimited units made only of ASCII digits.
pub(crate) fn is_numeral(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_digit())
}

pub mod lowercase;
pub mod mapping;
pub mod numeric;
pub mod pattern_replace;

pub use lowercase::LowercaseCharFilter;
pub use mapping::MappingCharFilter;
pub use numeric::{NumberSpellingCharFilter, NumericWordRemovalCharFilter};
pub use pattern_replace::PatternReplaceCharFilter;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punctuation_set_contains_separators() {
        for separator in SEPARATORS {
            assert!(PUNCTUATION.contains(separator));
        }
        assert_eq!(PUNCTUATION.len(), 32);
        assert!(PUNCTUATION.chars().all(|c| c.is_ascii_punctuation()));
    }

    #[test]
    fn test_is_numeral() {
        assert!(is_numeral("42"));
        assert!(is_numeral("007"));
        assert!(!is_numeral(""));
        assert!(!is_numeral("covid19"));
        assert!(!is_numeral("4.5"));
    }
}
