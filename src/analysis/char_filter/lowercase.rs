//! Lowercase char filter implementation.

use super::CharFilter;
use crate::error::Result;

/// A char filter that folds the whole text to lower case.
///
/// Uses Unicode default case mapping, which does not depend on the locale.
#[derive(Clone, Debug, Default)]
pub struct LowercaseCharFilter;

impl LowercaseCharFilter {
    /// Create a new lowercase char filter.
    pub fn new() -> Self {
        LowercaseCharFilter
    }
}

impl CharFilter for LowercaseCharFilter {
    fn filter(&self, input: &str) -> Result<String> {
        if input.is_ascii() {
            Ok(input.to_ascii_lowercase())
        } else {
            Ok(input.to_lowercase())
        }
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
