//! Char filters for purely numeric words.
//!
//! A numeric word is a whitespace-delimited unit consisting only of ASCII
//! digits. Digits embedded in a longer unit (`covid19`, `42nd`) are never
//! touched by these filters. Decimal digits from other scripts (`٣`, `३`)
//! do not make a numeric word either, since the English speller only reads
//! `0` to `9`; such words pass through both filters unchanged.

use std::sync::Arc;

use super::{CharFilter, is_numeral};
use crate::analysis::number::NumberSpeller;
use crate::error::Result;

/// Deletes numeric words.
///
/// The whitespace on both sides of a deleted word collapses into a single
/// space, or disappears entirely at the start or end of the text. All other
/// whitespace is left exactly as it was.
///
/// ```
/// use textprep::analysis::char_filter::CharFilter;
/// use textprep::analysis::char_filter::numeric::NumericWordRemovalCharFilter;
///
/// let filter = NumericWordRemovalCharFilter::new();
/// assert_eq!(filter.filter("i have 3 cats").unwrap(), "i have cats");
/// assert_eq!(filter.filter("covid19 in 2020").unwrap(), "covid19 in");
/// ```
#[derive(Clone, Debug, Default)]
pub struct NumericWordRemovalCharFilter;

impl NumericWordRemovalCharFilter {
    /// Create a new numeric word removal filter.
    pub fn new() -> Self {
        NumericWordRemovalCharFilter
    }
}

/// Splits text into alternating whitespace and non-whitespace runs.
fn runs(text: &str) -> impl Iterator<Item = (bool, &str)> {
    let mut rest = text;
    std::iter::from_fn(move || {
        let first = rest.chars().next()?;
        let is_space = first.is_whitespace();
        let end = rest
            .char_indices()
            .find(|(_, c)| c.is_whitespace() != is_space)
            .map_or(rest.len(), |(i, _)| i);
        let (run, tail) = rest.split_at(end);
        rest = tail;
        Some((is_space, run))
    })
}

impl CharFilter for NumericWordRemovalCharFilter {
    fn filter(&self, input: &str) -> Result<String> {
        let mut output = String::with_capacity(input.len());
        let mut gap = String::new();
        let mut dropped = false;
        let mut kept_any = false;

        for (is_space, run) in runs(input) {
            if is_space {
                gap.push_str(run);
            } else if is_numeral(run) {
                dropped = true;
            } else {
                if dropped {
                    if kept_any {
                        output.push(' ');
                    }
                } else {
                    output.push_str(&gap);
                }
                output.push_str(run);
                gap.clear();
                dropped = false;
                kept_any = true;
            }
        }

        if !dropped {
            output.push_str(&gap);
        }

        Ok(output)
    }

    fn name(&self) -> &'static str {
        "numeric_word_removal"
    }
}

/// Replaces numeric words with their spelled-out cardinal form.
///
/// The text is split on whitespace and re-joined with single spaces, so
/// runs of whitespace collapse as a side effect.
#[derive(Clone)]
pub struct NumberSpellingCharFilter {
    speller: Arc<dyn NumberSpeller>,
}

impl std::fmt::Debug for NumberSpellingCharFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NumberSpellingCharFilter")
            .field("speller", &self.speller.name())
            .finish()
    }
}

impl NumberSpellingCharFilter {
    /// Create a filter backed by the given speller.
    pub fn new(speller: Arc<dyn NumberSpeller>) -> Self {
        NumberSpellingCharFilter { speller }
    }
}

impl CharFilter for NumberSpellingCharFilter {
    fn filter(&self, input: &str) -> Result<String> {
        let words = input
            .split_whitespace()
            .map(|word| {
                if is_numeral(word) {
                    self.speller.number_to_words(word)
                } else {
                    Ok(word.to_string())
                }
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(words.join(" "))
    }

    fn name(&self) -> &'static str {
        "number_spelling"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::number::EnglishNumberSpeller;

    fn remove(text: &str) -> String {
        NumericWordRemovalCharFilter::new().filter(text).unwrap()
    }

    fn convert(text: &str) -> String {
        NumberSpellingCharFilter::new(Arc::new(EnglishNumberSpeller::new()))
            .filter(text)
            .unwrap()
    }

    #[test]
    fn test_runs() {
        let collected: Vec<_> = runs(" ab  c").collect();
        assert_eq!(collected, vec![(true, " "), (false, "ab"), (true, "  "), (false, "c")]);
    }

    #[test]
    fn test_removal_collapses_surrounding_whitespace() {
        assert_eq!(remove("i have 3 cats"), "i have cats");
        assert_eq!(remove("i have \t 3\n\n cats"), "i have cats");
        assert_eq!(remove("a 1 2 b"), "a b");
    }

    #[test]
    fn test_removal_at_text_edges() {
        assert_eq!(remove("3 cats"), "cats");
        assert_eq!(remove("cats 3"), "cats");
        assert_eq!(remove("  12  cats  34  "), "cats");
        assert_eq!(remove("42"), "");
        assert_eq!(remove("1 2 3"), "");
    }

    #[test]
    fn test_removal_keeps_embedded_digits_and_other_whitespace() {
        assert_eq!(remove("covid19 cases"), "covid19 cases");
        assert_eq!(remove("the 42nd  street"), "the 42nd  street");
        assert_eq!(remove("  leading and trailing  "), "  leading and trailing  ");
        assert_eq!(remove("4.5 stars"), "4.5 stars");
        assert_eq!(remove(""), "");
    }

    #[test]
    fn test_number_spelling() {
        assert_eq!(convert("item 42 co"), "item forty two co");
        assert_eq!(convert("covid19 in 2020"), "covid19 in two thousand and twenty");
        assert_eq!(convert("  no   numbers "), "no numbers");
        assert_eq!(convert(""), "");
    }

    #[test]
    fn test_non_ascii_digits_are_not_numerals() {
        assert_eq!(remove("٣ cats and ३ dogs"), "٣ cats and ३ dogs");
        assert_eq!(convert("٣ cats 3 dogs"), "٣ cats three dogs");
    }

    #[test]
    fn test_filter_names() {
        assert_eq!(NumericWordRemovalCharFilter::new().name(), "numeric_word_removal");
        let filter = NumberSpellingCharFilter::new(Arc::new(EnglishNumberSpeller::new()));
        assert_eq!(filter.name(), "number_spelling");
    }
}
