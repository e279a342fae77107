//! Cardinal number spelling.
//!
//! The preprocessor's `convert` digit policy hands every purely numeric word
//! to a [`NumberSpeller`]. [`EnglishNumberSpeller`] works directly on the
//! digit string, three digits at a time, so numerals wider than any machine
//! integer are still spelled out.
//!
//! # Examples
//!
//! ```
//! use textprep::analysis::number::{EnglishNumberSpeller, NumberSpeller};
//!
//! let speller = EnglishNumberSpeller::new();
//! assert_eq!(speller.number_to_words("42").unwrap(), "forty two");
//! assert_eq!(speller.number_to_words("101").unwrap(), "one hundred and one");
//! ```

use crate::error::{Result, TextprepError};

/// Trait for converting a decimal numeral into words.
pub trait NumberSpeller: Send + Sync {
    /// Spell out a string of ASCII decimal digits.
    ///
    /// Implementations reject anything that is not a non-empty digit string
    /// with [`TextprepError::InvalidArgument`].
    fn number_to_words(&self, digits: &str) -> Result<String>;

    /// Get the name of this speller.
    fn name(&self) -> &'static str;
}

const ONES: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const SCALES: [&str; 12] = [
    "",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
    "sextillion",
    "septillion",
    "octillion",
    "nonillion",
    "decillion",
];

/// English cardinal speller.
///
/// Output is lower case, words separated by single spaces, without hyphens
/// or commas, using "and" between hundreds and the rest of a group and
/// before a trailing group below one hundred (`1001` is "one thousand and
/// one"). Leading zeros are ignored. Numerals with more digits than the
/// largest scale word (decillion) covers are read digit by digit.
#[derive(Clone, Debug, Default)]
pub struct EnglishNumberSpeller;

impl EnglishNumberSpeller {
    /// Create a new English number speller.
    pub fn new() -> Self {
        EnglishNumberSpeller
    }

    /// Spell a value below one thousand. `value` must be non-zero.
    fn group_words(value: usize, words: &mut Vec<&'static str>) {
        let hundreds = value / 100;
        let rest = value % 100;

        if hundreds > 0 {
            words.push(ONES[hundreds]);
            words.push("hundred");
            if rest > 0 {
                words.push("and");
            }
        }

        if rest >= 20 {
            words.push(TENS[rest / 10]);
            if rest % 10 > 0 {
                words.push(ONES[rest % 10]);
            }
        } else if rest > 0 {
            words.push(ONES[rest]);
        }
    }
}

impl NumberSpeller for EnglishNumberSpeller {
    fn number_to_words(&self, digits: &str) -> Result<String> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TextprepError::invalid_argument(format!(
                "expected a decimal numeral, got {digits:?}"
            )));
        }

        let significant = digits.trim_start_matches('0');
        if significant.is_empty() {
            return Ok(ONES[0].to_string());
        }

        if significant.len() > SCALES.len() * 3 {
            let words: Vec<&str> = significant
                .bytes()
                .map(|b| ONES[(b - b'0') as usize])
                .collect();
            return Ok(words.join(" "));
        }

        // Split into groups of three digits, most significant first.
        let bytes = significant.as_bytes();
        let head = match bytes.len() % 3 {
            0 => 3,
            n => n,
        };
        let mut groups = vec![&bytes[..head]];
        groups.extend(bytes[head..].chunks(3));

        let group_count = groups.len();
        let mut words: Vec<&'static str> = Vec::new();
        for (index, group) in groups.iter().enumerate() {
            let value = group
                .iter()
                .fold(0usize, |acc, b| acc * 10 + (b - b'0') as usize);
            if value == 0 {
                continue;
            }

            let scale = group_count - 1 - index;
            if scale == 0 && value < 100 && !words.is_empty() {
                words.push("and");
            }
            Self::group_words(value, &mut words);
            if scale > 0 {
                words.push(SCALES[scale]);
            }
        }

        Ok(words.join(" "))
    }

    fn name(&self) -> &'static str {
        "english"
    }
}
