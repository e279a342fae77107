//! Character-level text preprocessing.
//!
//! The [`Preprocessor`] turns raw text into a cleaned string ready for
//! tokenization by running an ordered chain of char filters:
//!
//! ```text
//! lower-case → separators to spaces → delete punctuation → digit policy
//! ```
//!
//! Separators (`-`, `/`, `_`, `&`) are mapped to spaces before the rest of
//! the punctuation is deleted, so `state-of-the-art` becomes
//! `state of the art` rather than `stateoftheart`.
//!
//! # Examples
//!
//! ```
//! use textprep::preprocess::{DigitPolicy, PreprocessOptions, Preprocessor};
//!
//! let preprocessor = Preprocessor::new().unwrap();
//! let options = PreprocessOptions::default().with_digits(DigitPolicy::Convert);
//!
//! let text = preprocessor.preprocess("Item-42 & Co.", &options).unwrap();
//! assert_eq!(text, "item forty two co");
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::analysis::char_filter::{
    CharFilter, LowercaseCharFilter, MappingCharFilter, NumberSpellingCharFilter,
    NumericWordRemovalCharFilter, PatternReplaceCharFilter,
};
use crate::analysis::number::{EnglishNumberSpeller, NumberSpeller};
use crate::error::{Result, TextprepError};

/// How purely numeric words are handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DigitPolicy {
    /// Leave numerals as they are.
    #[default]
    None,
    /// Delete numerals, collapsing the whitespace around them.
    Remove,
    /// Replace numerals with their spelled-out cardinal form.
    Convert,
}

impl DigitPolicy {
    /// The configuration name of this policy.
    pub fn as_str(&self) -> &'static str {
        match self {
            DigitPolicy::None => "none",
            DigitPolicy::Remove => "remove",
            DigitPolicy::Convert => "convert",
        }
    }
}

impl FromStr for DigitPolicy {
    type Err = TextprepError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "none" => Ok(DigitPolicy::None),
            "remove" => Ok(DigitPolicy::Remove),
            "convert" => Ok(DigitPolicy::Convert),
            other => Err(TextprepError::invalid_option(format!(
                "digits must be one of none, remove, convert; got {other:?}"
            ))),
        }
    }
}

impl TryFrom<String> for DigitPolicy {
    type Error = TextprepError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<DigitPolicy> for String {
    fn from(policy: DigitPolicy) -> Self {
        policy.as_str().to_string()
    }
}

impl fmt::Display for DigitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for a single [`Preprocessor::preprocess`] call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessOptions {
    /// Fold the text to lower case.
    pub lower: bool,
    /// Map separators to spaces, then delete the remaining punctuation.
    pub remove_punctuation: bool,
    /// What to do with purely numeric words.
    pub digits: DigitPolicy,
}

impl Default for PreprocessOptions {
    fn default() -> Self {
        PreprocessOptions {
            lower: true,
            remove_punctuation: true,
            digits: DigitPolicy::None,
        }
    }
}

impl PreprocessOptions {
    /// Set whether to lower-case the text.
    pub fn with_lower(mut self, lower: bool) -> Self {
        self.lower = lower;
        self
    }

    /// Set whether to strip punctuation.
    pub fn with_remove_punctuation(mut self, remove: bool) -> Self {
        self.remove_punctuation = remove;
        self
    }

    /// Set the digit policy.
    pub fn with_digits(mut self, digits: DigitPolicy) -> Self {
        self.digits = digits;
        self
    }
}

/// Character-level normalizer.
///
/// All char filters are built once at construction; each call picks the
/// ones its options enable. The preprocessor holds no per-call state and can
/// be shared across threads.
#[derive(Clone, Debug)]
pub struct Preprocessor {
    lowercase: LowercaseCharFilter,
    separators: MappingCharFilter,
    punctuation: PatternReplaceCharFilter,
    digit_removal: NumericWordRemovalCharFilter,
    digit_spelling: NumberSpellingCharFilter,
}

impl Preprocessor {
    /// Create a preprocessor that spells numbers in English.
    pub fn new() -> Result<Self> {
        Self::with_speller(Arc::new(EnglishNumberSpeller::new()))
    }

    /// Create a preprocessor with a custom number speller.
    pub fn with_speller(speller: Arc<dyn NumberSpeller>) -> Result<Self> {
        Ok(Preprocessor {
            lowercase: LowercaseCharFilter::new(),
            separators: MappingCharFilter::separators()?,
            punctuation: PatternReplaceCharFilter::punctuation()?,
            digit_removal: NumericWordRemovalCharFilter::new(),
            digit_spelling: NumberSpellingCharFilter::new(speller),
        })
    }

    /// The ordered char filter chain enabled by `options`.
    pub fn char_filters(&self, options: &PreprocessOptions) -> Vec<&dyn CharFilter> {
        let mut chain: Vec<&dyn CharFilter> = Vec::with_capacity(4);

        if options.lower {
            chain.push(&self.lowercase);
        }
        if options.remove_punctuation {
            chain.push(&self.separators);
            chain.push(&self.punctuation);
        }
        match options.digits {
            DigitPolicy::None => {}
            DigitPolicy::Remove => chain.push(&self.digit_removal),
            DigitPolicy::Convert => chain.push(&self.digit_spelling),
        }

        chain
    }

    /// Preprocess `text` according to `options`.
    pub fn preprocess(&self, text: &str, options: &PreprocessOptions) -> Result<String> {
        let mut filtered = text.to_string();

        for char_filter in self.char_filters(options) {
            filtered = char_filter.filter(&filtered)?;
            trace!("{}: {:?}", char_filter.name(), filtered);
        }

        Ok(filtered)
    }
}
