//! Token-level normalization.
//!
//! The [`Normalizer`] tokenizes preprocessed text, optionally drops stop
//! words, and reduces every token with a lemmatizer or a stemmer. Every
//! capability is injected, so tests and callers can swap any of them.
//!
//! # Examples
//!
//! ```
//! use textprep::normalize::{NormalizationMode, Normalized, Normalizer};
//!
//! let normalizer = Normalizer::new();
//! let tokens = normalizer.tokenize_and_filter("the cats are running", true).unwrap();
//! assert_eq!(tokens, vec!["cats", "running"]);
//!
//! let stems = normalizer.normalize(&tokens, NormalizationMode::Stem, true).unwrap();
//! assert_eq!(stems, Normalized::Text("cat run".to_string()));
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::token::{IntoTokenStream, Token, TokenStream};
use crate::analysis::token_filter::lemma::{EnglishLemmatizer, Lemmatizer};
use crate::analysis::token_filter::reduce::ReductionFilter;
use crate::analysis::token_filter::stem::{PorterStemmer, Stemmer};
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::{Tokenizer, UnicodeWordTokenizer};
use crate::error::{Result, TextprepError};

/// The morphological reduction applied by [`Normalizer::normalize`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum NormalizationMode {
    /// Map each token to its dictionary form.
    #[default]
    Lemmatize,
    /// Strip each token down to its stem.
    Stem,
}

impl NormalizationMode {
    /// The configuration name of this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            NormalizationMode::Lemmatize => "lemmatize",
            NormalizationMode::Stem => "stem",
        }
    }
}

impl FromStr for NormalizationMode {
    type Err = TextprepError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "lemmatize" => Ok(NormalizationMode::Lemmatize),
            "stem" => Ok(NormalizationMode::Stem),
            other => Err(TextprepError::unsupported_mode(format!(
                "mode must be lemmatize or stem; got {other:?}"
            ))),
        }
    }
}

impl TryFrom<String> for NormalizationMode {
    type Error = TextprepError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<NormalizationMode> for String {
    fn from(mode: NormalizationMode) -> Self {
        mode.as_str().to_string()
    }
}

impl fmt::Display for NormalizationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of a normalization: either the token sequence or the tokens
/// re-joined with single spaces.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Normalized {
    Tokens(Vec<String>),
    Text(String),
}

impl Normalized {
    /// Wrap `tokens`, joining them when `rejoin` is set.
    pub fn from_tokens(tokens: Vec<String>, rejoin: bool) -> Self {
        if rejoin {
            Normalized::Text(tokens.join(" "))
        } else {
            Normalized::Tokens(tokens)
        }
    }

    /// The token sequence, if this output was not re-joined.
    pub fn as_tokens(&self) -> Option<&[String]> {
        match self {
            Normalized::Tokens(tokens) => Some(tokens),
            Normalized::Text(_) => None,
        }
    }

    /// The joined text, if this output was re-joined.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Normalized::Tokens(_) => None,
            Normalized::Text(text) => Some(text),
        }
    }

    /// Convert into a single string, joining tokens with single spaces.
    pub fn into_text(self) -> String {
        match self {
            Normalized::Tokens(tokens) => tokens.join(" "),
            Normalized::Text(text) => text,
        }
    }
}

impl fmt::Display for Normalized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Normalized::Tokens(tokens) => write!(f, "{}", tokens.join(" ")),
            Normalized::Text(text) => f.write_str(text),
        }
    }
}

/// Tokenizes, filters and morphologically reduces text.
#[derive(Clone)]
pub struct Normalizer {
    tokenizer: Arc<dyn Tokenizer>,
    stop_filter: StopFilter,
    stemmer: Arc<dyn Stemmer>,
    lemmatizer: Arc<dyn Lemmatizer>,
}

impl fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Normalizer")
            .field("tokenizer", &self.tokenizer.name())
            .field("stop_words", &self.stop_filter.len())
            .field("stemmer", &self.stemmer.name())
            .field("lemmatizer", &self.lemmatizer.name())
            .finish()
    }
}

impl Normalizer {
    /// Create a normalizer with the English defaults: Unicode word
    /// tokenizer, English stop words, Porter stemmer, English lemmatizer.
    pub fn new() -> Self {
        Normalizer {
            tokenizer: Arc::new(UnicodeWordTokenizer::new()),
            stop_filter: StopFilter::new(),
            stemmer: Arc::new(PorterStemmer::new()),
            lemmatizer: Arc::new(EnglishLemmatizer::new()),
        }
    }

    /// Use a different tokenizer.
    pub fn with_tokenizer(mut self, tokenizer: Arc<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Use a different stop word set.
    pub fn with_stop_filter(mut self, stop_filter: StopFilter) -> Self {
        self.stop_filter = stop_filter;
        self
    }

    /// Use a different stemmer.
    pub fn with_stemmer(mut self, stemmer: Arc<dyn Stemmer>) -> Self {
        self.stemmer = stemmer;
        self
    }

    /// Use a different lemmatizer.
    pub fn with_lemmatizer(mut self, lemmatizer: Arc<dyn Lemmatizer>) -> Self {
        self.lemmatizer = lemmatizer;
        self
    }

    /// Get the tokenizer used by this normalizer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the stop filter used by this normalizer.
    pub fn stop_filter(&self) -> &StopFilter {
        &self.stop_filter
    }

    /// Tokenize `text` and, if requested, drop stop words.
    ///
    /// Filtering is stable: surviving tokens keep their relative order.
    pub fn tokenize_and_filter(&self, text: &str, remove_stopwords: bool) -> Result<Vec<String>> {
        let mut tokens: TokenStream = self.tokenizer.tokenize(text)?;
        if remove_stopwords {
            tokens = self.stop_filter.filter(tokens)?;
        }

        let tokens: Vec<String> = tokens
            .filter(|token| !(remove_stopwords && token.is_stopped()))
            .map(|token| token.text)
            .collect();
        debug!(
            "{} produced {} tokens (stop words removed: {})",
            self.tokenizer.name(),
            tokens.len(),
            remove_stopwords
        );

        Ok(tokens)
    }

    /// Reduce every token with the reducer selected by `mode`.
    ///
    /// The output has exactly one token per input token, in input order.
    pub fn reduce(&self, tokens: &[String], mode: NormalizationMode) -> Result<Vec<String>> {
        let filter = ReductionFilter::new(mode, &self.stemmer, &self.lemmatizer);

        let stream = tokens.to_vec().into_token_stream();
        let reduced: Vec<String> = filter.filter(stream)?.map(|token: Token| token.text).collect();
        debug!("{} reduced {} tokens", filter.name(), reduced.len());

        Ok(reduced)
    }

    /// Reduce `tokens` with `mode`, optionally re-joining the result.
    pub fn normalize(
        &self,
        tokens: &[String],
        mode: NormalizationMode,
        rejoin: bool,
    ) -> Result<Normalized> {
        let reduced = self.reduce(tokens, mode)?;
        Ok(Normalized::from_tokens(reduced, rejoin))
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}
