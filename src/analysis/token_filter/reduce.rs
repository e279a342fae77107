//! Morphological reduction filter.

use std::fmt;
use std::sync::Arc;

use super::Filter;
use super::lemma::{EnglishLemmatizer, Lemmatizer};
use super::stem::{PorterStemmer, Stemmer};
use crate::analysis::token::TokenStream;
use crate::error::Result;
use crate::normalize::NormalizationMode;

/// The reducer a [`ReductionFilter`] applies to each token.
#[derive(Clone)]
pub enum Reducer {
    Stem(Arc<dyn Stemmer>),
    Lemmatize(Arc<dyn Lemmatizer>),
}

impl Reducer {
    /// Reduce a single word.
    pub fn reduce(&self, word: &str) -> String {
        match self {
            Reducer::Stem(stemmer) => stemmer.stem(word),
            Reducer::Lemmatize(lemmatizer) => lemmatizer.lemmatize(word),
        }
    }

    /// The normalization mode this reducer implements.
    pub fn mode(&self) -> NormalizationMode {
        match self {
            Reducer::Stem(_) => NormalizationMode::Stem,
            Reducer::Lemmatize(_) => NormalizationMode::Lemmatize,
        }
    }

    /// Name of the underlying stemmer or lemmatizer.
    pub fn name(&self) -> &'static str {
        match self {
            Reducer::Stem(stemmer) => stemmer.name(),
            Reducer::Lemmatize(lemmatizer) => lemmatizer.name(),
        }
    }
}

impl fmt::Debug for Reducer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.mode(), self.name())
    }
}

/// Filter that replaces every token with its stem or lemma.
///
/// Produces exactly one output token per input token, in order. Tokens
/// already marked as stopped pass through unchanged.
///
/// ```
/// use textprep::analysis::token::Token;
/// use textprep::analysis::token_filter::Filter;
/// use textprep::analysis::token_filter::reduce::ReductionFilter;
/// use textprep::normalize::NormalizationMode;
///
/// let filter = ReductionFilter::english(NormalizationMode::Stem);
/// let tokens = vec![Token::new("running", 0), Token::new("geese", 1)];
/// let reduced: Vec<_> = filter
///     .filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .map(|t| t.text)
///     .collect();
///
/// assert_eq!(reduced, vec!["run", "gees"]);
/// ```
#[derive(Clone, Debug)]
pub struct ReductionFilter {
    reducer: Reducer,
}

impl ReductionFilter {
    /// Create a filter for `mode`, picking the matching capability.
    pub fn new(
        mode: NormalizationMode,
        stemmer: &Arc<dyn Stemmer>,
        lemmatizer: &Arc<dyn Lemmatizer>,
    ) -> Self {
        let reducer = match mode {
            NormalizationMode::Stem => Reducer::Stem(Arc::clone(stemmer)),
            NormalizationMode::Lemmatize => Reducer::Lemmatize(Arc::clone(lemmatizer)),
        };
        ReductionFilter { reducer }
    }

    /// Create a filter for `mode` backed by the Porter stemmer or the
    /// English lemmatizer.
    pub fn english(mode: NormalizationMode) -> Self {
        let reducer = match mode {
            NormalizationMode::Stem => Reducer::Stem(Arc::new(PorterStemmer::new())),
            NormalizationMode::Lemmatize => {
                Reducer::Lemmatize(Arc::new(EnglishLemmatizer::new()))
            }
        };
        ReductionFilter { reducer }
    }

    /// Get the reducer of this filter.
    pub fn reducer(&self) -> &Reducer {
        &self.reducer
    }
}

impl Filter for ReductionFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let reduced: Vec<_> = tokens
            .map(|token| {
                if token.is_stopped() {
                    token
                } else {
                    let text = self.reducer.reduce(&token.text);
                    token.with_text(text)
                }
            })
            .collect();

        Ok(Box::new(reduced.into_iter()))
    }

    fn name(&self) -> &'static str {
        self.reducer.mode().as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    struct UpperStemmer;

    impl Stemmer for UpperStemmer {
        fn stem(&self, word: &str) -> String {
            word.to_uppercase()
        }

        fn name(&self) -> &'static str {
            "upper"
        }
    }

    fn texts(filter: &ReductionFilter, tokens: Vec<Token>) -> Vec<String> {
        filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_modes_pick_their_capability() {
        let tokens = || {
            vec![
                Token::new("children", 0),
                Token::new("running", 1),
                Token::new("ponies", 2),
            ]
        };

        let stem = ReductionFilter::english(NormalizationMode::Stem);
        assert_eq!(texts(&stem, tokens()), vec!["children", "run", "poni"]);

        let lemma = ReductionFilter::english(NormalizationMode::Lemmatize);
        assert_eq!(texts(&lemma, tokens()), vec!["child", "running", "pony"]);
    }

    #[test]
    fn test_stopped_tokens_pass_through() {
        let filter = ReductionFilter::english(NormalizationMode::Lemmatize);
        let tokens = vec![Token::new("cats", 0), Token::new("boxes", 1).stop()];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].text, "cat");
        assert_eq!(result[1].text, "boxes");
        assert!(result[1].is_stopped());
    }

    #[test]
    fn test_injected_capabilities() {
        let stemmer: Arc<dyn Stemmer> = Arc::new(UpperStemmer);
        let lemmatizer: Arc<dyn Lemmatizer> = Arc::new(EnglishLemmatizer::new());

        let filter = ReductionFilter::new(NormalizationMode::Stem, &stemmer, &lemmatizer);
        assert_eq!(
            texts(&filter, vec![Token::new("a", 0), Token::new("b", 1)]),
            vec!["A", "B"]
        );
        assert_eq!(format!("{filter:?}"), "ReductionFilter { reducer: stem(upper) }");

        let filter = ReductionFilter::new(NormalizationMode::Lemmatize, &stemmer, &lemmatizer);
        assert_eq!(filter.reducer().mode(), NormalizationMode::Lemmatize);
        assert_eq!(filter.reducer().name(), "english");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(ReductionFilter::english(NormalizationMode::Stem).name(), "stem");
        assert_eq!(
            ReductionFilter::english(NormalizationMode::Lemmatize).name(),
            "lemmatize"
        );
    }
}
