//! Token filter implementations for token transformation.
//!
//! Filters transform the token stream produced by a tokenizer. The
//! normalizer chains a [`stop::StopFilter`] with a
//! [`reduce::ReductionFilter`] that stems or lemmatizes.
//!
//! # Available Filters
//!
//! - [`stop::StopFilter`] - Removes (or marks) stop words
//! - [`reduce::ReductionFilter`] - Reduces words to their stem or dictionary form
//!
//! # Filter Chaining
//!
//! ```text
//! Tokenizer → Stop Words → Lemmatizer | Stemmer
//! ```
//!
//! # Examples
//!
//! ```
//! use textprep::analysis::token::Token;
//! use textprep::analysis::token_filter::Filter;
//! use textprep::analysis::token_filter::stop::StopFilter;
//!
//! let filter = StopFilter::new();
//! let tokens = vec![Token::new("the", 0), Token::new("cat", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].text, "cat");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// The trait requires `Send + Sync` so filters can be shared between
/// independent pipeline invocations.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod lemma;
pub mod reduce;
pub mod stem;
pub mod stop;

pub use lemma::{EnglishLemmatizer, Lemmatizer};
pub use reduce::{Reducer, ReductionFilter};
pub use stem::{PorterStemmer, Stemmer};
pub use stop::StopFilter;
