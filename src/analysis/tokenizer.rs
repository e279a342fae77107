//! Tokenizer implementations for text analysis.
//!
//! Tokenizers split preprocessed text into a stream of tokens. The
//! normalization stage only consumes their output, so any implementation of
//! [`Tokenizer`] can be injected in place of the defaults.
//!
//! # Available Tokenizers
//!
//! - [`unicode_word::UnicodeWordTokenizer`] - Uses Unicode word boundaries (default)
//! - [`whitespace::WhitespaceTokenizer`] - Splits on whitespace characters
//!
//! # Examples
//!
//! ```
//! use textprep::analysis::tokenizer::Tokenizer;
//! use textprep::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello world").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so a single tokenizer handle can be
/// shared by independent pipeline invocations.
///
/// # Examples
///
/// Implementing a custom tokenizer:
///
/// ```
/// use textprep::analysis::token::{Token, TokenStream};
/// use textprep::analysis::tokenizer::Tokenizer;
/// use textprep::error::Result;
///
/// struct CommaTokenizer;
///
/// impl Tokenizer for CommaTokenizer {
///     fn tokenize(&self, text: &str) -> Result<TokenStream> {
///         let tokens: Vec<Token> = text
///             .split(',')
///             .enumerate()
///             .map(|(i, s)| Token::new(s.trim(), i))
///             .collect();
///         Ok(Box::new(tokens.into_iter()))
///     }
///
///     fn name(&self) -> &'static str {
///         "comma"
///     }
/// }
/// ```
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod unicode_word;
pub mod whitespace;

pub use unicode_word::UnicodeWordTokenizer;
pub use whitespace::WhitespaceTokenizer;
