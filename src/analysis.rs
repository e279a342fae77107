//! Text analysis building blocks.
//!
//! This module provides the pieces the preprocessing and normalization
//! stages are assembled from:
//!
//! - **Char filters**: rewrite raw text (case, separators, punctuation, digits)
//! - **Tokenizers**: break text into tokens
//! - **Token filters**: remove stop words, stem or lemmatize tokens
//! - **Number spelling**: turn numerals into words
//!
//! # Architecture
//!
//! ```text
//! Text → Char Filters → Tokenizer → Token Stream → Token Filters → Tokens
//! ```

pub mod char_filter;
pub mod number;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use char_filter::CharFilter;
pub use number::{EnglishNumberSpeller, NumberSpeller};
pub use token::{Token, TokenStream};
pub use token_filter::Filter as TokenFilter;
pub use tokenizer::Tokenizer;
