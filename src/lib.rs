//! # textprep
//!
//! Text preprocessing and normalization for NLP pipelines.
//!
//! ## Features
//!
//! - Lower-casing, punctuation stripping and separator handling
//! - Numeral removal or conversion to English words
//! - Unicode word tokenization with stop word removal
//! - Rule-based lemmatization and Porter stemming
//! - Pluggable tokenizers, stemmers, lemmatizers and number spellers
//!
//! ## Example
//!
//! ```
//! use textprep::prelude::*;
//!
//! let pipeline = TextPipeline::new().unwrap();
//! let config = PipelineConfig::default()
//!     .with_normalize(Some(NormalizationMode::Stem))
//!     .with_rejoin(true);
//!
//! let output = pipeline.run("Running quickly!", &config).unwrap();
//! assert_eq!(output, Normalized::Text("run quickli".to_string()));
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod preprocess;

pub mod prelude {
    pub use crate::analysis::{CharFilter, NumberSpeller, Tokenizer};
    pub use crate::analysis::token_filter::{Lemmatizer, Stemmer, StopFilter};
    pub use crate::error::{Result, TextprepError};
    pub use crate::normalize::{NormalizationMode, Normalized, Normalizer};
    pub use crate::pipeline::{PipelineConfig, TextPipeline};
    pub use crate::preprocess::{DigitPolicy, PreprocessOptions, Preprocessor};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
