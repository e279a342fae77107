//! End-to-end text pipeline.
//!
//! [`TextPipeline`] chains the two stages:
//!
//! ```text
//! raw text → Preprocessor → Tokenizer → Stop Filter → Lemmatizer | Stemmer
//! ```
//!
//! Each run is configured by a [`PipelineConfig`], which can also be loaded
//! from JSON.
//!
//! # Examples
//!
//! ```
//! use textprep::normalize::Normalized;
//! use textprep::pipeline::{PipelineConfig, TextPipeline};
//!
//! let pipeline = TextPipeline::new().unwrap();
//! let config = PipelineConfig::default().with_rejoin(true);
//!
//! let output = pipeline.run("The children were playing with 3 dogs!", &config).unwrap();
//! assert_eq!(output, Normalized::Text("child playing 3 dog".to_string()));
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TextprepError};
use crate::normalize::{NormalizationMode, Normalized, Normalizer};
use crate::preprocess::{PreprocessOptions, Preprocessor};

/// Configuration for one [`TextPipeline::run`].
///
/// Every field has a default, so partial JSON documents are accepted:
///
/// ```
/// use textprep::normalize::NormalizationMode;
/// use textprep::pipeline::PipelineConfig;
///
/// let config = PipelineConfig::from_json_str(r#"{"normalize": "stem"}"#).unwrap();
/// assert_eq!(config.normalize, Some(NormalizationMode::Stem));
/// assert!(config.remove_stopwords);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPipelineConfig")]
pub struct PipelineConfig {
    /// Character-level options.
    pub preprocess: PreprocessOptions,
    /// Drop stop words after tokenization.
    pub remove_stopwords: bool,
    /// Morphological reduction; `None` keeps tokens as they are.
    pub normalize: Option<NormalizationMode>,
    /// Join the final tokens into one space-separated string.
    pub rejoin: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            preprocess: PreprocessOptions::default(),
            remove_stopwords: true,
            normalize: Some(NormalizationMode::default()),
            rejoin: false,
        }
    }
}

/// Preprocessing options as written in a configuration document, with the
/// enum fields still unparsed.
#[derive(Deserialize)]
#[serde(default)]
struct RawPreprocessOptions {
    lower: bool,
    remove_punctuation: bool,
    digits: String,
}

impl Default for RawPreprocessOptions {
    fn default() -> Self {
        let options = PreprocessOptions::default();
        RawPreprocessOptions {
            lower: options.lower,
            remove_punctuation: options.remove_punctuation,
            digits: options.digits.to_string(),
        }
    }
}

/// A configuration document before its enum values are validated.
#[derive(Deserialize)]
#[serde(default)]
struct RawPipelineConfig {
    preprocess: RawPreprocessOptions,
    remove_stopwords: bool,
    normalize: Option<String>,
    rejoin: bool,
}

impl Default for RawPipelineConfig {
    fn default() -> Self {
        let config = PipelineConfig::default();
        RawPipelineConfig {
            preprocess: RawPreprocessOptions::default(),
            remove_stopwords: config.remove_stopwords,
            normalize: config.normalize.map(String::from),
            rejoin: config.rejoin,
        }
    }
}

impl TryFrom<RawPipelineConfig> for PipelineConfig {
    type Error = TextprepError;

    fn try_from(raw: RawPipelineConfig) -> Result<Self> {
        let preprocess = PreprocessOptions::default()
            .with_lower(raw.preprocess.lower)
            .with_remove_punctuation(raw.preprocess.remove_punctuation)
            .with_digits(raw.preprocess.digits.parse()?);
        let normalize = raw.normalize.as_deref().map(str::parse::<NormalizationMode>).transpose()?;

        Ok(PipelineConfig {
            preprocess,
            remove_stopwords: raw.remove_stopwords,
            normalize,
            rejoin: raw.rejoin,
        })
    }
}

impl PipelineConfig {
    /// Parse a configuration from a JSON document.
    ///
    /// Malformed JSON is a [`TextprepError::Config`] error; an unknown
    /// `digits` or `normalize` value is reported as
    /// [`TextprepError::InvalidOption`] or
    /// [`TextprepError::UnsupportedNormalizationMode`].
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawPipelineConfig =
            serde_json::from_str(json).map_err(|e| TextprepError::config(e.to_string()))?;
        raw.try_into()
    }

    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let raw: RawPipelineConfig = serde_json::from_str(&json)
            .map_err(|e| TextprepError::config(format!("{}: {e}", path.display())))?;
        raw.try_into()
    }

    /// Set the preprocessing options.
    pub fn with_preprocess(mut self, preprocess: PreprocessOptions) -> Self {
        self.preprocess = preprocess;
        self
    }

    /// Set whether stop words are removed.
    pub fn with_remove_stopwords(mut self, remove: bool) -> Self {
        self.remove_stopwords = remove;
        self
    }

    /// Set the normalization mode, or `None` to skip reduction.
    pub fn with_normalize(mut self, mode: Option<NormalizationMode>) -> Self {
        self.normalize = mode;
        self
    }

    /// Set whether the output is re-joined into a string.
    pub fn with_rejoin(mut self, rejoin: bool) -> Self {
        self.rejoin = rejoin;
        self
    }
}

/// Preprocessor and normalizer wired together.
#[derive(Clone, Debug)]
pub struct TextPipeline {
    preprocessor: Preprocessor,
    normalizer: Normalizer,
}

impl TextPipeline {
    /// Create a pipeline with the English defaults.
    pub fn new() -> Result<Self> {
        Ok(Self::with_components(Preprocessor::new()?, Normalizer::new()))
    }

    /// Create a pipeline from already configured stages.
    pub fn with_components(preprocessor: Preprocessor, normalizer: Normalizer) -> Self {
        TextPipeline {
            preprocessor,
            normalizer,
        }
    }

    /// Get the preprocessing stage.
    pub fn preprocessor(&self) -> &Preprocessor {
        &self.preprocessor
    }

    /// Get the normalization stage.
    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Run the whole pipeline over one text.
    pub fn run(&self, text: &str, config: &PipelineConfig) -> Result<Normalized> {
        let cleaned = self.preprocessor.preprocess(text, &config.preprocess)?;
        debug!("preprocessed {} bytes into {} bytes", text.len(), cleaned.len());

        let tokens = self
            .normalizer
            .tokenize_and_filter(&cleaned, config.remove_stopwords)?;

        match config.normalize {
            Some(mode) => self.normalizer.normalize(&tokens, mode, config.rejoin),
            None => Ok(Normalized::from_tokens(tokens, config.rejoin)),
        }
    }

    /// Run the pipeline over several texts, in order.
    ///
    /// Stops at the first error.
    pub fn run_many<S: AsRef<str>>(
        &self,
        texts: &[S],
        config: &PipelineConfig,
    ) -> Result<Vec<Normalized>> {
        texts
            .iter()
            .map(|text| self.run(text.as_ref(), config))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preprocess::DigitPolicy;

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_default_run() {
        let pipeline = TextPipeline::new().unwrap();
        let output = pipeline
            .run("The Cats sat on the mats.", &PipelineConfig::default())
            .unwrap();

        assert_eq!(output, Normalized::Tokens(strings(&["cat", "sat", "mat"])));
    }

    #[test]
    fn test_run_with_stemming_and_digits() {
        let pipeline = TextPipeline::new().unwrap();
        let config = PipelineConfig::default()
            .with_preprocess(PreprocessOptions::default().with_digits(DigitPolicy::Remove))
            .with_normalize(Some(NormalizationMode::Stem))
            .with_rejoin(true);

        let output = pipeline
            .run("Connected devices: 42 sensors, 7 gateways", &config)
            .unwrap();

        assert_eq!(output, Normalized::Text("connect devic sensor gatewai".to_string()));
    }

    #[test]
    fn test_run_without_reduction_or_stopword_removal() {
        let pipeline = TextPipeline::new().unwrap();
        let config = PipelineConfig::default()
            .with_remove_stopwords(false)
            .with_normalize(None);

        let output = pipeline.run("The cats", &config).unwrap();
        assert_eq!(output, Normalized::Tokens(strings(&["the", "cats"])));
    }

    #[test]
    fn test_run_empty_text() {
        let pipeline = TextPipeline::new().unwrap();

        assert_eq!(
            pipeline.run("", &PipelineConfig::default()).unwrap(),
            Normalized::Tokens(Vec::new())
        );
        assert_eq!(
            pipeline
                .run("?!", &PipelineConfig::default().with_rejoin(true))
                .unwrap(),
            Normalized::Text(String::new())
        );
    }

    #[test]
    fn test_run_many() {
        let pipeline = TextPipeline::new().unwrap();
        let outputs = pipeline
            .run_many(&["dogs", "the geese"], &PipelineConfig::default())
            .unwrap();

        assert_eq!(
            outputs,
            vec![
                Normalized::Tokens(strings(&["dog"])),
                Normalized::Tokens(strings(&["goose"])),
            ]
        );
    }

    #[test]
    fn test_config_from_json() {
        let config = PipelineConfig::from_json_str(
            r#"{
                "preprocess": {"lower": false, "digits": "convert"},
                "remove_stopwords": false,
                "normalize": null,
                "rejoin": true
            }"#,
        )
        .unwrap();

        assert!(!config.preprocess.lower);
        assert!(config.preprocess.remove_punctuation);
        assert_eq!(config.preprocess.digits, DigitPolicy::Convert);
        assert!(!config.remove_stopwords);
        assert_eq!(config.normalize, None);
        assert!(config.rejoin);
    }

    #[test]
    fn test_config_rejects_unknown_values() {
        match PipelineConfig::from_json_str(r#"{"normalize": "bogus"}"#) {
            Err(TextprepError::UnsupportedNormalizationMode(msg)) => {
                assert!(msg.contains("bogus"), "{msg}")
            }
            other => panic!("expected UnsupportedNormalizationMode, got {other:?}"),
        }

        match PipelineConfig::from_json_str(r#"{"preprocess": {"digits": "words"}}"#) {
            Err(TextprepError::InvalidOption(msg)) => assert!(msg.contains("words"), "{msg}"),
            other => panic!("expected InvalidOption, got {other:?}"),
        }
    }

    #[test]
    fn test_config_rejects_malformed_json() {
        for json in ["{", r#"{"rejoin": "yes"}"#, r#"{"normalize": 3}"#] {
            match PipelineConfig::from_json_str(json) {
                Err(TextprepError::Config(_)) => {}
                other => panic!("expected Config error for {json:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_config_round_trip_defaults() {
        let json = serde_json::to_string(&PipelineConfig::default()).unwrap();
        assert_eq!(
            PipelineConfig::from_json_str(&json).unwrap(),
            PipelineConfig::default()
        );
        assert_eq!(PipelineConfig::from_json_str("{}").unwrap(), PipelineConfig::default());
    }
}
