//! Lemmatization algorithms.
//!
//! Lemmatization maps an inflected form to its dictionary form
//! (`children` → `child`), where stemming only strips suffixes
//! (`children` → `children`, `ponies` → `poni`).

pub mod english;

pub use english::EnglishLemmatizer;

/// Trait for lemmatization algorithms.
pub trait Lemmatizer: Send + Sync {
    /// Reduce a word to its lemma.
    fn lemmatize(&self, word: &str) -> String;

    /// Get the name of this lemmatizer.
    fn name(&self) -> &'static str;
}
