//! Stemming algorithms.
//!
//! A stemmer strips suffixes without consulting a dictionary, so related
//! forms conflate to a shared stem that need not be a word
//! (`ponies` → `poni`).

pub mod porter;

pub use porter::PorterStemmer;

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}
