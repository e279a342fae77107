//! Rule-based English noun lemmatizer.
//!
//! Works like a dictionary lemmatizer asked for the noun reading of a word:
//! irregular plurals come from a fixed table, regular plurals are reduced by
//! suffix detachment rules. There is no lexicon, so the rules are guarded to
//! leave singular words that merely end in `s` (`glass`, `virus`, `basis`)
//! alone. Words that are not plural nouns pass through unchanged.
//!
//! # Examples
//!
//! ```
//! use textprep::analysis::token_filter::lemma::Lemmatizer;
//! use textprep::analysis::token_filter::lemma::english::EnglishLemmatizer;
//!
//! let lemmatizer = EnglishLemmatizer::new();
//!
//! assert_eq!(lemmatizer.lemmatize("geese"), "goose");
//! assert_eq!(lemmatizer.lemmatize("cities"), "city");
//! assert_eq!(lemmatizer.lemmatize("running"), "running");
//! ```

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::analysis::token_filter::lemma::Lemmatizer;

/// Irregular plural forms and their lemmas.
const IRREGULAR_NOUNS: &[(&str, &str)] = &[
    ("alumni", "alumnus"),
    ("analyses", "analysis"),
    ("bacteria", "bacterium"),
    ("cacti", "cactus"),
    ("calves", "calf"),
    ("children", "child"),
    ("crises", "crisis"),
    ("criteria", "criterion"),
    ("data", "datum"),
    ("dice", "die"),
    ("echoes", "echo"),
    ("elves", "elf"),
    ("feet", "foot"),
    ("fungi", "fungus"),
    ("geese", "goose"),
    ("halves", "half"),
    ("heroes", "hero"),
    ("hypotheses", "hypothesis"),
    ("indices", "index"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("lice", "louse"),
    ("lives", "life"),
    ("loaves", "loaf"),
    ("matrices", "matrix"),
    ("men", "man"),
    ("mice", "mouse"),
    ("nuclei", "nucleus"),
    ("oxen", "ox"),
    ("people", "person"),
    ("phenomena", "phenomenon"),
    ("potatoes", "potato"),
    ("radii", "radius"),
    ("selves", "self"),
    ("shelves", "shelf"),
    ("stimuli", "stimulus"),
    ("teeth", "tooth"),
    ("theses", "thesis"),
    ("thieves", "thief"),
    ("tomatoes", "tomato"),
    ("vertices", "vertex"),
    ("wives", "wife"),
    ("wolves", "wolf"),
    ("women", "woman"),
];

/// Words ending in `s` that are already in their base form.
const INVARIANT_WORDS: &[&str] = &[
    "always",
    "christmas",
    "series",
    "species",
    "news",
    "lens",
    "perhaps",
    "physics",
    "mathematics",
    "economics",
    "politics",
    "ethics",
    "athletics",
    "whereas",
    "besides",
    "sometimes",
    "afterwards",
    "towards",
    "means",
];

/// Endings that mark a singular word even though it ends in `s`.
const SINGULAR_ENDINGS: &[&str] = &["ss", "us", "is", "ous", "ics"];

/// Plural endings that drop `es` rather than just `s`.
const ES_ENDINGS: &[&str] = &["sses", "xes", "zes", "ches", "shes"];

/// Words this short are never reduced.
const MIN_REDUCIBLE_LEN: usize = 4;

static IRREGULAR_TABLE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| IRREGULAR_NOUNS.iter().copied().collect());

/// Rule-based English lemmatizer for nouns.
#[derive(Debug, Clone, Default)]
pub struct EnglishLemmatizer;

impl EnglishLemmatizer {
    /// Create a new English lemmatizer.
    pub fn new() -> Self {
        EnglishLemmatizer
    }

    fn detach_suffix(word: &str) -> Option<String> {
        if word.len() < MIN_REDUCIBLE_LEN
            || !word.ends_with('s')
            || INVARIANT_WORDS.contains(&word)
            || SINGULAR_ENDINGS.iter().any(|e| word.ends_with(e))
        {
            return None;
        }

        if word.len() > MIN_REDUCIBLE_LEN && word.ends_with("ies") {
            return Some(format!("{}y", &word[..word.len() - 3]));
        }

        if ES_ENDINGS.iter().any(|e| word.ends_with(e)) {
            return Some(word[..word.len() - 2].to_string());
        }

        Some(word[..word.len() - 1].to_string())
    }
}

impl Lemmatizer for EnglishLemmatizer {
    fn lemmatize(&self, word: &str) -> String {
        if let Some(lemma) = IRREGULAR_TABLE.get(word) {
            return (*lemma).to_string();
        }

        Self::detach_suffix(word).unwrap_or_else(|| word.to_string())
    }

    fn name(&self) -> &'static str {
        "english"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lemma(word: &str) -> String {
        EnglishLemmatizer::new().lemmatize(word)
    }

    #[test]
    fn test_regular_plurals() {
        assert_eq!(lemma("cats"), "cat");
        assert_eq!(lemma("ties"), "tie");
        assert_eq!(lemma("cities"), "city");
        assert_eq!(lemma("classes"), "class");
        assert_eq!(lemma("boxes"), "box");
        assert_eq!(lemma("churches"), "church");
        assert_eq!(lemma("dishes"), "dish");
    }

    #[test]
    fn test_irregular_plurals() {
        assert_eq!(lemma("children"), "child");
        assert_eq!(lemma("women"), "woman");
        assert_eq!(lemma("knives"), "knife");
        assert_eq!(lemma("analyses"), "analysis");
    }

    #[test]
    fn test_singular_words_are_untouched() {
        for word in ["glass", "virus", "basis", "famous", "physics", "news", "bus", "cat", ""] {
            assert_eq!(lemma(word), word);
        }
    }

    #[test]
    fn test_lemmas_are_fixed_points() {
        for word in ["cats", "cities", "boxes", "children", "geese", "classes"] {
            let once = lemma(word);
            assert_eq!(lemma(&once), once, "lemmatizing {word} twice");
        }
    }

    #[test]
    fn test_non_ascii_words() {
        assert_eq!(lemma("cafés"), "café");
        assert_eq!(lemma("naïve"), "naïve");
    }
}
