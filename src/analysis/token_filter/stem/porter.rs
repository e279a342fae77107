//! Porter stemming algorithm implementation.
//!
//! The classic algorithm from M.F. Porter (1980), applied in five steps:
//! 1. Plurals and -ed/-ing suffixes, terminal y → i
//! 2. Double suffixes: -ational → -ate, -tional → -tion, etc.
//! 3. -icate → -ic, -ative → "", etc.
//! 4. Remove -al, -ance, -ence, etc.
//! 5. Remove final -e and reduce -ll
//!
//! Words are lower-cased first; words of two characters or fewer are
//! returned lower-cased but otherwise unchanged.
//!
//! # Examples
//!
//! ```
//! use textprep::analysis::token_filter::stem::Stemmer;
//! use textprep::analysis::token_filter::stem::porter::PorterStemmer;
//!
//! let stemmer = PorterStemmer::new();
//!
//! assert_eq!(stemmer.stem("running"), "run");
//! assert_eq!(stemmer.stem("flies"), "fli");
//! assert_eq!(stemmer.stem("traditional"), "tradit");
//! ```

use crate::analysis::token_filter::stem::Stemmer;

const STEP2_SUFFIXES: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("abli", "able"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
];

const STEP3_SUFFIXES: &[(&str, &str)] = &[
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

const STEP4_SUFFIXES: &[&str] = &[
    "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion", "ou",
    "ism", "ate", "iti", "ous", "ive", "ize",
];

/// Porter stemming algorithm implementation.
#[derive(Debug, Clone, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    /// Create a new Porter stemmer.
    pub fn new() -> Self {
        PorterStemmer
    }

    /// Consonant flags for every position of `word`.
    ///
    /// A `y` is a consonant at the start of a word or after a vowel. The flag
    /// at a position depends only on the characters before it, so the mask of
    /// a word is also valid for each of its prefixes.
    fn consonant_mask(word: &[char]) -> Vec<bool> {
        let mut mask: Vec<bool> = Vec::with_capacity(word.len());
        for (pos, c) in word.iter().enumerate() {
            let consonant = match c {
                'a' | 'e' | 'i' | 'o' | 'u' => false,
                'y' => pos == 0 || !mask[pos - 1],
                _ => true,
            };
            mask.push(consonant);
        }
        mask
    }

    /// Calculate the measure of a word (number of VC sequences).
    fn measure(mask: &[bool]) -> usize {
        let n = mask.len();
        let mut i = 0;
        let mut m = 0;

        // Skip initial consonants
        while i < n && mask[i] {
            i += 1;
        }

        loop {
            while i < n && !mask[i] {
                i += 1;
            }
            if i >= n {
                return m;
            }
            while i < n && mask[i] {
                i += 1;
            }
            m += 1;
        }
    }

    fn contains_vowel(mask: &[bool]) -> bool {
        mask.iter().any(|&consonant| !consonant)
    }

    fn ends_with_double_consonant(word: &[char], mask: &[bool]) -> bool {
        let n = word.len();
        n >= 2 && word[n - 1] == word[n - 2] && mask[n - 1]
    }

    /// Consonant-vowel-consonant ending where the last consonant is not w, x or y.
    fn ends_cvc(word: &[char], mask: &[bool]) -> bool {
        let n = word.len();
        n >= 3
            && mask[n - 3]
            && !mask[n - 2]
            && mask[n - 1]
            && !matches!(word[n - 1], 'w' | 'x' | 'y')
    }

    fn ends_with(word: &[char], suffix: &str) -> bool {
        let len = suffix.len();
        word.len() >= len && word[word.len() - len..].iter().copied().eq(suffix.chars())
    }

    /// Length of the stem left when `suffix` is removed.
    fn stem_len(word: &[char], suffix: &str) -> usize {
        word.len() - suffix.len()
    }

    fn replace_suffix(word: &mut Vec<char>, suffix: &str, replacement: &str) {
        word.truncate(Self::stem_len(word, suffix));
        word.extend(replacement.chars());
    }

    /// Replace the first matching suffix of the table when its stem has a
    /// measure above `min_measure`. Only the first match is considered.
    fn apply_table(word: &mut Vec<char>, table: &[(&str, &str)], min_measure: usize) {
        if let Some((suffix, replacement)) = table.iter().find(|(s, _)| Self::ends_with(word, s)) {
            let mask = Self::consonant_mask(word);
            if Self::measure(&mask[..Self::stem_len(word, suffix)]) > min_measure {
                Self::replace_suffix(word, suffix, replacement);
            }
        }
    }

    fn step1a(word: &mut Vec<char>) {
        if Self::ends_with(word, "sses") || Self::ends_with(word, "ies") {
            word.truncate(word.len() - 2);
        } else if Self::ends_with(word, "s") && !Self::ends_with(word, "ss") {
            word.pop();
        }
    }

    fn step1b(word: &mut Vec<char>) {
        let mask = Self::consonant_mask(word);

        if Self::ends_with(word, "eed") {
            if Self::measure(&mask[..word.len() - 3]) > 0 {
                word.pop();
            }
            return;
        }

        let suffix = if Self::ends_with(word, "ed") {
            "ed"
        } else if Self::ends_with(word, "ing") {
            "ing"
        } else {
            return;
        };

        let stem_len = Self::stem_len(word, suffix);
        if !Self::contains_vowel(&mask[..stem_len]) {
            return;
        }
        word.truncate(stem_len);
        let mask = &mask[..stem_len];

        if Self::ends_with(word, "at") || Self::ends_with(word, "bl") || Self::ends_with(word, "iz")
        {
            word.push('e');
        } else if Self::ends_with_double_consonant(word, mask)
            && !matches!(word[word.len() - 1], 'l' | 's' | 'z')
        {
            word.pop();
        } else if Self::measure(mask) == 1 && Self::ends_cvc(word, mask) {
            word.push('e');
        }
    }

    fn step1c(word: &mut [char]) {
        let n = word.len();
        if !Self::ends_with(word, "y") {
            return;
        }
        if Self::contains_vowel(&Self::consonant_mask(&word[..n - 1])) {
            word[n - 1] = 'i';
        }
    }

    fn step4(word: &mut Vec<char>) {
        let Some(suffix) = STEP4_SUFFIXES.iter().find(|s| Self::ends_with(word, s)) else {
            return;
        };

        let stem_len = Self::stem_len(word, suffix);
        let stem = &word[..stem_len];
        if *suffix == "ion" && !(Self::ends_with(stem, "s") || Self::ends_with(stem, "t")) {
            return;
        }
        if Self::measure(&Self::consonant_mask(stem)) > 1 {
            word.truncate(stem_len);
        }
    }

    fn step5(word: &mut Vec<char>) {
        let mask = Self::consonant_mask(word);

        if Self::ends_with(word, "e") {
            let stem_len = word.len() - 1;
            let m = Self::measure(&mask[..stem_len]);
            if m > 1 || (m == 1 && !Self::ends_cvc(&word[..stem_len], &mask[..stem_len])) {
                word.pop();
            }
        }

        if Self::ends_with(word, "ll") && Self::measure(&mask[..word.len()]) > 1 {
            word.pop();
        }
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        let lowered = word.to_lowercase();
        let mut chars: Vec<char> = lowered.chars().collect();
        if chars.len() <= 2 {
            return lowered;
        }

        Self::step1a(&mut chars);
        Self::step1b(&mut chars);
        Self::step1c(&mut chars);
        Self::apply_table(&mut chars, STEP2_SUFFIXES, 0);
        Self::apply_table(&mut chars, STEP3_SUFFIXES, 0);
        Self::step4(&mut chars);
        Self::step5(&mut chars);

        chars.into_iter().collect()
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_porter_stemmer() {
        let stemmer = PorterStemmer::new();

        assert_eq!(stemmer.stem("running"), "run");
        assert_eq!(stemmer.stem("flies"), "fli");
        assert_eq!(stemmer.stem("died"), "di");
        assert_eq!(stemmer.stem("agreed"), "agre");
        assert_eq!(stemmer.stem("disabled"), "disabl");
        assert_eq!(stemmer.stem("measuring"), "measur");
        assert_eq!(stemmer.stem("sensational"), "sensat");
        assert_eq!(stemmer.stem("traditional"), "tradit");
    }

    #[test]
    fn test_porter_plurals_and_y() {
        let stemmer = PorterStemmer::new();

        assert_eq!(stemmer.stem("caresses"), "caress");
        assert_eq!(stemmer.stem("ponies"), "poni");
        assert_eq!(stemmer.stem("cats"), "cat");
        assert_eq!(stemmer.stem("happy"), "happi");
        assert_eq!(stemmer.stem("relational"), "relat");
        assert_eq!(stemmer.stem("hopefulness"), "hope");
    }

    #[test]
    fn test_porter_conflates_inflections() {
        let stemmer = PorterStemmer::new();

        for word in ["connect", "connected", "connecting", "connection", "connections"] {
            assert_eq!(stemmer.stem(word), "connect", "stemming {word}");
        }
    }

    #[test]
    fn test_porter_short_and_cased_words() {
        let stemmer = PorterStemmer::new();

        assert_eq!(stemmer.stem("Is"), "is");
        assert_eq!(stemmer.stem("CATS"), "cat");
        assert_eq!(stemmer.stem(""), "");
    }

    fn mask(word: &str) -> Vec<bool> {
        PorterStemmer::consonant_mask(&word.chars().collect::<Vec<_>>())
    }

    #[test]
    fn test_porter_measure() {
        assert_eq!(PorterStemmer::measure(&mask("tree")), 0);
        assert_eq!(PorterStemmer::measure(&mask("trees")), 1);
        assert_eq!(PorterStemmer::measure(&mask("trouble")), 1);
        assert_eq!(PorterStemmer::measure(&mask("troubles")), 2);
    }

    #[test]
    fn test_porter_vowel_detection() {
        assert_eq!(mask("toy"), vec![true, false, true]); // y after a vowel
        assert_eq!(mask("yes"), vec![true, false, true]);
        assert_eq!(mask("syzygy"), vec![true, false, true, false, true, false]);
        assert_eq!(mask("yyyy"), vec![true, false, true, false]);
    }

    #[test]
    fn test_porter_long_y_run() {
        let stemmer = PorterStemmer::new();
        let word = format!("{}ed", "y".repeat(100_000));

        assert_eq!(stemmer.stem(&word), format!("{}i", "y".repeat(99_999)));
    }
}
