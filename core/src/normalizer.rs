use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

/// Stop words dropped by [`Normalizer::default`].
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "from", "if", "in", "into",
    "is", "it", "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there",
    "these", "they", "this", "to", "was", "will", "with",
];

lazy_static! {
    // [[:punct:]] is the ASCII class: !"#$%&'()*+,-./:;<=>?@[\]^_`{|}~
    static ref PUNCT: Regex = Regex::new(r"[[:punct:]]").expect("valid regex");
    static ref DEFAULT: Normalizer = Normalizer::new(DEFAULT_STOP_WORDS.iter().copied());
}

/// Turns raw text into index terms.
///
/// The same instance must serve both indexing and querying; a term that is
/// spelled differently on the two paths can never match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalizer {
    stop_words: HashSet<String>,
}

impl Normalizer {
    /// Build a normalizer with a custom stop-word set. Words go through the
    /// same lowercasing and punctuation stripping as tokens, so `Don't`
    /// drops the token `dont`.
    pub fn new<I, S>(stop_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stop_words = stop_words
            .into_iter()
            .map(|w| PUNCT.replace_all(&w.as_ref().to_lowercase(), "").trim().to_string())
            .filter(|w| !w.is_empty())
            .collect();
        Self { stop_words }
    }

    /// Lowercase, strip ASCII punctuation, split on whitespace, drop stop words.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let stripped = PUNCT.replace_all(&lowered, "");
        stripped
            .split_whitespace()
            .filter(|token| !self.is_stop_word(token))
            .map(str::to_string)
            .collect()
    }

    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }

    pub fn stop_words(&self) -> impl Iterator<Item = &str> + '_ {
        self.stop_words.iter().map(String::as_str)
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        DEFAULT.clone()
    }
}

/// Normalize with the default stop-word set.
pub fn normalize(text: &str) -> Vec<String> {
    DEFAULT.normalize(text)
}
