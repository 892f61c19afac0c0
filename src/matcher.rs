//! fuzzy word matching
//!
//! standalone lookup utility for "did you mean" style suggestions.
//! similarity is edit distance normalized by the longer word's length,
//! compared case-insensitively.

use strsim::levenshtein;

/// matches an input word against a fixed candidate list
#[derive(Debug, Clone)]
pub struct WordMatcher {
    words: Vec<String>,
}

impl WordMatcher {
    /// create a matcher over the given candidates
    pub fn new(words: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// find the candidate most similar to the input word
    ///
    /// returns `None` only when the candidate list is empty; an earlier
    /// candidate wins ties.
    pub fn search(&self, input: &str) -> Option<&str> {
        let mut best: Option<(&str, f64)> = None;

        for word in &self.words {
            let score = similarity(input, word);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((word, score)),
            }
        }

        best.map(|(word, _)| word)
    }

    /// similarity score against every candidate, in candidate order
    pub fn scores(&self, input: &str) -> Vec<(&str, f64)> {
        self.words
            .iter()
            .map(|word| (word.as_str(), similarity(input, word)))
            .collect()
    }
}

/// similarity between two words in `0.0..=1.0`
///
/// `1.0` means equal ignoring case; two empty words count as equal.
pub fn similarity(a: &str, b: &str) -> f64 {
    let (longer, shorter) = if a.chars().count() >= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };

    let longer_len = longer.chars().count();
    if longer_len == 0 {
        return 1.0;
    }

    let distance = levenshtein(&longer.to_lowercase(), &shorter.to_lowercase());
    (longer_len - distance.min(longer_len)) as f64 / longer_len as f64
}
