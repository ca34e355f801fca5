//! Word frequency counting
//!
//! Words are lowercased before counting. Results are ordered by descending
//! count; words with equal counts keep the order in which they first appear
//! in the text.
//!
//! # Example
//!
//! ```
//! use articlekit::words::most_common_words;
//! use articlekit::WordPattern;
//!
//! let text = "Not once, but twice; yes, twice, not once";
//! let counts = most_common_words(text, 5, WordPattern::Alphabetic);
//! assert_eq!(
//!     counts.into_vec(),
//!     vec![
//!         ("not".to_string(), 2),
//!         ("once".to_string(), 2),
//!         ("twice".to_string(), 2),
//!         ("but".to_string(), 1),
//!         ("yes".to_string(), 1),
//!     ]
//! );
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use crate::config::WordPattern;

static ALPHABETIC_WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z]+").expect("valid alphabetic word regex"));
static ALPHANUMERIC_WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z0-9_]+").expect("valid alphanumeric word regex"));

/// Ordered word → count mapping returned by [`most_common_words`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCounts {
    entries: Vec<(String, usize)>,
}

impl WordCounts {
    /// Count for `word`, if it is among the returned words
    pub fn get(&self, word: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == word)
            .map(|(_, count)| *count)
    }

    /// Iterate `(word, count)` pairs in rank order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries
            .iter()
            .map(|(word, count)| (word.as_str(), *count))
    }

    /// Words in rank order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(word, _)| word.as_str())
    }

    /// Number of distinct words returned
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no words were returned
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume into the ranked `(word, count)` pairs
    pub fn into_vec(self) -> Vec<(String, usize)> {
        self.entries
    }
}

impl IntoIterator for WordCounts {
    type Item = (String, usize);
    type IntoIter = std::vec::IntoIter<(String, usize)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl PartialEq<[(&str, usize)]> for WordCounts {
    fn eq(&self, other: &[(&str, usize)]) -> bool {
        self.entries.len() == other.len() && self.iter().eq(other.iter().copied())
    }
}

impl<const N: usize> PartialEq<[(&str, usize); N]> for WordCounts {
    fn eq(&self, other: &[(&str, usize); N]) -> bool {
        *self == other[..]
    }
}

/// Return the `n` most common words in `text` with their counts
///
/// `n == 0` returns an empty result without scanning the text. Fewer than
/// `n` entries are returned when the text has fewer distinct words.
pub fn most_common_words(text: &str, n: usize, pattern: WordPattern) -> WordCounts {
    if n == 0 {
        return WordCounts::default();
    }

    let lowered = text.to_ascii_lowercase();
    let word_re = match pattern {
        WordPattern::Alphabetic => &*ALPHABETIC_WORD_RE,
        WordPattern::Alphanumeric => &*ALPHANUMERIC_WORD_RE,
    };

    // First-occurrence order is the insertion order of `entries`.
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut entries: Vec<(String, usize)> = Vec::new();
    let mut total = 0usize;
    for word in word_re.find_iter(&lowered).map(|m| m.as_str()) {
        total += 1;
        match index.get(word) {
            Some(&slot) => entries[slot].1 += 1,
            None => {
                index.insert(word, entries.len());
                entries.push((word.to_string(), 1));
            }
        }
    }

    // Stable sort keeps first-occurrence order among equal counts.
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries.truncate(n);

    trace!(
        ?pattern,
        total,
        distinct = index.len(),
        returned = entries.len(),
        "counted words"
    );
    WordCounts { entries }
}
