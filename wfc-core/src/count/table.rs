use std::collections::BTreeMap;

use super::tokenize::{EmptyTokens, normalize, tokenize};

/// Word → occurrence count, keyed in byte order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordCounts {
    by_word: BTreeMap<String, u64>,
}

impl WordCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every token of one input's raw contents.
    pub fn from_text(raw: &str, empty: EmptyTokens) -> Self {
        let mut counts = Self::new();
        counts.add_text(raw, empty);
        counts
    }

    /// Returns the number of tokens counted.
    pub fn add_text(&mut self, raw: &str, empty: EmptyTokens) -> u64 {
        let text = normalize(raw);
        let mut tokens = 0u64;
        for token in tokenize(&text, empty) {
            self.add(token);
            tokens += 1;
        }
        tokens
    }

    pub fn add(&mut self, word: &str) {
        match self.by_word.get_mut(word) {
            Some(n) => *n += 1,
            None => {
                self.by_word.insert(word.to_owned(), 1);
            }
        }
    }

    pub fn merge(&mut self, other: WordCounts) {
        for (word, n) in other.by_word {
            *self.by_word.entry(word).or_insert(0) += n;
        }
    }

    pub fn get(&self, word: &str) -> u64 {
        self.by_word.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.by_word.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_word.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.by_word.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.by_word.iter().map(|(w, n)| (w.as_str(), *n))
    }

    pub fn to_report(&self) -> Report {
        Report {
            entries: self
                .iter()
                .map(|(word, count)| WordFrequency {
                    word: word.to_owned(),
                    count,
                })
                .collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordFrequency {
    pub word: String,
    pub count: u64,
}

/// Word frequencies in ascending byte order of the word, no duplicates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    pub entries: Vec<WordFrequency>,
}

impl Report {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lines as written to disk, without the terminator.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.entries.iter().map(|e| format!("{} {}", e.word, e.count))
    }
}
