use std::collections::HashMap;
use std::fmt;

use wordlib_types::{Category, WordItem, WordItemParts};

use crate::normalize::normalize_word;
use crate::store::WordLib;

/// Unindexed, ordered grouping of word items — a root-word family or any
/// other ad hoc batch assembled before merging into a [`WordLib`].
///
/// Unlike the library there is no id index and no uniqueness invariant:
/// [`add_word_item`](Self::add_word_item) happily appends duplicates, only
/// [`merge`](Self::merge) filters them. Both behaviors are deliberate and
/// kept distinct.
#[derive(Debug, Clone, Default)]
pub struct WordRoot {
    words: Vec<WordItem>,
}

impl WordRoot {
    pub fn new() -> Self {
        Self { words: Vec::new() }
    }

    pub fn from_item(item: WordItem) -> Self {
        Self { words: vec![item] }
    }

    pub fn from_items(items: Vec<WordItem>) -> Self {
        Self { words: items }
    }

    /// Appends an item. Duplicate words are allowed here; use
    /// [`merge`](Self::merge) when uniqueness matters.
    pub fn add_word_item(&mut self, item: WordItem) {
        self.words.push(item);
    }

    /// Removes every item whose word matches `word` case-insensitively.
    /// Returns whether anything was removed.
    pub fn remove_word_item(&mut self, word: &str) -> bool {
        let target = normalize_word(word);
        let before = self.words.len();
        self.words
            .retain(|item| normalize_word(item.word()) != target);
        self.words.len() != before
    }

    /// Removes the first item equal to `item`. Returns whether one was
    /// removed.
    pub fn remove_item(&mut self, item: &WordItem) -> bool {
        match self.words.iter().position(|w| w == item) {
            Some(idx) => {
                self.words.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn get_by_category(&self, category: Category) -> Vec<&WordItem> {
        self.words
            .iter()
            .filter(|item| item.has_category(category))
            .collect()
    }

    pub fn all_words(&self) -> &[WordItem] {
        &self.words
    }

    pub fn word_strings(&self) -> Vec<String> {
        self.words.iter().map(|item| item.word().to_string()).collect()
    }

    /// Items whose word contains `keyword` as a case-insensitive substring.
    pub fn search(&self, keyword: &str) -> Vec<&WordItem> {
        let needle = keyword.to_lowercase();
        self.words
            .iter()
            .filter(|item| item.word().to_lowercase().contains(&needle))
            .collect()
    }

    pub fn contains_word(&self, word: &str) -> bool {
        let target = normalize_word(word);
        self.words
            .iter()
            .any(|item| normalize_word(item.word()) == target)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn clear(&mut self) {
        self.words.clear();
    }

    /// Appends items from `other` whose word is not already present here
    /// (case-insensitive), in `other`'s order. Does not deduplicate within
    /// `other` itself: once the first copy lands, later copies are already
    /// "present" and skipped.
    pub fn merge(&mut self, other: &WordRoot) {
        for item in &other.words {
            if !self.contains_word(item.word()) {
                self.words.push(item.clone());
            }
        }
    }

    /// Count of meanings per category, same rule as
    /// [`WordLib::category_statistics`].
    pub fn category_statistics(&self) -> HashMap<Category, usize> {
        let mut stats = HashMap::new();
        for item in &self.words {
            for meaning in item.meanings() {
                *stats.entry(meaning.category).or_insert(0) += 1;
            }
        }
        stats
    }

    /// Lossy conversion into an indexed library: only the FIRST meaning of
    /// each item is carried over and the example sentence is dropped,
    /// mirroring how the grouping was historically folded into a library.
    /// Duplicate words (legal here) lose out to the library's conflict rule.
    pub fn to_word_lib(&self) -> WordLib {
        let mut lib = WordLib::new();
        for item in &self.words {
            let parts = WordItemParts {
                meanings: item.meanings().first().cloned().into_iter().collect(),
                ..WordItemParts::default()
            };
            if let Err(err) = lib.add_word(item.word(), parts) {
                tracing::debug!(word = item.word(), %err, "to_word_lib: skipping duplicate");
            }
        }
        lib
    }
}

impl fmt::Display for WordRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "WordRoot ({} words):", self.len())?;
        for (i, item) in self.words.iter().enumerate() {
            writeln!(f, "{}. {}", i + 1, item)?;
        }
        Ok(())
    }
}
