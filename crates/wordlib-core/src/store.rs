use std::collections::{BTreeMap, HashMap};
use std::fmt::Write as _;

use wordlib_types::{Category, Meaning, WordId, WordItem, WordItemParts};

use crate::error::StoreError;
use crate::normalize::normalize_word;

/// Indexed word library.
///
/// Owns every [`WordItem`] and keeps two views over the same data: the
/// primary id map (ownership, id-ordered iteration) and a derived
/// normalized-word index. The two are mutated together and are never
/// observable out of sync. Not safe for concurrent mutation; the host is
/// expected to serialize access.
#[derive(Debug, Clone, Default)]
pub struct WordLib {
    /// id -> item. BTreeMap so iteration, export and filters are id-ordered.
    items: BTreeMap<WordId, WordItem>,
    /// normalized word -> id, derived from `items`.
    index: HashMap<String, WordId>,
    /// Next id to hand out. Monotonic; only `clear` resets it.
    next_id: WordId,
}

impl WordLib {
    pub fn new() -> Self {
        Self {
            items: BTreeMap::new(),
            index: HashMap::new(),
            next_id: 1,
        }
    }

    /// Adds a word with optional meanings/example and returns its new id.
    /// The word is stored in normalized (trimmed, NFKC, lowercase) form.
    /// Fails with [`StoreError::DuplicateWord`] when the normalized word is
    /// already indexed, leaving the library untouched.
    pub fn add_word(
        &mut self,
        word: impl AsRef<str>,
        parts: WordItemParts,
    ) -> Result<WordId, StoreError> {
        let normalized = normalize_word(word.as_ref());
        if self.index.contains_key(&normalized) {
            return Err(StoreError::DuplicateWord { word: normalized });
        }

        let id = self.next_id;
        self.next_id += 1;
        self.index.insert(normalized.clone(), id);
        self.items.insert(id, WordItem::with_parts(normalized, parts));
        Ok(id)
    }

    /// Bulk add in iteration order. Returns the assigned id per input word;
    /// a word that conflicts with the library or with an earlier entry is
    /// omitted (first entry wins).
    pub fn add_all_words<I, S>(&mut self, words: I) -> HashMap<String, WordId>
    where
        I: IntoIterator<Item = (S, Vec<Meaning>)>,
        S: Into<String>,
    {
        let mut assigned = HashMap::new();
        for (word, meanings) in words {
            let word = word.into();
            let parts = WordItemParts {
                meanings,
                ..WordItemParts::default()
            };
            if let Ok(id) = self.add_word(&word, parts) {
                assigned.insert(word, id);
            }
        }
        assigned
    }

    /// Inserts an item under a caller-chosen id, advancing `next_id` past
    /// it. Used by codec import and registry bootstrap paths.
    pub(crate) fn insert_with_id(&mut self, id: WordId, item: WordItem) -> Result<(), StoreError> {
        if self.items.contains_key(&id) {
            return Err(StoreError::DuplicateId(id));
        }
        let normalized = normalize_word(item.word());
        if self.index.contains_key(&normalized) {
            return Err(StoreError::DuplicateWord { word: normalized });
        }

        let mut item = item;
        item.set_word(normalized.clone());
        self.index.insert(normalized, id);
        self.items.insert(id, item);
        if id >= self.next_id {
            self.next_id = id + 1;
        }
        Ok(())
    }

    pub fn get_by_id(&self, id: WordId) -> Option<&WordItem> {
        self.items.get(&id)
    }

    pub fn get_by_word(&self, word: &str) -> Option<&WordItem> {
        let id = self.index.get(&normalize_word(word))?;
        self.items.get(id)
    }

    /// Owned copy of the meanings stored under `id`.
    pub fn meanings_of_id(&self, id: WordId) -> Option<Vec<Meaning>> {
        self.items.get(&id).map(|item| item.meanings().to_vec())
    }

    /// Owned copy of the meanings stored under `word` (case-insensitive).
    pub fn meanings_of_word(&self, word: &str) -> Option<Vec<Meaning>> {
        self.get_by_word(word).map(|item| item.meanings().to_vec())
    }

    /// Replaces the item stored under `id`. Fails without touching either
    /// map when the id is unknown or the new word already belongs to a
    /// different id; on success the old word's index entry is gone and only
    /// the new word resolves to `id`.
    pub fn update_word_item(&mut self, id: WordId, item: WordItem) -> Result<(), StoreError> {
        let old_word = match self.items.get(&id) {
            Some(existing) => existing.word().to_string(),
            None => return Err(StoreError::UnknownId(id)),
        };

        let normalized = normalize_word(item.word());
        if let Some(&owner) = self.index.get(&normalized) {
            if owner != id {
                return Err(StoreError::DuplicateWord { word: normalized });
            }
        }

        // Validation done; both maps change together from here.
        self.index.remove(&old_word);
        let mut item = item;
        item.set_word(normalized.clone());
        self.index.insert(normalized, id);
        self.items.insert(id, item);
        Ok(())
    }

    /// Removes and returns the item under `id`, dropping its index entry
    /// with it.
    pub fn remove_by_id(&mut self, id: WordId) -> Option<WordItem> {
        let removed = self.items.remove(&id)?;
        self.index.remove(removed.word());
        Some(removed)
    }

    /// Removes and returns the item stored under `word` (case-insensitive).
    pub fn remove_by_word(&mut self, word: &str) -> Option<WordItem> {
        let id = self.index.remove(&normalize_word(word))?;
        self.items.remove(&id)
    }

    pub fn contains_id(&self, id: WordId) -> bool {
        self.items.contains_key(&id)
    }

    pub fn contains_word(&self, word: &str) -> bool {
        self.index.contains_key(&normalize_word(word))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in id order.
    pub fn iter(&self) -> impl Iterator<Item = (WordId, &WordItem)> {
        self.items.iter().map(|(&id, item)| (id, item))
    }

    pub fn all_ids(&self) -> Vec<WordId> {
        self.items.keys().copied().collect()
    }

    /// Owned snapshot of every item, id order.
    pub fn all_words(&self) -> Vec<WordItem> {
        self.items.values().cloned().collect()
    }

    /// Items with at least one meaning in `category`, id order.
    pub fn get_by_category(&self, category: Category) -> Vec<&WordItem> {
        self.items
            .values()
            .filter(|item| item.has_category(category))
            .collect()
    }

    /// Items whose word contains `keyword` as a case-insensitive substring,
    /// id order. The keyword goes through the same normalization as stored
    /// words, so any form that matches `get_by_word` also matches here.
    pub fn search(&self, keyword: &str) -> Vec<&WordItem> {
        let needle = normalize_word(keyword);
        self.items
            .values()
            .filter(|item| item.word().contains(&needle))
            .collect()
    }

    /// Count of meanings per category across the whole library. An item
    /// with two meanings of one category contributes two to that category.
    pub fn category_statistics(&self) -> HashMap<Category, usize> {
        let mut stats = HashMap::new();
        for item in self.items.values() {
            for meaning in item.meanings() {
                *stats.entry(meaning.category).or_insert(0) += 1;
            }
        }
        stats
    }

    /// The `n` categories with the highest meaning counts, descending.
    /// Ties break by category declaration order, so the result is
    /// deterministic.
    pub fn top_categories(&self, n: usize) -> Vec<(Category, usize)> {
        let stats = self.category_statistics();
        let mut ranked: Vec<(Category, usize)> = Category::ALL
            .iter()
            .filter_map(|&cat| stats.get(&cat).map(|&count| (cat, count)))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }

    /// Empties both maps and resets the id counter to 1.
    pub fn clear(&mut self) {
        self.items.clear();
        self.index.clear();
        self.next_id = 1;
    }

    pub fn export_id_to_word_map(&self) -> HashMap<WordId, String> {
        self.items
            .iter()
            .map(|(&id, item)| (id, item.word().to_string()))
            .collect()
    }

    pub fn export_word_to_meaning_map(&self) -> HashMap<String, Vec<Meaning>> {
        self.items
            .values()
            .map(|item| (item.word().to_string(), item.meanings().to_vec()))
            .collect()
    }

    /// Wholesale replacement of the store. Rebuilds the word index from
    /// scratch, normalizing each stored word; when two entries normalize to
    /// the same word the lower id wins and the later one is dropped with a
    /// warning. `next_id` becomes `max(kept id) + 1`, or 1 when empty.
    pub fn import_data(&mut self, data: BTreeMap<WordId, WordItem>) {
        self.clear();
        for (id, item) in data {
            if let Err(err) = self.insert_with_id(id, item) {
                tracing::warn!(id, %err, "import_data: dropping conflicting entry");
            }
        }
    }

    /// Human-readable listing of the whole library, id order.
    pub fn format_all(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Word library ({} words)", self.len());
        for (id, item) in self.iter() {
            let _ = writeln!(out, "{id:>4}: {item}");
        }
        out
    }

    /// The id the next successful insertion will receive.
    pub fn next_id(&self) -> WordId {
        self.next_id
    }
}
