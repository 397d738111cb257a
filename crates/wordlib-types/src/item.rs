use std::fmt;

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::meaning::Meaning;

/// Optional parts of a word item. `Default` gives an item with no recorded
/// meanings and no example sentence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordItemParts {
    pub meanings: Vec<Meaning>,
    pub example: String,
}

/// One headword together with its ordered meanings and an optional example
/// sentence. Meanings keep insertion order under every mutation except
/// explicit removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordItem {
    word: String,
    meanings: Vec<Meaning>,
    example: String,
}

impl WordItem {
    /// Word with no meanings and no example.
    pub fn new(word: impl Into<String>) -> Self {
        Self::with_parts(word, WordItemParts::default())
    }

    pub fn with_parts(word: impl Into<String>, parts: WordItemParts) -> Self {
        Self {
            word: word.into(),
            meanings: parts.meanings,
            example: parts.example,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn meanings(&self) -> &[Meaning] {
        &self.meanings
    }

    pub fn example(&self) -> &str {
        &self.example
    }

    pub fn meaning_count(&self) -> usize {
        self.meanings.len()
    }

    pub fn set_word(&mut self, word: impl Into<String>) {
        self.word = word.into();
    }

    pub fn set_example(&mut self, example: impl Into<String>) {
        self.example = example.into();
    }

    pub fn set_meanings(&mut self, meanings: Vec<Meaning>) {
        self.meanings = meanings;
    }

    pub fn add_meaning(&mut self, meaning: Meaning) {
        self.meanings.push(meaning);
    }

    /// Removes the first meaning equal to `meaning`. Returns whether one
    /// was removed.
    pub fn remove_meaning(&mut self, meaning: &Meaning) -> bool {
        match self.meanings.iter().position(|m| m == meaning) {
            Some(idx) => {
                self.meanings.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Distinct categories across all meanings, in first-appearance order.
    pub fn categories(&self) -> Vec<Category> {
        let mut seen = Vec::new();
        for meaning in &self.meanings {
            if !seen.contains(&meaning.category) {
                seen.push(meaning.category);
            }
        }
        seen
    }

    pub fn has_category(&self, category: Category) -> bool {
        self.meanings.iter().any(|m| m.category == category)
    }
}

impl fmt::Display for WordItem {
    /// `word [CAT1, CAT2]: sense1; sense2 ex: example`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.word)?;

        let categories = self.categories();
        if !categories.is_empty() {
            f.write_str(" [")?;
            for (i, cat) in categories.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{cat}")?;
            }
            f.write_str("]")?;
        }

        f.write_str(": ")?;
        for (i, meaning) in self.meanings.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{meaning}")?;
        }

        if !self.example.is_empty() {
            write!(f, " ex: {}", self.example)?;
        }

        Ok(())
    }
}
