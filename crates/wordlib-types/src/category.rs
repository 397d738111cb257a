use std::fmt;

use serde::{Deserialize, Serialize};

/// Part-of-speech tag attached to a meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Preposition,
    Conjunction,
    Article,
    Numeral,
    Interjection,
    AuxiliaryVerb,
    Onomatopoeia,
    Unspecified,
}

impl Category {
    /// Every variant in declaration order. Statistics use this order to
    /// break count ties deterministically.
    pub const ALL: [Category; 13] = [
        Category::Noun,
        Category::Verb,
        Category::Adjective,
        Category::Adverb,
        Category::Pronoun,
        Category::Preposition,
        Category::Conjunction,
        Category::Article,
        Category::Numeral,
        Category::Interjection,
        Category::AuxiliaryVerb,
        Category::Onomatopoeia,
        Category::Unspecified,
    ];

    /// Canonical token used in the text format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Noun => "N",
            Category::Verb => "V",
            Category::Adjective => "ADJ",
            Category::Adverb => "ADV",
            Category::Pronoun => "PRON",
            Category::Preposition => "PREP",
            Category::Conjunction => "CONJ",
            Category::Article => "ART",
            Category::Numeral => "NUM",
            Category::Interjection => "INTERJ",
            Category::AuxiliaryVerb => "AUX_V",
            Category::Onomatopoeia => "ONOMATOPOEIA",
            Category::Unspecified => "UNSPECIFIED",
        }
    }

    /// Inverse of [`as_str`](Self::as_str). Unknown tokens yield `None`;
    /// the codec maps those to [`Category::Unspecified`] instead of
    /// failing a line.
    pub fn parse(token: &str) -> Option<Category> {
        match token.trim() {
            "N" => Some(Category::Noun),
            "V" => Some(Category::Verb),
            "ADJ" => Some(Category::Adjective),
            "ADV" => Some(Category::Adverb),
            "PRON" => Some(Category::Pronoun),
            "PREP" => Some(Category::Preposition),
            "CONJ" => Some(Category::Conjunction),
            "ART" => Some(Category::Article),
            "NUM" => Some(Category::Numeral),
            "INTERJ" => Some(Category::Interjection),
            "AUX_V" => Some(Category::AuxiliaryVerb),
            "ONOMATOPOEIA" => Some(Category::Onomatopoeia),
            "UNSPECIFIED" => Some(Category::Unspecified),
            _ => None,
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Unspecified
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
