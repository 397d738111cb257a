use std::fmt;

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// One sense of a word, tagged with a part of speech. Compared by value
/// only; a meaning has no identity beyond its fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meaning {
    pub category: Category,
    pub text: String,
}

impl Meaning {
    pub fn new(text: impl Into<String>, category: Category) -> Self {
        Self {
            category,
            text: text.into(),
        }
    }
}

impl fmt::Display for Meaning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.text)
    }
}
