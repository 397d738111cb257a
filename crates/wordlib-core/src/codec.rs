//! Flat-text serialization of a [`WordLib`].
//!
//! One line per word, four pipe-delimited fields:
//!
//! ```text
//! <id>|<word>|<CAT1>:<text1>;<CAT2>:<text2>|<example>
//! ```
//!
//! Lines starting with `#` are headers and are skipped on import. Import is
//! best-effort: a malformed line is logged and skipped, never fatal.

use wordlib_types::{Category, Meaning, WordItem, WordItemParts};

use crate::store::WordLib;

/// Escapes one field so it can sit between the format's delimiters.
/// Applied to word, meaning text and example independently, before joining.
pub fn escape_field(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    for ch in field.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '|' => out.push_str("\\p"),
            ':' => out.push_str("\\c"),
            ';' => out.push_str("\\s"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(ch),
        }
    }
    out
}

/// Exact inverse of [`escape_field`]. A single left-to-right scan, so `\\`
/// runs cannot be unescaped twice. A dangling or unknown escape is kept
/// literally.
pub fn unescape_field(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut chars = field.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('p') => out.push('|'),
            Some('c') => out.push(':'),
            Some('s') => out.push(';'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

fn encode_meanings(meanings: &[Meaning]) -> String {
    meanings
        .iter()
        .map(|m| format!("{}:{}", m.category.as_str(), escape_field(&m.text)))
        .collect::<Vec<_>>()
        .join(";")
}

fn decode_meanings(field: &str) -> Vec<Meaning> {
    if field.is_empty() {
        return Vec::new();
    }
    field
        .split(';')
        .filter(|token| !token.is_empty())
        .map(|token| match token.split_once(':') {
            Some((cat, text)) => Meaning::new(
                unescape_field(text),
                Category::parse(cat).unwrap_or(Category::Unspecified),
            ),
            // no colon at all: take the token as bare text
            None => Meaning::new(unescape_field(token), Category::Unspecified),
        })
        .collect()
}

impl WordLib {
    /// Serializes the whole library, one line per word, id order.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str("# wordlib text format v1\n");
        out.push_str(&format!("# words: {}\n", self.len()));
        for (id, item) in self.iter() {
            out.push_str(&format!(
                "{}|{}|{}|{}\n",
                id,
                escape_field(item.word()),
                encode_meanings(item.meanings()),
                escape_field(item.example()),
            ));
        }
        out
    }

    /// Reconstructs a library from text produced by [`to_text`](Self::to_text).
    ///
    /// Best-effort: lines with a non-numeric id, fewer than three fields or
    /// a word the library already holds are skipped with a diagnostic and
    /// parsing continues. `next_id` ends up past the highest accepted id.
    pub fn from_text(text: &str) -> WordLib {
        let mut lib = WordLib::new();
        for (line_no, line) in text.lines().enumerate() {
            let lead = line.trim_start();
            if lead.is_empty() || lead.starts_with('#') {
                continue;
            }

            // Split the raw line: field content is escaped, and trailing
            // whitespace in the example field is data. Only the id field
            // tolerates padding.
            let fields: Vec<&str> = line.split('|').collect();
            if fields.len() < 3 {
                tracing::warn!(line = line_no + 1, "skipping line with too few fields");
                continue;
            }

            let id = match fields[0].trim().parse() {
                Ok(id) => id,
                Err(_) => {
                    tracing::warn!(
                        line = line_no + 1,
                        raw = fields[0],
                        "skipping line with non-numeric id"
                    );
                    continue;
                }
            };

            let item = WordItem::with_parts(
                unescape_field(fields[1]),
                WordItemParts {
                    meanings: decode_meanings(fields[2]),
                    example: fields.get(3).map(|f| unescape_field(f)).unwrap_or_default(),
                },
            );

            if let Err(err) = lib.insert_with_id(id, item) {
                tracing::warn!(line = line_no + 1, %err, "skipping conflicting line");
            }
        }
        lib
    }
}
