use wordlib_types::WordId;

/// Store-level failures. Both are local and recoverable; callers branch on
/// them instead of unwinding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("word `{word}` is already in the library under a different id")]
    DuplicateWord { word: String },

    #[error("no word item with id {0}")]
    UnknownId(WordId),

    #[error("id {0} is already taken")]
    DuplicateId(WordId),
}
