pub mod category;
pub mod item;
pub mod meaning;

pub use category::Category;
pub use item::{WordItem, WordItemParts};
pub use meaning::Meaning;

/// Library-assigned word id. Ids start at 1 and are never reused within
/// one library instance.
pub type WordId = u32;
