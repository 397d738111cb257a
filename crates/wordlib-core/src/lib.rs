pub mod codec;
pub mod error;
pub mod normalize;
pub mod root;
pub mod store;

pub use error::StoreError;
pub use root::WordRoot;
pub use store::WordLib;
pub use wordlib_types::{Category, Meaning, WordId, WordItem, WordItemParts};
