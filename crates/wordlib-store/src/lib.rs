pub mod files;
pub mod registry;

pub use files::{library_path, load_library, save_library};
pub use registry::LibraryRegistry;
