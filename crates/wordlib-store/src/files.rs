//! Reading and writing library files in the flat-text format.
//!
//! The codec itself lives in `wordlib-core`; this layer only moves the
//! already-materialized text to and from disk.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tempfile::NamedTempFile;
use wordlib_config::StoreConfig;
use wordlib_core::WordLib;

/// `<data_dir>/<name>.<extension>`
pub fn library_path(config: &StoreConfig, name: &str) -> PathBuf {
    config.data_dir.join(format!("{name}.{}", config.extension))
}

/// Reads and decodes one library file. A missing or unreadable file is an
/// error the caller can branch on; malformed lines inside the file are
/// handled by the codec (skipped with diagnostics).
pub fn load_library(config: &StoreConfig, name: &str) -> anyhow::Result<WordLib> {
    let path = library_path(config, name);
    let text = fs::read_to_string(&path)
        .with_context(|| format!("reading library file {}", path.display()))?;
    let lib = WordLib::from_text(&text);
    tracing::info!(name, words = lib.len(), "loaded library");
    Ok(lib)
}

/// Encodes and writes one library atomically: the text goes to a temp file
/// in the target directory first, then replaces the target in one rename.
pub fn save_library(config: &StoreConfig, name: &str, lib: &WordLib) -> anyhow::Result<()> {
    let path = library_path(config, name);
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir).with_context(|| format!("creating data dir {}", dir.display()))?;

    let mut temp = NamedTempFile::new_in(dir).context("creating temp library file")?;
    temp.write_all(lib.to_text().as_bytes())
        .context("writing library text")?;
    temp.persist(&path)
        .with_context(|| format!("replacing library file {}", path.display()))?;

    tracing::info!(name, words = lib.len(), "saved library");
    Ok(())
}
