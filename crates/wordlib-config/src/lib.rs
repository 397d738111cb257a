use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_extension() -> String {
    "dat".to_string()
}

/// Where libraries live on disk and which one the host opens first.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Directory scanned for library files.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Library file extension, without the dot.
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Library selected at startup, if any.
    #[serde(default)]
    pub current_library: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            extension: default_extension(),
            current_library: None,
        }
    }
}

impl StoreConfig {
    /// Defaults with `WORDLIB_DATA_DIR` / `WORDLIB_CURRENT` overrides
    /// applied on top.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(dir) = env::var("WORDLIB_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Ok(name) = env::var("WORDLIB_CURRENT") {
            config.current_library = Some(name);
        }
        config
    }
}
