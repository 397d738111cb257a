//! Named-library registry owned by the host application.
//!
//! Created once at startup from a [`StoreConfig`], handed by reference to
//! whatever needs it, dropped at shutdown. There is deliberately no global
//! state here.

use std::collections::BTreeMap;
use std::fs;

use anyhow::{bail, Context};
use wordlib_config::StoreConfig;
use wordlib_core::WordLib;

use crate::files::{load_library, save_library};

/// All libraries the host knows about, keyed by name, plus the current
/// selection.
#[derive(Debug, Default)]
pub struct LibraryRegistry {
    libraries: BTreeMap<String, WordLib>,
    current: Option<String>,
}

impl LibraryRegistry {
    /// Empty registry with nothing loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans `config.data_dir` for library files and loads each one. A file
    /// that fails to decode is logged and replaced by an empty library, so
    /// one bad file never takes the whole registry down. The configured
    /// current library is selected when present.
    pub fn open(config: &StoreConfig) -> anyhow::Result<Self> {
        let mut registry = Self::new();

        let suffix = format!(".{}", config.extension);
        let mut names = Vec::new();
        match fs::read_dir(&config.data_dir) {
            Ok(entries) => {
                for entry in entries {
                    let entry = entry.context("reading data dir entry")?;
                    if !entry
                        .file_type()
                        .context("reading data dir entry type")?
                        .is_file()
                    {
                        continue;
                    }
                    let file_name = entry.file_name().to_string_lossy().into_owned();
                    if let Some(name) = file_name.strip_suffix(&suffix) {
                        names.push(name.to_string());
                    }
                }
            }
            Err(err) => {
                tracing::warn!(dir = %config.data_dir.display(), %err, "data dir not readable, starting empty");
            }
        }
        names.sort();
        tracing::info!(count = names.len(), "found library files");

        for name in names {
            let lib = match load_library(config, &name) {
                Ok(lib) => lib,
                Err(err) => {
                    tracing::error!(name = %name, %err, "failed to load library, using empty");
                    WordLib::new()
                }
            };
            registry.libraries.insert(name, lib);
        }

        if let Some(wanted) = &config.current_library {
            if registry.libraries.contains_key(wanted) {
                registry.current = Some(wanted.clone());
            } else {
                tracing::warn!(name = %wanted, "configured current library not found");
            }
        }
        if registry.current.is_none() {
            // fall back to the first library, if any
            registry.current = registry.libraries.keys().next().cloned();
        }

        Ok(registry)
    }

    /// Registers an empty library under `name` and creates its file.
    /// Fails if the name is already taken.
    pub fn create(&mut self, config: &StoreConfig, name: &str) -> anyhow::Result<()> {
        if self.libraries.contains_key(name) {
            bail!("library `{name}` already exists");
        }
        let lib = WordLib::new();
        save_library(config, name, &lib)?;
        self.libraries.insert(name.to_string(), lib);
        if self.current.is_none() {
            self.current = Some(name.to_string());
        }
        Ok(())
    }

    pub fn names(&self) -> Vec<&str> {
        self.libraries.keys().map(String::as_str).collect()
    }

    pub fn get(&self, name: &str) -> Option<&WordLib> {
        self.libraries.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut WordLib> {
        self.libraries.get_mut(name)
    }

    pub fn len(&self) -> usize {
        self.libraries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.libraries.is_empty()
    }

    /// Selects the current library. Fails on an unknown name.
    pub fn set_current(&mut self, name: &str) -> anyhow::Result<()> {
        if !self.libraries.contains_key(name) {
            bail!("library `{name}` is not registered");
        }
        self.current = Some(name.to_string());
        Ok(())
    }

    pub fn current_name(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn current(&self) -> Option<&WordLib> {
        self.libraries.get(self.current.as_ref()?)
    }

    pub fn current_mut(&mut self) -> Option<&mut WordLib> {
        self.libraries.get_mut(self.current.as_ref()?)
    }

    /// Saves one library back to disk.
    pub fn save(&self, config: &StoreConfig, name: &str) -> anyhow::Result<()> {
        let lib = self
            .libraries
            .get(name)
            .with_context(|| format!("library `{name}` is not registered"))?;
        save_library(config, name, lib)
    }

    /// Saves every registered library. The first failure aborts the pass.
    pub fn save_all(&self, config: &StoreConfig) -> anyhow::Result<()> {
        for (name, lib) in &self.libraries {
            save_library(config, name, lib)?;
        }
        Ok(())
    }
}
