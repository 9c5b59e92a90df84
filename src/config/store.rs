//! Thread-safe configuration storage.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::config::types::Config;

/// Shared config container handed to the shell.
///
/// Reads clone the current snapshot; the lock is only held for the copy.
#[derive(Clone)]
pub struct ConfigStore {
    inner: Arc<RwLock<Config>>,
    path: PathBuf,
}

impl ConfigStore {
    /// Create a new ConfigStore from initial config and path.
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
            path,
        }
    }

    /// Get a clone of the current config.
    pub fn get(&self) -> Config {
        self.inner.read().expect("config lock poisoned").clone()
    }

    /// Get the config file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
