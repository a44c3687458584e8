//! Dotenv-style key/value store backing the quiz configuration.
//!
//! # Responsibilities
//! - Load `KEY=value` entries from disk, tolerating a missing or broken file
//! - Rewrite the whole file when a single key changes
//!
//! # Design Decisions
//! - The process environment is never touched; the store is an owned value
//! - Memory and disk are not updated transactionally: a failed write leaves
//!   the in-memory entry updated and the file stale

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ConfigError;

/// Default location of the env file.
pub const DEFAULT_ENV_PATH: &str = ".env";

/// In-memory copy of an env file plus the path it is persisted to.
#[derive(Debug, Clone, Default)]
pub struct EnvStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl EnvStore {
    /// Create an empty store that persists to `path`.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: BTreeMap::new(),
        }
    }

    /// Load the store, falling back to an empty one if the file is missing
    /// or malformed.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(store) => {
                tracing::debug!(path = %path.display(), entries = store.len(), "Env file loaded");
                store
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Could not load env file, continuing with empty configuration"
                );
                Self::empty(path)
            }
        }
    }

    /// Load the store, failing on a missing or malformed file.
    pub fn try_load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        // `from_path` would export every entry into the process environment.
        #[allow(deprecated)]
        let iter = dotenv::from_path_iter(path).map_err(|e| match e {
            dotenv::Error::Io(io) => ConfigError::Io(io),
            other => ConfigError::Parse(other.to_string()),
        })?;

        let mut entries = BTreeMap::new();
        for item in iter {
            let (key, value) = item.map_err(|e| ConfigError::Parse(e.to_string()))?;
            entries.insert(key, value);
        }

        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    /// Value for `key`, or the empty string if it is absent.
    pub fn get(&self, key: &str) -> &str {
        self.entries.get(key).map(String::as_str).unwrap_or("")
    }

    /// All entries, sorted by key.
    pub fn entries(&self) -> &BTreeMap<String, String> {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Set `key` in memory, then rewrite the whole file.
    ///
    /// On a write error the in-memory value is kept and the error returned;
    /// the caller decides whether that is worth more than a log line.
    pub fn update(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()
    }

    /// Write every entry to disk via a sibling temp file and a rename.
    pub fn persist(&self) -> Result<(), ConfigError> {
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, self.render()).map_err(ConfigError::Io)?;
        fs::rename(&tmp, &self.path).map_err(ConfigError::Io)?;
        tracing::debug!(path = %self.path.display(), "Env file written");
        Ok(())
    }

    fn render(&self) -> String {
        let mut out = String::new();
        for (key, value) in &self.entries {
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(&escape(value));
            out.push_str("\"\n");
        }
        out
    }
}

/// Escape a value for a double-quoted dotenv string.
fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '$' => escaped.push_str("\\$"),
            '\n' => escaped.push_str("\\n"),
            c => escaped.push(c),
        }
    }
    escaped
}
