//! Dotenv-style credential lookup
//!
//! The file is parsed into a read-only table; the process environment is never
//! modified and always takes precedence over file values.

use crate::io::configuration::API_KEY_VAR;
use crate::io::error::{BrandError, Result, file_system};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Key-value pairs read from a dotenv file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvFile {
    values: HashMap<String, String>,
}

impl EnvFile {
    /// Read a dotenv file, treating a missing file as empty
    ///
    /// # Errors
    ///
    /// Returns a file system error when the file exists but cannot be read
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            debug!(path = %path.display(), "env file not found");
            return Ok(Self::default());
        }
        let contents =
            std::fs::read_to_string(path).map_err(|e| file_system(path, "read env file", e))?;
        Ok(Self::parse(&contents))
    }

    /// Parse `KEY=VALUE` lines, ignoring blanks, comments and malformed lines
    ///
    /// The first definition of a key wins.
    pub fn parse(contents: &str) -> Self {
        let mut values = HashMap::new();
        for line in contents.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            let value = value.trim().trim_matches('"').trim_matches('\'');
            values
                .entry(key.to_string())
                .or_insert_with(|| value.to_string());
        }
        Self { values }
    }

    /// Value stored in the file for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Process environment value for `key`, falling back to the file
    pub fn lookup(&self, key: &str) -> Option<String> {
        std::env::var(key)
            .ok()
            .filter(|value| !value.is_empty())
            .or_else(|| self.get(key).map(str::to_string))
    }
}

/// Resolve the vision API key from the CLI flag, process environment, then env file
///
/// # Errors
///
/// Returns [`BrandError::MissingApiKey`] when no non-empty key is found
pub fn resolve_api_key(explicit: Option<&str>, env_file: &EnvFile) -> Result<String> {
    explicit
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(str::to_string)
        .or_else(|| env_file.lookup(API_KEY_VAR))
        .filter(|key| !key.is_empty())
        .ok_or(BrandError::MissingApiKey)
}
