// File: src/config.rs
// Purpose: Validation limits parsed from ataa.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tunable validation limits. The backend owns the authoritative
/// rules; these only shape the client-side gate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Limits {
    /// Minimum character count for person and organization names
    #[serde(default = "default_name_min_len")]
    pub name_min_len: usize,

    /// Minimum applicant age in years
    #[serde(default = "default_min_age")]
    pub min_age: u32,

    /// Character bounds for free-text descriptions
    #[serde(default = "default_description_min_len")]
    pub description_min_len: usize,

    #[serde(default = "default_description_max_len")]
    pub description_max_len: usize,

    /// Upload ceiling in megabytes
    #[serde(default = "default_max_file_mb")]
    pub max_file_mb: u64,

    /// Accepted upload MIME patterns; `*` subtypes are wildcards
    #[serde(default = "default_allowed_file_types")]
    pub allowed_file_types: Vec<String>,
}

impl Limits {
    /// Load limits from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read limits file: {}", path.display()))?;
        let limits: Limits = toml::from_str(&content)
            .with_context(|| format!("Failed to parse limits file: {}", path.display()))?;
        Ok(limits)
    }

    /// Load limits from a file if it exists, defaults otherwise
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            name_min_len: default_name_min_len(),
            min_age: default_min_age(),
            description_min_len: default_description_min_len(),
            description_max_len: default_description_max_len(),
            max_file_mb: default_max_file_mb(),
            allowed_file_types: default_allowed_file_types(),
        }
    }
}

fn default_name_min_len() -> usize {
    3
}

fn default_min_age() -> u32 {
    18
}

fn default_description_min_len() -> usize {
    10
}

fn default_description_max_len() -> usize {
    1000
}

fn default_max_file_mb() -> u64 {
    5
}

fn default_allowed_file_types() -> Vec<String> {
    vec!["image/*".to_string(), "application/pdf".to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let limits = Limits::default();
        assert_eq!(limits.name_min_len, 3);
        assert_eq!(limits.min_age, 18);
        assert_eq!(limits.max_file_mb, 5);
        assert_eq!(
            limits.allowed_file_types,
            vec!["image/*".to_string(), "application/pdf".to_string()]
        );
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let limits: Limits = toml::from_str("min_age = 21\nmax_file_mb = 10\n").unwrap();
        assert_eq!(limits.min_age, 21);
        assert_eq!(limits.max_file_mb, 10);
        assert_eq!(limits.name_min_len, 3);
        assert_eq!(limits.description_max_len, 1000);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let limits = Limits::load_or_default("does-not-exist.toml").unwrap();
        assert_eq!(limits.min_age, Limits::default().min_age);
    }
}
