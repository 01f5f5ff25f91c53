// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Client options.
//!
//! Supports both programmatic and YAML file-based configuration. Options
//! are immutable once handed to a sender; to change the global tags,
//! build a new value.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use fluxline::TagSet;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Client options: target address and the global tag layer.
///
/// The global tags are the lowest-precedence tag layer and are prepended
/// to every line the client writes.
#[derive(Debug, Clone)]
pub struct Options {
    /// Target host name or address.
    pub host: String,
    /// Target UDP port.
    pub port: u16,
    /// Global tags, applied to every point in insertion order.
    pub tags: TagSet,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            tags: TagSet::new(),
        }
    }
}

/// On-disk form. Tags are a sequence so their order survives parsing.
#[derive(Debug, Deserialize)]
struct RawOptions {
    #[serde(default = "default_host")]
    host: String,
    #[serde(default = "default_port")]
    port: u16,
    #[serde(default)]
    tags: Vec<RawTag>,
}

#[derive(Debug, Deserialize)]
struct RawTag {
    key: String,
    value: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8089
}

impl Options {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            tags: TagSet::new(),
        }
    }

    /// Add a global tag.
    pub fn tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key, value);
        self
    }

    /// Parse options from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, OptionsError> {
        let raw: RawOptions = serde_yaml::from_str(yaml)?;
        let mut tags = TagSet::new();
        for entry in raw.tags {
            tags.insert(entry.key, entry.value);
        }
        Ok(Self {
            host: raw.host,
            port: raw.port,
            tags,
        })
    }

    /// Parse options from a YAML file.
    pub fn from_file(path: &Path) -> Result<Self, OptionsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FULL_YAML: &str = r#"
host: "metrics.internal"
port: 4444
tags:
  - key: dc
    value: eu-west
  - key: zone
    value: "1c"
"#;

    #[test]
    fn test_options_defaults() {
        let options = Options::default();
        assert_eq!(options.host, "127.0.0.1");
        assert_eq!(options.port, 8089);
        assert!(options.tags.is_empty());
    }

    #[test]
    fn test_options_builder_tags() {
        let options = Options::new("10.0.0.1", 8089)
            .tag("dc", "eu-west")
            .tag("env", "prod");
        assert_eq!(options.tags.len(), 2);
    }

    #[test]
    fn test_options_from_yaml_preserves_tag_order() {
        let options = Options::from_yaml(FULL_YAML).expect("parse yaml");
        assert_eq!(options.host, "metrics.internal");
        assert_eq!(options.port, 4444);

        let keys: Vec<&str> = options.tags.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["dc", "zone"]);
    }

    #[test]
    fn test_options_from_yaml_defaults_for_missing_keys() {
        let options = Options::from_yaml("tags: []").expect("parse yaml");
        assert_eq!(options.host, "127.0.0.1");
        assert_eq!(options.port, 8089);
        assert!(options.tags.is_empty());
    }

    #[test]
    fn test_options_from_yaml_rejects_garbage() {
        assert!(matches!(
            Options::from_yaml("port: \"not a number\""),
            Err(OptionsError::Yaml(_))
        ));
    }

    #[test]
    fn test_options_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(FULL_YAML.as_bytes()).expect("write yaml");

        let options = Options::from_file(file.path()).expect("load file");
        assert_eq!(options.host, "metrics.internal");
        assert_eq!(options.tags.len(), 2);
    }

    #[test]
    fn test_options_from_file_missing_path() {
        assert!(matches!(
            Options::from_file(Path::new("/nonexistent/options.yaml")),
            Err(OptionsError::Io(_))
        ));
    }
}
