//! Tokenizer configuration.
//!
//! Loaded from a TOML file such as
//!
//! ```toml
//! [tokenizer]
//! backend = "remote"
//! url = "http://127.0.0.1:8765/tokenize"
//! timeout_ms = 2000
//! ```
//!
//! Missing entries fall back to defaults.

use crate::{tokenizer::Tokenize, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub tokenizer: TokenizerConfig,
}

/// Where guessed readings come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Backend {
    /// Load the dictionary into this process.
    #[default]
    InProcess,
    /// Ask a resident analyser service.
    Remote,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TokenizerConfig {
    #[serde(default)]
    pub backend: Backend,
    #[serde(default = "default_dictionary")]
    pub dictionary: PathBuf,
    #[serde(default = "default_reading_field")]
    pub reading_field: usize,
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_dictionary() -> PathBuf {
    PathBuf::from("ipadic-mecab-2_7_0/system.dic")
}

fn default_reading_field() -> usize {
    7
}

fn default_url() -> String {
    "http://127.0.0.1:8765/tokenize".to_string()
}

fn default_timeout_ms() -> u64 {
    2000
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            dictionary: default_dictionary(),
            reading_field: default_reading_field(),
            url: default_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl TokenizerConfig {
    /// Builds the configured tokenizer.
    pub fn build(&self) -> Result<Box<dyn Tokenize>> {
        info!(backend = ?self.backend, "building tokenizer");
        match self.backend {
            #[cfg(feature = "vibrato")]
            Backend::InProcess => Ok(Box::new(crate::tokenizer::VibratoTokenizer::from_path(
                &self.dictionary,
                self.reading_field,
            )?)),
            #[cfg(feature = "remote")]
            Backend::Remote => Ok(Box::new(crate::tokenizer::RemoteTokenizer::new(
                self.url.clone(),
                std::time::Duration::from_millis(self.timeout_ms),
            )?)),
            #[allow(unreachable_patterns)]
            backend => Err(crate::Error::Backend(backend)),
        }
    }
}

/// Parses a configuration from TOML.
pub fn parse_config(contents: &str) -> Result<Config> {
    Ok(toml::from_str(contents)?)
}

/// Loads the configuration at `path`, using the defaults if there is no file there.
pub fn load_config(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(contents) => parse_config(&contents),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "no config file, using defaults");
            Ok(Config::default())
        }
        Err(err) => Err(err.into()),
    }
}
