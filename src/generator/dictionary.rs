use std::fs;
use std::path::{Path, PathBuf};

use rust_embed::Embed;
use serde::Deserialize;
use thiserror::Error;

#[derive(Embed)]
#[folder = "assets/dictionaries/"]
struct DictionaryAssets;

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("unknown dictionary {0:?}")]
    Unknown(String),
    #[error("dictionary {0:?} is not valid UTF-8")]
    Encoding(String),
    #[error("failed to read vocabulary file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse vocabulary file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("vocabulary is empty")]
    Empty,
}

/// Vocabulary file layout: `{"words": ["most", "frequent", "first"]}`.
#[derive(Deserialize)]
struct VocabularyFile {
    words: Vec<String>,
}

/// A frequency-ranked word list, most frequent word first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    pub fn new(words: Vec<String>) -> Result<Self, DictionaryError> {
        let words: Vec<String> = words
            .into_iter()
            .map(|w| w.trim().to_string())
            .filter(|w| !w.is_empty())
            .collect();
        if words.is_empty() {
            return Err(DictionaryError::Empty);
        }
        Ok(Self { words })
    }

    /// Loads a bundled list (one word per line) and keeps its `top` entries.
    pub fn embedded(name: &str, top: usize) -> Result<Self, DictionaryError> {
        let file = DictionaryAssets::get(&format!("{name}.txt"))
            .ok_or_else(|| DictionaryError::Unknown(name.to_string()))?;
        let content = std::str::from_utf8(file.data.as_ref())
            .map_err(|_| DictionaryError::Encoding(name.to_string()))?;

        Self::new(content.lines().take(top).map(str::to_string).collect())
    }

    /// Loads a JSON vocabulary file and keeps its `top` entries.
    pub fn from_file(path: &Path, top: usize) -> Result<Self, DictionaryError> {
        let content = fs::read_to_string(path).map_err(|source| DictionaryError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let parsed: VocabularyFile =
            serde_json::from_str(&content).map_err(|source| DictionaryError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        Self::new(parsed.words.into_iter().take(top).collect())
    }

    pub fn available() -> Vec<String> {
        let mut names: Vec<String> = DictionaryAssets::iter()
            .filter_map(|f| f.strip_suffix(".txt").map(|n| n.to_string()))
            .collect();
        names.sort();
        names
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
