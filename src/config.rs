use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// Sampling weights for words, numbers and punctuation marks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Distribution {
    pub word: i64,
    pub number: i64,
    pub period: i64,
    pub comma: i64,
    pub quotation: i64,
    pub question: i64,
    pub exclamation: i64,
    pub brackets: i64,
    pub braces: i64,
    pub parenthesis: i64,
    pub colon: i64,
    pub semicolon: i64,
}

impl Default for Distribution {
    fn default() -> Self {
        Self {
            word: 85,
            number: 7,
            period: 12,
            comma: 8,
            quotation: 3,
            question: 4,
            exclamation: 3,
            brackets: 2,
            braces: 2,
            parenthesis: 3,
            colon: 3,
            semicolon: 2,
        }
    }
}

impl Distribution {
    pub fn zeroed() -> Self {
        Self {
            word: 0,
            number: 0,
            period: 0,
            comma: 0,
            quotation: 0,
            question: 0,
            exclamation: 0,
            brackets: 0,
            braces: 0,
            parenthesis: 0,
            colon: 0,
            semicolon: 0,
        }
    }

    fn entries(&self) -> [(&'static str, i64); 12] {
        [
            ("word", self.word),
            ("number", self.number),
            ("period", self.period),
            ("comma", self.comma),
            ("quotation", self.quotation),
            ("question", self.question),
            ("exclamation", self.exclamation),
            ("brackets", self.brackets),
            ("braces", self.braces),
            ("parenthesis", self.parenthesis),
            ("colon", self.colon),
            ("semicolon", self.semicolon),
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(rename = "dict", default = "default_dictionary")]
    pub dictionary: String,
    #[serde(rename = "top", default = "default_top_words")]
    pub top_words: usize,
    #[serde(rename = "count", default = "default_word_count")]
    pub word_count: usize,
    #[serde(default = "default_width")]
    pub width: usize,
    #[serde(rename = "nums", default)]
    pub numbers: bool,
    #[serde(rename = "punct", default = "default_punctuation")]
    pub punctuation: bool,
    #[serde(rename = "freqs", default)]
    pub distribution: Distribution,
}

fn default_dictionary() -> String {
    "english".to_string()
}
fn default_top_words() -> usize {
    100
}
fn default_word_count() -> usize {
    20
}
fn default_width() -> usize {
    50
}
fn default_punctuation() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: default_dictionary(),
            top_words: default_top_words(),
            word_count: default_word_count(),
            width: default_width(),
            numbers: false,
            punctuation: default_punctuation(),
            distribution: Distribution::default(),
        }
    }
}

impl Config {
    /// Loads the user config, or the defaults when no config file exists yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("typegrid")
            .join("config.json")
    }

    /// Rejects settings the generator cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            bail!("width must be at least 1");
        }
        if self.top_words == 0 {
            bail!("top word count must be at least 1");
        }
        for (name, weight) in self.distribution.entries() {
            if weight < 0 {
                bail!("weight for {name} must not be negative, got {weight}");
            }
        }
        if self.numbers && self.distribution.number > 100 {
            bail!(
                "number weight is a percentage, got {}",
                self.distribution.number
            );
        }
        Ok(())
    }
}
