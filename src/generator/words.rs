use log::debug;
use rand::rngs::SmallRng;

use crate::config::{Config, Distribution};
use crate::generator::TextGenerator;
use crate::generator::dictionary::Dictionary;
use crate::generator::numbers;
use crate::generator::punctuate;
use crate::generator::weighted::{self, DistributionError};

/// Builds the word list for one typing test: rank-weighted sampling from the
/// dictionary, then the optional number and punctuation passes.
#[derive(Clone, Debug)]
pub struct WordListGenerator {
    dictionary: Dictionary,
    word_count: usize,
    numbers: bool,
    punctuation: bool,
    distribution: Distribution,
}

impl WordListGenerator {
    pub fn new(dictionary: Dictionary, config: &Config) -> Self {
        Self {
            dictionary,
            word_count: config.word_count,
            numbers: config.numbers,
            punctuation: config.punctuation,
            distribution: config.distribution.clone(),
        }
    }
}

impl TextGenerator for WordListGenerator {
    fn generate(&mut self, rng: &mut SmallRng) -> Result<Vec<String>, DistributionError> {
        let mut words = weighted::rank_weighted(self.dictionary.words(), self.word_count, rng)?;

        if self.numbers {
            words = numbers::apply_numbers(&words, self.distribution.number, rng)?;
        }

        if self.punctuation {
            words = punctuate::apply_punctuation(&words, &self.distribution, rng)?;
        }

        debug!(
            "generated {} words (numbers: {}, punctuation: {})",
            words.len(),
            self.numbers,
            self.punctuation
        );
        Ok(words)
    }
}
