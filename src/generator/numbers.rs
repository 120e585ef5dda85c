use rand::Rng;
use rand::rngs::SmallRng;

use crate::generator::weighted::{DistributionError, weighted};

pub const MIN_NUMBER: u32 = 1;
pub const MAX_NUMBER: u32 = 9999;

/// Post-processing pass that replaces words with numbers.
///
/// Each position is swapped for a number in `MIN_NUMBER..=MAX_NUMBER` with a
/// chance of `weight` out of 100. A weight outside `0..=100` makes one side of
/// the coin negative and is rejected as an invalid distribution.
pub fn apply_numbers(
    words: &[String],
    weight: i64,
    rng: &mut SmallRng,
) -> Result<Vec<String>, DistributionError> {
    let flips = weighted(words.len(), [(false, 100 - weight), (true, weight)], rng)?;

    Ok(words
        .iter()
        .zip(flips)
        .map(|(word, is_number)| {
            if is_number {
                rng.gen_range(MIN_NUMBER..=MAX_NUMBER).to_string()
            } else {
                word.clone()
            }
        })
        .collect())
}
