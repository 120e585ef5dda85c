use rand::Rng;
use rand::rngs::SmallRng;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DistributionError {
    #[error("invalid distribution: weights must be non-negative and sum above zero")]
    InvalidDistribution,
}

/// Draws symbols with probability proportional to their integer weight.
///
/// Symbols keep the order they were given in; the cumulative table is built
/// once and reused for every draw.
#[derive(Clone, Debug)]
pub struct WeightedSampler<T> {
    symbols: Vec<T>,
    cumulative: Vec<u64>,
    total: u64,
}

impl<T: Clone> WeightedSampler<T> {
    pub fn new<I>(weights: I) -> Result<Self, DistributionError>
    where
        I: IntoIterator<Item = (T, i64)>,
    {
        let mut symbols = Vec::new();
        let mut cumulative = Vec::new();
        let mut total: u64 = 0;

        for (symbol, weight) in weights {
            if weight < 0 {
                return Err(DistributionError::InvalidDistribution);
            }
            total = total
                .checked_add(weight as u64)
                .ok_or(DistributionError::InvalidDistribution)?;
            symbols.push(symbol);
            cumulative.push(total);
        }

        if total == 0 {
            return Err(DistributionError::InvalidDistribution);
        }

        Ok(Self {
            symbols,
            cumulative,
            total,
        })
    }

    pub fn draw(&self, rng: &mut SmallRng) -> T {
        let n = rng.gen_range(1..=self.total);
        // Zero-weight symbols share their predecessor's cumulative value, so
        // the first index reaching `n` is always a symbol with weight > 0.
        let idx = self.cumulative.partition_point(|&sum| sum < n);
        self.symbols[idx].clone()
    }

    pub fn sample(&self, amount: usize, rng: &mut SmallRng) -> Vec<T> {
        (0..amount).map(|_| self.draw(rng)).collect()
    }
}

/// One-shot weighted draw of `amount` symbols.
pub fn weighted<T, I>(
    amount: usize,
    weights: I,
    rng: &mut SmallRng,
) -> Result<Vec<T>, DistributionError>
where
    T: Clone,
    I: IntoIterator<Item = (T, i64)>,
{
    Ok(WeightedSampler::new(weights)?.sample(amount, rng))
}

/// Samples `amount` words from a frequency-ranked vocabulary (most frequent
/// first). The word at rank `i` of `m` words gets weight `m - i`.
pub fn rank_weighted(
    words: &[String],
    amount: usize,
    rng: &mut SmallRng,
) -> Result<Vec<String>, DistributionError> {
    let m = words.len() as i64;
    let sampler = WeightedSampler::new(
        words
            .iter()
            .enumerate()
            .map(|(rank, word)| (word.as_str(), m - rank as i64)),
    )?;

    Ok(sampler
        .sample(amount, rng)
        .into_iter()
        .map(str::to_string)
        .collect())
}
