pub mod dictionary;
pub mod numbers;
pub mod punctuate;
pub mod weighted;
pub mod words;

use rand::rngs::SmallRng;

use crate::generator::weighted::DistributionError;

pub trait TextGenerator {
    fn generate(&mut self, rng: &mut SmallRng) -> Result<Vec<String>, DistributionError>;
}
