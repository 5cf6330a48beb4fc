//! Random selection of recommendation targets.

use crate::config::{RECOMMENDATION_COUNT, TOTAL_POKEMON};
use crate::error::SampleError;
use rand::seq::index;
use rand::Rng;

/// Draw `count` distinct ids uniformly from `1..=universe`.
pub fn sample_ids<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    universe: u32,
) -> Result<Vec<u32>, SampleError> {
    if count > universe as usize {
        return Err(SampleError::CountExceedsUniverse { count, universe });
    }

    Ok(index::sample(rng, universe as usize, count)
        .into_iter()
        .map(|i| i as u32 + 1)
        .collect())
}

/// Ids for one batch of recommendations, drawn with the thread RNG.
pub fn sample_recommendation_ids() -> Result<Vec<u32>, SampleError> {
    sample_ids(&mut rand::rng(), RECOMMENDATION_COUNT, TOTAL_POKEMON)
}
