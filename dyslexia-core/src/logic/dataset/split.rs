//! Train/Test Splitter
//!
//! Shuffles samples with a seeded RNG and holds out `ceil(n * test_ratio)`
//! of them for evaluation. The same seed always yields the same split.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::DatasetError;

/// Shuffle `samples` and split into (train, test)
pub fn train_test_split<T>(
    mut samples: Vec<T>,
    test_ratio: f64,
    seed: u64,
) -> Result<(Vec<T>, Vec<T>), DatasetError> {
    if !(test_ratio > 0.0 && test_ratio < 1.0) {
        return Err(DatasetError::InvalidRatio(test_ratio));
    }

    let total = samples.len();
    let test_len = ((total as f64) * test_ratio).ceil() as usize;
    if total < 2 || test_len >= total {
        return Err(DatasetError::TooFewSamples(total));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    samples.shuffle(&mut rng);

    let test = samples.split_off(total - test_len);

    log::debug!(
        "Dataset split: {} training, {} test (seed {})",
        samples.len(),
        test.len(),
        seed
    );

    Ok((samples, test))
}
