//! Random sources for ticket generation.

use rand::rngs::ThreadRng;
use rand::seq::index;
use rand::Rng;

/// Supplies uniform unique subsets of an integer range.
///
/// Implementations must return `count` distinct integers in `[low, high]`,
/// uniform over all combinations. The generator checks the result and
/// reports a violation as a generation error.
pub trait RandomSource {
    fn pick_unique_subset(&mut self, low: u8, high: u8, count: usize) -> Vec<u8>;
}

/// [`RandomSource`] backed by a `rand` RNG
#[derive(Debug, Clone)]
pub struct RngSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<ThreadRng> {
    /// Source over the thread-local RNG
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn pick_unique_subset(&mut self, low: u8, high: u8, count: usize) -> Vec<u8> {
        if high < low {
            return Vec::new();
        }
        let span = (high - low) as usize + 1;
        // Asking for more than the range holds yields a short pick, which the
        // generator rejects.
        let amount = count.min(span);

        index::sample(&mut self.rng, span, amount)
            .into_iter()
            .map(|offset| low + offset as u8)
            .collect()
    }
}
