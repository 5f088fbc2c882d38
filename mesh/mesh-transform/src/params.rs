//! Parameters for the random augmentations.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Default range for per-axis scale factors, half-open.
pub const DEFAULT_SCALE_RANGE: (f64, f64) = (0.5, 1.5);

/// Default noise standard deviation as a fraction of the mesh extent.
pub const DEFAULT_NOISE_FRACTION: f64 = 0.02;

/// Parameters controlling the random augmentations.
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentParams {
    /// Optional seed for reproducible results.
    pub seed: Option<u64>,

    /// Half-open range `[low, high)` for per-axis scale factors. Default: `[0.5, 1.5)`
    pub scale_range: (f64, f64),

    /// Noise standard deviation as a fraction of the largest absolute
    /// coordinate. Default: 0.02
    pub noise_fraction: f64,
}

impl Default for AugmentParams {
    fn default() -> Self {
        Self {
            seed: None,
            scale_range: DEFAULT_SCALE_RANGE,
            noise_fraction: DEFAULT_NOISE_FRACTION,
        }
    }
}

impl AugmentParams {
    /// Create parameters with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a random seed for reproducibility.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the per-axis scale factor range.
    #[must_use]
    pub const fn with_scale_range(mut self, low: f64, high: f64) -> Self {
        self.scale_range = (low, high);
        self
    }

    /// Set the noise fraction.
    #[must_use]
    pub const fn with_noise_fraction(mut self, fraction: f64) -> Self {
        self.noise_fraction = fraction;
        self
    }

    /// Build the random source these parameters describe.
    ///
    /// A seed yields a deterministic `ChaCha8Rng`; without one the generator
    /// is seeded from the operating system.
    #[must_use]
    pub fn rng(&self) -> Box<dyn RngCore> {
        match self.seed {
            Some(seed) => Box::new(ChaCha8Rng::seed_from_u64(seed)),
            None => Box::new(ChaCha8Rng::from_entropy()),
        }
    }
}
