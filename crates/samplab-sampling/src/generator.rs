use rand::Rng;
use rand_distr::Distribution as _;

use crate::params::StudyConfig;

/// A batch of independent samples from the study population.
///
/// Stored row-major: row `i` is the `i`-th sample of `sample_size` values.
#[derive(Debug, Clone)]
pub struct SampleBatch {
    values: Vec<f64>,
    n_samples: usize,
    sample_size: usize,
}

impl SampleBatch {
    /// Draws `n_samples x sample_size` i.i.d. Gamma(shape, scale) values.
    ///
    /// The batch is only as reproducible as `rng`: pass a seeded generator to
    /// repeat a run.
    pub fn generate<R>(rng: &mut R, config: &StudyConfig) -> Self
    where
        R: Rng + ?Sized,
    {
        let sampler = config.params().sampler();
        let len = config.n_samples() * config.sample_size();
        let values = (0..len).map(|_| sampler.sample(rng)).collect();
        Self {
            values,
            n_samples: config.n_samples(),
            sample_size: config.sample_size(),
        }
    }

    #[must_use]
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    #[must_use]
    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Returns the `i`-th sample.
    ///
    /// # Panics
    ///
    /// Panics if `i >= n_samples`.
    #[must_use]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.sample_size..(i + 1) * self.sample_size]
    }

    /// Iterates over the samples in order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[f64]> + '_ {
        self.values.chunks_exact(self.sample_size)
    }

    /// All values, row-major.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::params::GammaParams;

    #[test]
    fn test_batch_shape_and_support() {
        let config = StudyConfig::new(GammaParams::new(1.5, 3.0).unwrap(), 17, 23).unwrap();
        let mut rng = Pcg64Mcg::seed_from_u64(1);
        let batch = SampleBatch::generate(&mut rng, &config);

        assert_eq!(batch.n_samples(), 17);
        assert_eq!(batch.sample_size(), 23);
        assert_eq!(batch.rows().len(), 17);
        assert!(batch.rows().all(|row| row.len() == 23));
        assert!(batch.values().iter().all(|&v| v > 0.0 && v.is_finite()));
    }

    #[test]
    fn test_same_seed_same_batch() {
        let config = StudyConfig::new(GammaParams::default(), 4, 8).unwrap();
        let a = SampleBatch::generate(&mut Pcg64Mcg::seed_from_u64(99), &config);
        let b = SampleBatch::generate(&mut Pcg64Mcg::seed_from_u64(99), &config);
        assert_eq!(a.values(), b.values());
    }

    #[test]
    fn test_overall_mean_matches_population() {
        let params = GammaParams::new(14.0, 0.5).unwrap();
        let config = StudyConfig::new(params, 100, 1000).unwrap();
        let batch = SampleBatch::generate(&mut Pcg64Mcg::seed_from_u64(5), &config);

        #[expect(clippy::cast_precision_loss)]
        let mean = batch.values().iter().sum::<f64>() / batch.values().len() as f64;
        // sd of the grand mean is sqrt(3.5 / 100_000) ~ 0.006
        assert!((mean - 7.0).abs() < 0.05, "mean = {mean}");
    }
}
