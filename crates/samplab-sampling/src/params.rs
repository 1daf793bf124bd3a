use statrs::distribution::{Continuous, ContinuousCDF, Gamma};

/// Shape of the population used by the study when nothing else is requested.
pub const DEFAULT_SHAPE: f64 = 14.0;
/// Scale of the population used by the study when nothing else is requested.
pub const DEFAULT_SCALE: f64 = 1.0;
/// Number of independent samples drawn by default.
pub const DEFAULT_N_SAMPLES: usize = 1000;
/// Size of each sample drawn by default.
pub const DEFAULT_SAMPLE_SIZE: usize = 10_000;

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ParamError {
    #[display("gamma shape must be a positive finite number, got {shape}")]
    InvalidShape { shape: f64 },
    #[display("gamma scale must be a positive finite number, got {scale}")]
    InvalidScale { scale: f64 },
    #[display("number of samples must be at least 1")]
    NoSamples,
    #[display("sample size must be at least 2, got {sample_size}")]
    SampleTooSmall { sample_size: usize },
}

/// Parameters of the Gamma(shape, scale) population.
///
/// Holds both the sampler used to draw values and the distribution used to
/// evaluate the population CDF, so both always agree on the parameters.
#[derive(Debug, Clone)]
pub struct GammaParams {
    shape: f64,
    scale: f64,
    sampler: rand_distr::Gamma<f64>,
    population: Gamma,
}

impl GammaParams {
    /// Validates the parameters and builds the population.
    ///
    /// ```
    /// # use samplab_sampling::params::GammaParams;
    /// let params = GammaParams::new(2.0, 3.0).unwrap();
    /// assert_eq!(params.mean(), 6.0);
    /// assert_eq!(params.variance(), 18.0);
    /// assert!(GammaParams::new(0.0, 1.0).is_err());
    /// assert!(GammaParams::new(1.0, f64::NAN).is_err());
    /// ```
    pub fn new(shape: f64, scale: f64) -> Result<Self, ParamError> {
        if !(shape.is_finite() && shape > 0.0) {
            return Err(ParamError::InvalidShape { shape });
        }
        if !(scale.is_finite() && scale > 0.0) {
            return Err(ParamError::InvalidScale { scale });
        }
        let sampler =
            rand_distr::Gamma::new(shape, scale).map_err(|_| ParamError::InvalidShape { shape })?;
        // statrs parameterizes by rate
        let population =
            Gamma::new(shape, scale.recip()).map_err(|_| ParamError::InvalidScale { scale })?;
        Ok(Self {
            shape,
            scale,
            sampler,
            population,
        })
    }

    #[must_use]
    pub fn shape(&self) -> f64 {
        self.shape
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Population mean `shape * scale`.
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.shape * self.scale
    }

    /// Population variance `shape * scale²`.
    #[must_use]
    pub fn variance(&self) -> f64 {
        self.shape * self.scale * self.scale
    }

    /// Population excess kurtosis `6 / shape`.
    #[must_use]
    pub fn excess_kurtosis(&self) -> f64 {
        6.0 / self.shape
    }

    /// Population median.
    #[must_use]
    pub fn median(&self) -> f64 {
        self.quantile(0.5)
    }

    /// Inverse of the population CDF.
    ///
    /// `p` must lie in `[0, 1]`.
    #[must_use]
    pub fn quantile(&self, p: f64) -> f64 {
        self.population.inverse_cdf(p)
    }

    #[must_use]
    pub fn pdf(&self, x: f64) -> f64 {
        self.population.pdf(x)
    }

    #[must_use]
    pub fn cdf(&self, x: f64) -> f64 {
        self.population.cdf(x)
    }

    /// Survival function `1 - F(x)`, accurate in the upper tail.
    #[must_use]
    pub fn sf(&self, x: f64) -> f64 {
        self.population.sf(x)
    }

    pub(crate) fn sampler(&self) -> &rand_distr::Gamma<f64> {
        &self.sampler
    }
}

impl Default for GammaParams {
    fn default() -> Self {
        Self::new(DEFAULT_SHAPE, DEFAULT_SCALE).expect("default gamma parameters are valid")
    }
}

/// Full set of study parameters.
#[derive(Debug, Clone)]
pub struct StudyConfig {
    params: GammaParams,
    n_samples: usize,
    sample_size: usize,
}

impl StudyConfig {
    /// Validates the batch dimensions.
    ///
    /// At least one sample is needed, and every sample must hold at least two
    /// values for the Bessel-corrected variance and the second order statistic.
    ///
    /// ```
    /// # use samplab_sampling::params::{GammaParams, StudyConfig};
    /// let params = GammaParams::default();
    /// assert!(StudyConfig::new(params.clone(), 10, 2).is_ok());
    /// assert!(StudyConfig::new(params.clone(), 0, 100).is_err());
    /// assert!(StudyConfig::new(params, 10, 1).is_err());
    /// ```
    pub fn new(
        params: GammaParams,
        n_samples: usize,
        sample_size: usize,
    ) -> Result<Self, ParamError> {
        if n_samples == 0 {
            return Err(ParamError::NoSamples);
        }
        if sample_size < 2 {
            return Err(ParamError::SampleTooSmall { sample_size });
        }
        Ok(Self {
            params,
            n_samples,
            sample_size,
        })
    }

    #[must_use]
    pub fn params(&self) -> &GammaParams {
        &self.params
    }

    #[must_use]
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    #[must_use]
    pub fn sample_size(&self) -> usize {
        self.sample_size
    }
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            params: GammaParams::default(),
            n_samples: DEFAULT_N_SAMPLES,
            sample_size: DEFAULT_SAMPLE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_published_constants() {
        let config = StudyConfig::default();
        assert_eq!(config.params().shape(), 14.0);
        assert_eq!(config.params().scale(), 1.0);
        assert_eq!(config.n_samples(), 1000);
        assert_eq!(config.sample_size(), 10_000);
    }

    #[test]
    fn test_rejects_non_positive_parameters() {
        assert!(matches!(
            GammaParams::new(-1.0, 1.0),
            Err(ParamError::InvalidShape { .. })
        ));
        assert!(matches!(
            GammaParams::new(1.0, 0.0),
            Err(ParamError::InvalidScale { .. })
        ));
        assert!(matches!(
            GammaParams::new(f64::INFINITY, 1.0),
            Err(ParamError::InvalidShape { .. })
        ));
    }

    #[test]
    fn test_cdf_and_sf_are_complementary() {
        let params = GammaParams::new(3.0, 2.0).unwrap();
        for x in [0.5, 2.0, 6.0, 20.0] {
            assert!((params.cdf(x) + params.sf(x) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_exponential_special_case() {
        // Gamma(1, scale) is Exponential(1 / scale)
        let params = GammaParams::new(1.0, 2.0).unwrap();
        assert!((params.cdf(2.0) - (1.0 - (-1.0f64).exp())).abs() < 1e-12);
        assert!((params.median() - 2.0 * std::f64::consts::LN_2).abs() < 1e-6);
    }

    #[test]
    fn test_quantile_inverts_cdf() {
        let params = GammaParams::new(14.0, 1.0).unwrap();
        assert!((params.median() - 13.668_114_599_344_73).abs() < 1e-9);
        for p in [0.01, 0.25, 0.6, 0.99] {
            assert!((params.cdf(params.quantile(p)) - p).abs() < 1e-9);
        }
    }

    #[test]
    fn test_error_messages() {
        let err = StudyConfig::new(GammaParams::default(), 5, 1).unwrap_err();
        assert_eq!(err.to_string(), "sample size must be at least 2, got 1");
    }
}
