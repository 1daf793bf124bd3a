use samplab_stats::{descriptive, quantile};

use crate::{generator::SampleBatch, params::GammaParams};

/// The five statistics computed for every sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatisticKind {
    /// Arithmetic mean.
    Mean,
    /// Bessel-corrected variance.
    Variance,
    /// 0.5-quantile.
    Median,
    /// `m * F(X_(2))`, the population CDF at the second smallest value scaled by the sample size.
    ScaledSecondOrder,
    /// `m * (1 - F(X_(m)))`, the population survival function at the largest value scaled by the sample size.
    ScaledMaxSurvival,
}

impl StatisticKind {
    pub const ALL: [Self; 5] = [
        Self::Mean,
        Self::Variance,
        Self::Median,
        Self::ScaledSecondOrder,
        Self::ScaledMaxSurvival,
    ];

    /// Human-readable label used in figures and summary lines.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Mean => "Sample Mean",
            Self::Variance => "Sample Variance",
            Self::Median => "Sample Quantile (0.5)",
            Self::ScaledSecondOrder => "nF(X_(2))",
            Self::ScaledMaxSurvival => "n(1-F(X_(n)))",
        }
    }

    /// Stable machine-readable identifier.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::Variance => "variance",
            Self::Median => "median",
            Self::ScaledSecondOrder => "nf_x2",
            Self::ScaledMaxSurvival => "n1_f_xn",
        }
    }

    /// Whether the limit is a fixed distribution independent of the population.
    #[must_use]
    pub fn is_order_statistic(self) -> bool {
        matches!(self, Self::ScaledSecondOrder | Self::ScaledMaxSurvival)
    }
}

/// Statistics of a single sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowStatistics {
    pub mean: f64,
    pub variance: f64,
    pub median: f64,
    pub nf_x2: f64,
    pub n1_f_xn: f64,
}

impl RowStatistics {
    /// Computes the statistics of `row` against the population `params`.
    ///
    /// Rows with fewer than two values produce NaN for the variance and the
    /// second order statistic.
    ///
    /// ```
    /// # use samplab_sampling::{params::GammaParams, statistic::RowStatistics};
    /// let params = GammaParams::new(1.0, 1.0).unwrap();
    /// let stats = RowStatistics::from_row(&[3.0, 1.0, 2.0], &params);
    /// assert_eq!(stats.mean, 2.0);
    /// assert_eq!(stats.variance, 1.0);
    /// assert_eq!(stats.median, 2.0);
    /// ```
    #[must_use]
    pub fn from_row(row: &[f64], params: &GammaParams) -> Self {
        let mut scratch = Vec::with_capacity(row.len());
        Self::from_row_with(row, params, &mut scratch)
    }

    /// Like [`Self::from_row`], reusing `scratch` for the sorted copy of the row.
    #[expect(clippy::cast_precision_loss)]
    pub fn from_row_with(row: &[f64], params: &GammaParams, scratch: &mut Vec<f64>) -> Self {
        scratch.clear();
        scratch.extend_from_slice(row);
        scratch.sort_unstable_by(f64::total_cmp);
        let sorted = &scratch[..];

        let m = row.len() as f64;
        let nf_x2 = sorted.get(1).map_or(f64::NAN, |&x2| m * params.cdf(x2));
        let n1_f_xn = sorted.last().map_or(f64::NAN, |&xn| m * params.sf(xn));

        Self {
            mean: descriptive::mean(row),
            variance: descriptive::sample_variance(row),
            median: quantile::quantile_sorted(sorted, 0.5),
            nf_x2,
            n1_f_xn,
        }
    }
}

/// Per-sample statistics of a whole batch.
///
/// Element `i` of every vector belongs to row `i` of the batch.
#[derive(Debug, Clone, Default)]
pub struct StatisticVectors {
    pub means: Vec<f64>,
    pub variances: Vec<f64>,
    pub medians: Vec<f64>,
    pub nf_x2: Vec<f64>,
    pub n1_f_xn: Vec<f64>,
}

impl StatisticVectors {
    /// Computes the statistics of every row of `batch`.
    #[must_use]
    pub fn compute(batch: &SampleBatch, params: &GammaParams) -> Self {
        let mut scratch = Vec::with_capacity(batch.sample_size());
        batch
            .rows()
            .map(|row| RowStatistics::from_row_with(row, params, &mut scratch))
            .collect()
    }

    /// Number of samples the vectors were computed from.
    #[must_use]
    pub fn len(&self) -> usize {
        self.means.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.means.is_empty()
    }

    /// Returns the vector for `kind`.
    #[must_use]
    pub fn get(&self, kind: StatisticKind) -> &[f64] {
        match kind {
            StatisticKind::Mean => &self.means,
            StatisticKind::Variance => &self.variances,
            StatisticKind::Median => &self.medians,
            StatisticKind::ScaledSecondOrder => &self.nf_x2,
            StatisticKind::ScaledMaxSurvival => &self.n1_f_xn,
        }
    }
}

impl FromIterator<RowStatistics> for StatisticVectors {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = RowStatistics>,
    {
        let mut vectors = Self::default();
        for row in iter {
            vectors.means.push(row.mean);
            vectors.variances.push(row.variance);
            vectors.medians.push(row.median);
            vectors.nf_x2.push(row.nf_x2);
            vectors.n1_f_xn.push(row.n1_f_xn);
        }
        vectors
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::params::StudyConfig;

    #[test]
    fn test_order_statistics_use_population_cdf() {
        // Gamma(1, 1) is Exponential(1): F(x) = 1 - exp(-x)
        let params = GammaParams::new(1.0, 1.0).unwrap();
        let row = [2.0, 0.5, 1.0, 4.0];
        let stats = RowStatistics::from_row(&row, &params);
        assert!((stats.nf_x2 - 4.0 * (1.0 - (-1.0f64).exp())).abs() < 1e-12);
        assert!((stats.n1_f_xn - 4.0 * (-4.0f64).exp()).abs() < 1e-12);
        assert_eq!(stats.median, 1.5);
    }

    #[test]
    fn test_zero_variance_row() {
        let params = GammaParams::default();
        let stats = RowStatistics::from_row(&[3.0, 3.0, 3.0], &params);
        assert_eq!(stats.variance, 0.0);
        assert_eq!(stats.median, 3.0);
    }

    #[test]
    fn test_vectors_align_with_rows() {
        let config = StudyConfig::new(GammaParams::new(3.0, 1.0).unwrap(), 25, 40).unwrap();
        let batch = SampleBatch::generate(&mut Pcg64Mcg::seed_from_u64(3), &config);
        let vectors = StatisticVectors::compute(&batch, config.params());

        assert_eq!(vectors.len(), 25);
        for kind in StatisticKind::ALL {
            assert_eq!(vectors.get(kind).len(), 25);
        }
        let row_stats = RowStatistics::from_row(batch.row(7), config.params());
        assert_eq!(vectors.means[7], row_stats.mean);
        assert_eq!(vectors.nf_x2[7], row_stats.nf_x2);
        assert!(vectors.n1_f_xn.iter().all(|&v| (0.0..=40.0).contains(&v)));
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ids = StatisticKind::ALL.map(StatisticKind::id).to_vec();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), StatisticKind::ALL.len());
    }
}
