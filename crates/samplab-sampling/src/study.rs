use rand::Rng;
use samplab_stats::{
    descriptive, goodness_of_fit::KsTest, histogram::Histogram, quantile::quantile,
};

use crate::{
    generator::SampleBatch,
    limit::{LimitDistribution, LimitModel},
    params::StudyConfig,
    statistic::{StatisticKind, StatisticVectors},
};

/// Number of histogram bins per statistic.
pub const DEFAULT_HIST_BINS: usize = 100;
/// Number of points on each theoretical density curve.
pub const CURVE_POINTS: usize = 100;
/// Upper end of the plotted range for the order-statistic limits.
const ORDER_STATISTIC_CURVE_END: f64 = 10.0;

/// Mean, standard deviation and median of a statistic vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub mean: f64,
    /// Population standard deviation (denominator `n`).
    pub std_dev: f64,
    pub median: f64,
}

impl Summary {
    /// Summarizes `values`; every field is NaN for an empty slice.
    ///
    /// ```
    /// # use samplab_sampling::study::Summary;
    /// let summary = Summary::of(&[1.0, 2.0, 3.0, 6.0]);
    /// assert_eq!(summary.mean, 3.0);
    /// assert_eq!(summary.std_dev, 3.5_f64.sqrt());
    /// assert_eq!(summary.median, 2.5);
    /// ```
    #[must_use]
    pub fn of(values: &[f64]) -> Self {
        descriptive::DescriptiveStats::new(values.iter().copied()).map_or(
            Self {
                mean: f64::NAN,
                std_dev: f64::NAN,
                median: f64::NAN,
            },
            |stats| Self {
                mean: stats.mean,
                std_dev: stats.std_dev,
                median: stats.median,
            },
        )
    }

    /// Formats the summary as one report line, rounded to two decimals.
    ///
    /// ```
    /// # use samplab_sampling::study::Summary;
    /// let summary = Summary { mean: 14.0012, std_dev: 0.0374, median: 13.999 };
    /// assert_eq!(
    ///     summary.to_line("Sample Mean"),
    ///     "Sample Mean: Mean=14.00, Std=0.04, Median=14.00",
    /// );
    /// ```
    #[must_use]
    pub fn to_line(&self, label: &str) -> String {
        format!(
            "{label}: Mean={:.2}, Std={:.2}, Median={:.2}",
            self.mean, self.std_dev, self.median
        )
    }
}

/// Comparison of one statistic vector with its limit distribution.
#[derive(Debug, Clone)]
pub struct StatisticReport {
    pub kind: StatisticKind,
    pub summary: Summary,
    pub limit: LimitDistribution,
    pub histogram: Histogram,
    /// `(x, density)` points of the limit's density over the plotted range.
    pub density_curve: Vec<(f64, f64)>,
    pub fit: KsTest,
}

impl StatisticReport {
    /// Label used on summary lines; the median keeps a reminder of what the quantile is.
    #[must_use]
    pub fn summary_label(&self) -> &'static str {
        match self.kind {
            StatisticKind::Median => "Sample Quantile (0.5) (e.g. Median)",
            kind => kind.label(),
        }
    }

    #[must_use]
    pub fn summary_line(&self) -> String {
        self.summary.to_line(self.summary_label())
    }
}

/// Results of a full study run.
#[derive(Debug, Clone)]
pub struct StudyReport {
    config: StudyConfig,
    limit_model: LimitModel,
    /// One entry per [`StatisticKind`], in [`StatisticKind::ALL`] order.
    statistics: Vec<StatisticReport>,
}

impl StudyReport {
    #[must_use]
    pub fn config(&self) -> &StudyConfig {
        &self.config
    }

    #[must_use]
    pub fn limit_model(&self) -> LimitModel {
        self.limit_model
    }

    /// Per-statistic reports in [`StatisticKind::ALL`] order.
    #[must_use]
    pub fn statistics(&self) -> &[StatisticReport] {
        &self.statistics
    }

    /// Returns the report of `kind`.
    #[must_use]
    pub fn statistic(&self, kind: StatisticKind) -> &StatisticReport {
        self.statistics
            .iter()
            .find(|s| s.kind == kind)
            .expect("every statistic kind is reported")
    }

    /// The five summary lines, one per statistic.
    pub fn summary_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.statistics.iter().map(StatisticReport::summary_line)
    }
}

/// Monte Carlo study driver.
#[derive(Debug, Clone)]
pub struct Study {
    config: StudyConfig,
    hist_bins: usize,
    limit_model: LimitModel,
}

impl Study {
    #[must_use]
    pub fn new(config: StudyConfig) -> Self {
        Self {
            config,
            hist_bins: DEFAULT_HIST_BINS,
            limit_model: LimitModel::default(),
        }
    }

    /// Sets the number of histogram bins per statistic.
    #[must_use]
    pub fn with_hist_bins(mut self, hist_bins: usize) -> Self {
        self.hist_bins = hist_bins;
        self
    }

    /// Sets how the variance and median limits are chosen.
    #[must_use]
    pub fn with_limit_model(mut self, limit_model: LimitModel) -> Self {
        self.limit_model = limit_model;
        self
    }

    #[must_use]
    pub fn config(&self) -> &StudyConfig {
        &self.config
    }

    /// Draws the batch.
    pub fn generate<R>(&self, rng: &mut R) -> SampleBatch
    where
        R: Rng + ?Sized,
    {
        SampleBatch::generate(rng, &self.config)
    }

    /// Reduces the batch to per-sample statistics.
    #[must_use]
    pub fn compute(&self, batch: &SampleBatch) -> StatisticVectors {
        StatisticVectors::compute(batch, self.config.params())
    }

    /// Summarizes every statistic vector and compares it with its limit.
    #[must_use]
    pub fn report(&self, vectors: &StatisticVectors) -> StudyReport {
        let statistics = StatisticKind::ALL
            .into_iter()
            .map(|kind| self.report_statistic(kind, vectors.get(kind)))
            .collect();
        StudyReport {
            config: self.config.clone(),
            limit_model: self.limit_model,
            statistics,
        }
    }

    /// Runs the whole pipeline: generate, compute, report.
    pub fn run<R>(&self, rng: &mut R) -> StudyReport
    where
        R: Rng + ?Sized,
    {
        let batch = self.generate(rng);
        let vectors = self.compute(&batch);
        self.report(&vectors)
    }

    fn report_statistic(&self, kind: StatisticKind, values: &[f64]) -> StatisticReport {
        let summary = Summary::of(values);
        let limit = self.limit_model.limit(kind, &self.config, values);
        let curve_range = if kind.is_order_statistic() {
            0.0..=ORDER_STATISTIC_CURVE_END
        } else {
            quantile(values, 0.0)..=quantile(values, 1.0)
        };
        StatisticReport {
            kind,
            summary,
            limit,
            histogram: Histogram::density(values, self.hist_bins),
            density_curve: limit.density_curve(curve_range, CURVE_POINTS),
            fit: KsTest::one_sample(values, |x| limit.cdf(x)),
        }
    }
}
