use crate::quantile;

/// Descriptive statistics summarizing a dataset.
///
/// This structure contains common measures of central tendency and dispersion
/// for a dataset of `f64` values.
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptiveStats {
    /// The number of values in the dataset.
    pub count: usize,
    /// The minimum value in the dataset.
    pub min: f64,
    /// The maximum value in the dataset.
    pub max: f64,
    /// The arithmetic mean (average) of the dataset.
    pub mean: f64,
    /// The median of the dataset, interpolated between the two middle values
    /// for even-sized datasets.
    pub median: f64,
    /// The population variance (denominator `n`).
    pub variance: f64,
    /// The population standard deviation (square root of [`Self::variance`]).
    pub std_dev: f64,
    /// The Bessel-corrected sample variance (denominator `n - 1`).
    ///
    /// `None` when the dataset holds a single value.
    pub sample_variance: Option<f64>,
}

impl DescriptiveStats {
    /// Computes descriptive statistics from unsorted values.
    ///
    /// This method will sort the values internally before computing statistics.
    ///
    /// # Returns
    ///
    /// * `Some(DescriptiveStats)` - if the dataset contains at least one value
    /// * `None` - if the dataset is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use samplab_stats::descriptive::DescriptiveStats;
    /// let values = [5.0, 2.0, 4.0, 1.0, 3.0, 6.0];
    /// let stats = DescriptiveStats::new(values).unwrap();
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.max, 6.0);
    /// assert_eq!(stats.mean, 3.5);
    /// assert_eq!(stats.median, 3.5);
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_by(f64::total_cmp);
        Self::from_sorted(&values)
    }

    /// Computes descriptive statistics from pre-sorted values.
    ///
    /// Use this when the data is already sorted to skip the sorting step.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let min = *sorted_values.first()?;
        let max = *sorted_values.last()?;
        let count = sorted_values.len();
        let mean = mean(sorted_values);
        let median = quantile::quantile_sorted(sorted_values, 0.5);
        let sum_sq = sum_squared_deviations(sorted_values, mean);
        #[expect(clippy::cast_precision_loss)]
        let variance = sum_sq / count as f64;
        #[expect(clippy::cast_precision_loss)]
        let sample_variance = (count > 1).then(|| sum_sq / (count - 1) as f64);

        Some(Self {
            count,
            min,
            max,
            mean,
            median,
            variance,
            std_dev: variance.sqrt(),
            sample_variance,
        })
    }
}

/// Arithmetic mean of `values`; NaN for an empty slice.
///
/// ```
/// # use samplab_stats::descriptive::mean;
/// assert_eq!(mean(&[1.0, 2.0, 6.0]), 3.0);
/// assert!(mean(&[]).is_nan());
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Bessel-corrected sample variance (denominator `n - 1`).
///
/// Returns NaN when fewer than two values are given.
///
/// ```
/// # use samplab_stats::descriptive::sample_variance;
/// assert_eq!(sample_variance(&[1.0, 2.0, 3.0, 4.0]), 5.0 / 3.0);
/// assert!(sample_variance(&[1.0]).is_nan());
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn sample_variance(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let mean = mean(values);
    sum_squared_deviations(values, mean) / (values.len() - 1) as f64
}

fn sum_squared_deviations(values: &[f64], mean: f64) -> f64 {
    values.iter().map(|v| (v - mean).powi(2)).sum()
}
