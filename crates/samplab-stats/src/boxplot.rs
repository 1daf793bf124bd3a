use crate::quantile::quantile_sorted;

/// Five-number summary used to draw a box plot.
///
/// Quartiles are interpolated linearly. Whiskers reach the most extreme data
/// points within 1.5 IQR of the box; everything beyond is an outlier.
///
/// # Examples
///
/// ```
/// use samplab_stats::boxplot::BoxSummary;
///
/// let summary = BoxSummary::new(&[1.0, 2.0, 3.0, 4.0, 5.0, 100.0]).unwrap();
/// assert_eq!(summary.median, 3.5);
/// assert_eq!(summary.whisker_high, 5.0);
/// assert_eq!(summary.outliers, vec![100.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BoxSummary {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub whisker_low: f64,
    pub whisker_high: f64,
    pub outliers: Vec<f64>,
}

impl BoxSummary {
    const WHISKER_IQR: f64 = 1.5;

    /// Computes the summary, `None` for an empty dataset.
    #[must_use]
    pub fn new(values: &[f64]) -> Option<Self> {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted)
    }

    /// Computes the summary from pre-sorted values.
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
        if sorted_values.is_empty() {
            return None;
        }

        let q1 = quantile_sorted(sorted_values, 0.25);
        let median = quantile_sorted(sorted_values, 0.5);
        let q3 = quantile_sorted(sorted_values, 0.75);
        let iqr = q3 - q1;
        let low_fence = q1 - Self::WHISKER_IQR * iqr;
        let high_fence = q3 + Self::WHISKER_IQR * iqr;

        let is_inside = |v: &f64| (low_fence..=high_fence).contains(v);
        let whisker_low = sorted_values.iter().copied().find(is_inside).unwrap_or(q1);
        let whisker_high = sorted_values
            .iter()
            .copied()
            .rev()
            .find(is_inside)
            .unwrap_or(q3);
        let outliers = sorted_values
            .iter()
            .copied()
            .filter(|v| !is_inside(v))
            .collect();

        Some(Self {
            q1,
            median,
            q3,
            whisker_low,
            whisker_high,
            outliers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_outliers_whiskers_at_extremes() {
        let summary = BoxSummary::new(&[4.0, 1.0, 3.0, 2.0]).unwrap();
        assert_eq!(summary.q1, 1.75);
        assert_eq!(summary.q3, 3.25);
        assert_eq!(summary.whisker_low, 1.0);
        assert_eq!(summary.whisker_high, 4.0);
        assert!(summary.outliers.is_empty());
    }

    #[test]
    fn test_low_outlier() {
        let summary = BoxSummary::new(&[-50.0, 10.0, 11.0, 12.0, 13.0]).unwrap();
        assert_eq!(summary.outliers, vec![-50.0]);
        assert_eq!(summary.whisker_low, 10.0);
    }

    #[test]
    fn test_empty() {
        assert_eq!(BoxSummary::new(&[]), None);
    }
}
