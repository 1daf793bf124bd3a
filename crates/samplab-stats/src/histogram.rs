use std::ops::Range;

/// A histogram normalized to a probability density.
///
/// The data range is split into equal-width bins. Each bin's density is
/// `count / (total * width)`, so the bars integrate to one and can be drawn
/// against a theoretical density curve.
#[derive(Debug, Clone)]
pub struct Histogram {
    /// The bins in ascending order of their ranges.
    pub bins: Vec<HistogramBin>,
    /// Total number of values counted into the bins.
    pub total: u64,
}

/// A single bin in a histogram.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    /// The range of values covered by this bin (inclusive start, exclusive end,
    /// except for the last bin which also includes its end).
    pub range: Range<f64>,
    /// The number of values that fall within this bin's range.
    pub count: u64,
    /// The normalized density of this bin.
    pub density: f64,
}

impl HistogramBin {
    /// Midpoint of the bin's range.
    #[must_use]
    pub fn center(&self) -> f64 {
        f64::midpoint(self.range.start, self.range.end)
    }

    /// Width of the bin's range.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.range.end - self.range.start
    }
}

impl Histogram {
    /// Creates a density histogram whose bins span the data from its minimum to
    /// its maximum.
    ///
    /// When every value is equal the bins span a unit-width window centred on it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use samplab_stats::histogram::Histogram;
    /// let values = [1.0, 2.0, 2.0, 3.0, 4.0];
    /// let histogram = Histogram::density(&values, 3);
    /// assert_eq!(histogram.bins.len(), 3);
    /// assert_eq!(histogram.bins.iter().map(|b| b.count).sum::<u64>(), 5);
    /// assert_eq!(histogram.bins[2].count, 2); // 3.0 and the closed upper edge 4.0
    /// ```
    #[must_use]
    pub fn density(values: &[f64], num_bins: usize) -> Self {
        let (min, max) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        if values.is_empty() {
            return Self::empty();
        }
        let range = if max - min < f64::EPSILON * min.abs().max(1.0) {
            (min - 0.5)..(min + 0.5)
        } else {
            min..max
        };
        Self::with_range(values, num_bins, range)
    }

    /// Creates a density histogram over an explicit range.
    ///
    /// Values outside `range` are ignored; the density is still normalized by the
    /// number of values inside the range. Useful to overlay several groups on
    /// common bins.
    ///
    /// # Examples
    ///
    /// ```
    /// # use samplab_stats::histogram::Histogram;
    /// let histogram = Histogram::with_range(&[0.5, 1.5, 1.5, 9.0], 2, 0.0..2.0);
    /// assert_eq!(histogram.total, 3);
    /// assert_eq!(histogram.bins[1].count, 2);
    /// assert!((histogram.bins[1].density - 2.0 / 3.0).abs() < 1e-12);
    /// ```
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_sign_loss,
        clippy::cast_possible_truncation
    )]
    #[must_use]
    pub fn with_range(values: &[f64], num_bins: usize, range: Range<f64>) -> Self {
        if num_bins == 0 || range.is_empty() {
            return Self::empty();
        }

        let width = (range.end - range.start) / num_bins as f64;
        // Recompute edges from the index to avoid accumulating rounding errors
        let edge = |idx: usize| range.start + width * idx as f64;
        let mut bins = (0..num_bins)
            .map(|idx| HistogramBin {
                range: edge(idx)..if idx + 1 == num_bins { range.end } else { edge(idx + 1) },
                count: 0,
                density: 0.0,
            })
            .collect::<Vec<_>>();

        let mut total = 0;
        for &val in values {
            if !(range.start..=range.end).contains(&val) {
                continue;
            }
            let idx = (((val - range.start) / width).floor() as usize).min(num_bins - 1);
            bins[idx].count += 1;
            total += 1;
        }

        if total > 0 {
            for bin in &mut bins {
                bin.density = bin.count as f64 / (total as f64 * bin.width());
            }
        }

        Self { bins, total }
    }

    fn empty() -> Self {
        Self {
            bins: vec![],
            total: 0,
        }
    }

    /// Returns the step outline of the bars as a polyline, from the baseline at
    /// the first edge to the baseline at the last edge.
    ///
    /// ```
    /// # use samplab_stats::histogram::Histogram;
    /// let histogram = Histogram::with_range(&[0.5, 1.5, 1.5, 1.5], 2, 0.0..2.0);
    /// assert_eq!(
    ///     histogram.outline(),
    ///     vec![(0.0, 0.0), (0.0, 0.25), (1.0, 0.25), (1.0, 0.75), (2.0, 0.75), (2.0, 0.0)],
    /// );
    /// ```
    #[must_use]
    pub fn outline(&self) -> Vec<(f64, f64)> {
        let mut points = Vec::with_capacity(self.bins.len() * 2 + 2);
        if let Some(first) = self.bins.first() {
            points.push((first.range.start, 0.0));
        }
        for bin in &self.bins {
            points.push((bin.range.start, bin.density));
            points.push((bin.range.end, bin.density));
        }
        if let Some(last) = self.bins.last() {
            points.push((last.range.end, 0.0));
        }
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_density_integrates_to_one() {
        let values = (0..1000).map(|i| f64::from(i).sqrt()).collect::<Vec<_>>();
        let histogram = Histogram::density(&values, 37);
        let area = histogram
            .bins
            .iter()
            .map(|b| b.density * b.width())
            .sum::<f64>();
        assert!((area - 1.0).abs() < 1e-9, "area = {area}");
        assert_eq!(histogram.total, 1000);
    }

    #[test]
    fn test_constant_values_land_in_one_bin() {
        let histogram = Histogram::density(&[2.0, 2.0, 2.0], 4);
        assert_eq!(histogram.bins.len(), 4);
        assert_eq!(histogram.bins.first().unwrap().range.start, 1.5);
        assert_eq!(histogram.bins.last().unwrap().range.end, 2.5);
        assert_eq!(histogram.bins.iter().filter(|b| b.count == 3).count(), 1);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(Histogram::density(&[], 10).bins.is_empty());
        assert!(Histogram::density(&[1.0, 2.0], 0).bins.is_empty());
    }

    #[test]
    fn test_bin_center_and_width() {
        let histogram = Histogram::with_range(&[0.1], 4, 0.0..2.0);
        assert_eq!(histogram.bins[1].center(), 0.75);
        assert_eq!(histogram.bins[1].width(), 0.5);
    }
}
