/// Empirical cumulative distribution function of a dataset.
///
/// # Examples
///
/// ```
/// use samplab_stats::ecdf::Ecdf;
///
/// let ecdf = Ecdf::new(&[3.0, 1.0, 2.0, 2.0]);
/// assert_eq!(ecdf.eval(0.5), 0.0);
/// assert_eq!(ecdf.eval(2.0), 0.75);
/// assert_eq!(ecdf.eval(10.0), 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct Ecdf {
    sorted: Vec<f64>,
}

impl Ecdf {
    /// Builds the ECDF of `values`. NaN values are dropped.
    #[must_use]
    pub fn new(values: &[f64]) -> Self {
        let mut sorted = values
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .collect::<Vec<_>>();
        sorted.sort_by(f64::total_cmp);
        Self { sorted }
    }

    /// Number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// Fraction of observations less than or equal to `x`.
    ///
    /// Returns NaN for an empty ECDF.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        if self.sorted.is_empty() {
            return f64::NAN;
        }
        let below = self.sorted.partition_point(|&v| v <= x);
        below as f64 / self.sorted.len() as f64
    }

    /// Returns the jump points `(x, F(x))`, one per distinct value, in ascending order.
    ///
    /// ```
    /// # use samplab_stats::ecdf::Ecdf;
    /// let ecdf = Ecdf::new(&[1.0, 2.0, 2.0, 4.0]);
    /// assert_eq!(ecdf.steps(), vec![(1.0, 0.25), (2.0, 0.75), (4.0, 1.0)]);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn steps(&self) -> Vec<(f64, f64)> {
        let n = self.sorted.len() as f64;
        self.sorted
            .iter()
            .enumerate()
            .filter(|&(i, x)| {
                // Only the last of a run of ties marks the jump
                self.sorted
                    .get(i + 1)
                    .is_none_or(|next| next.total_cmp(x).is_ne())
            })
            .map(|(i, &x)| (x, (i + 1) as f64 / n))
            .collect()
    }

    /// Returns a staircase polyline through the jump points, suitable for line charts.
    ///
    /// Each jump is drawn as a horizontal run at the previous level followed by
    /// a vertical rise, starting from `(min, 0.0)`.
    #[must_use]
    pub fn staircase(&self) -> Vec<(f64, f64)> {
        let mut points = Vec::new();
        let mut level = 0.0;
        for (x, y) in self.steps() {
            points.push((x, level));
            points.push((x, y));
            level = y;
        }
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_ecdf() {
        let ecdf = Ecdf::new(&[]);
        assert!(ecdf.is_empty());
        assert!(ecdf.eval(1.0).is_nan());
        assert!(ecdf.steps().is_empty());
    }

    #[test]
    fn test_nan_is_dropped() {
        let ecdf = Ecdf::new(&[1.0, f64::NAN, 3.0]);
        assert_eq!(ecdf.len(), 2);
        assert_eq!(ecdf.eval(1.0), 0.5);
    }

    #[test]
    fn test_staircase_is_monotone() {
        let ecdf = Ecdf::new(&[5.0, 1.0, 3.0]);
        let points = ecdf.staircase();
        assert_eq!(points.first(), Some(&(1.0, 0.0)));
        assert_eq!(points.last(), Some(&(5.0, 1.0)));
        assert!(points.windows(2).all(|w| w[0].0 <= w[1].0 && w[0].1 <= w[1].1));
    }
}
