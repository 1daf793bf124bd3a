/// Computes the `q`-quantile of unsorted values.
///
/// See [`quantile_sorted`] for the interpolation rule.
#[must_use]
pub fn quantile(values: &[f64], q: f64) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    quantile_sorted(&sorted, q)
}

/// Computes the `q`-quantile of sorted data by linear interpolation.
///
/// The quantile sits at fractional position `q * (n - 1)` in the sorted data and
/// is interpolated linearly between the two neighbouring order statistics.
/// `q` is clamped to `[0.0, 1.0]`.
///
/// # Returns
///
/// The interpolated value. Returns `f64::NAN` if the input is empty.
///
/// # Examples
///
/// ```
/// use samplab_stats::quantile::quantile_sorted;
///
/// let values = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(quantile_sorted(&values, 0.5), 3.0);
/// assert!((quantile_sorted(&values, 0.6) - 3.4).abs() < 1e-12);
/// assert_eq!(quantile_sorted(&values, 1.0), 5.0);
/// ```
#[expect(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
#[must_use]
pub fn quantile_sorted(sorted_values: &[f64], q: f64) -> f64 {
    let Some(last) = sorted_values.len().checked_sub(1) else {
        return f64::NAN;
    };
    let pos = q.clamp(0.0, 1.0) * last as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    if lo == hi {
        sorted_values[lo]
    } else {
        sorted_values[lo] + (sorted_values[hi] - sorted_values[lo]) * frac
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_length_median_interpolates() {
        assert_eq!(quantile(&[4.0, 1.0, 3.0, 2.0], 0.5), 2.5);
    }

    #[test]
    fn test_empty_input_is_nan() {
        assert!(quantile_sorted(&[], 0.5).is_nan());
    }

    #[test]
    fn test_out_of_range_q_is_clamped() {
        let values = [1.0, 2.0, 3.0];
        assert_eq!(quantile_sorted(&values, -0.5), 1.0);
        assert_eq!(quantile_sorted(&values, 1.5), 3.0);
    }

    #[test]
    fn test_single_value() {
        assert_eq!(quantile_sorted(&[42.0], 0.3), 42.0);
    }
}
