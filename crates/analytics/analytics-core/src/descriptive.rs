//! Descriptive statistics.
//!
//! Degenerate inputs return `0.0` instead of NaN so that downstream charts
//! never receive non-finite values. Finite inputs whose intermediate sums
//! overflow are rescaled, and results that cannot be represented saturate at
//! `f64::MAX`.

use std::borrow::Cow;

/// Largest magnitude processed without rescaling.
const SAFE_MAGNITUDE: f64 = 1e100;

/// Arithmetic mean, `0.0` for an empty slice.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let n = data.len() as f64;
    let sum = data.iter().sum::<f64>();
    if sum.is_finite() {
        sum / n
    } else {
        // partial sums of x / n stay within the largest magnitude
        data.iter().map(|x| x / n).sum()
    }
}

fn raw_variance(data: &[f64]) -> f64 {
    let m = mean(data);
    data.iter().map(|x| (x - m).powi(2)).sum::<f64>() / data.len() as f64
}

/// Population variance, `0.0` when fewer than two values.
pub fn variance(data: &[f64]) -> f64 {
    if data.len() < 2 {
        return 0.0;
    }
    saturate(raw_variance(data))
}

/// Population standard deviation, `0.0` when fewer than two values.
pub fn std_dev(data: &[f64]) -> f64 {
    if data.len() < 2 {
        return 0.0;
    }
    let v = raw_variance(data);
    if v.is_finite() {
        return v.sqrt();
    }
    let scale = max_abs(data);
    let scaled: Vec<f64> = data.iter().map(|x| x / scale).collect();
    saturate(scale * raw_variance(&scaled).sqrt())
}

/// First and third quartiles by nearest rank (no interpolation).
///
/// Q1 is `sorted[n / 4]`, Q3 is `sorted[3n / 4]`. `None` when `n < 4`.
pub fn quartiles(data: &[f64]) -> Option<(f64, f64)> {
    let n = data.len();
    if n < 4 {
        return None;
    }
    let sorted = sorted_copy(data);
    Some((sorted[n / 4], sorted[3 * n / 4]))
}

/// Median, `0.0` for an empty slice.
pub fn median(data: &[f64]) -> f64 {
    let n = data.len();
    if n == 0 {
        return 0.0;
    }
    let sorted = sorted_copy(data);
    if n % 2 == 0 {
        let (a, b) = (sorted[n / 2 - 1], sorted[n / 2]);
        let sum = a + b;
        if sum.is_finite() {
            sum / 2.0
        } else {
            a / 2.0 + b / 2.0
        }
    } else {
        sorted[n / 2]
    }
}

/// Percentage change from the first to the last value.
///
/// `0.0` when fewer than two values or when the first value is zero.
pub fn growth_rate(data: &[f64]) -> f64 {
    match (data.first(), data.last()) {
        (Some(&first), Some(&last)) if data.len() >= 2 && first != 0.0 => {
            saturate((last - first) / first * 100.0)
        }
        _ => 0.0,
    }
}

pub(crate) fn sorted_copy(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted
}

/// Clamp into the finite range; NaN becomes `0.0`.
pub(crate) fn saturate(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(f64::MIN, f64::MAX)
    }
}

pub(crate) fn max_abs(data: &[f64]) -> f64 {
    data.iter().fold(0.0_f64, |acc, x| acc.max(x.abs()))
}

/// The series divided by its largest magnitude when that magnitude is large
/// enough for squares and products to overflow, with the divisor applied.
pub(crate) fn rescaled(data: &[f64]) -> (Cow<'_, [f64]>, f64) {
    let scale = max_abs(data);
    if scale <= SAFE_MAGNITUDE {
        (Cow::Borrowed(data), 1.0)
    } else {
        (Cow::Owned(data.iter().map(|x| x / scale).collect()), scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean() {
        assert_relative_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_variance_population() {
        // deviations from 5: 9,1,1,1,0,0,4,16 -> 32 / 8
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(variance(&data), 4.0);
        assert_relative_eq!(std_dev(&data), 2.0);
    }

    #[test]
    fn test_std_dev_single_value() {
        assert_eq!(std_dev(&[42.0]), 0.0);
    }

    #[test]
    fn test_quartiles_nearest_rank() {
        let (q1, q3) = quartiles(&[100.0, 1.0, 4.0, 2.0, 3.0]).unwrap();
        assert_eq!(q1, 2.0);
        assert_eq!(q3, 4.0);
    }

    #[test]
    fn test_quartiles_short_input() {
        assert!(quartiles(&[1.0, 2.0, 3.0]).is_none());
    }

    #[test]
    fn test_median_odd_and_even() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
        assert_eq!(median(&[]), 0.0);
    }

    #[test]
    fn test_growth_rate() {
        assert_relative_eq!(growth_rate(&[10.0, 15.0, 20.0]), 100.0);
        assert_relative_eq!(growth_rate(&[20.0, 10.0]), -50.0);
    }

    #[test]
    fn test_huge_values_stay_finite() {
        let data = [f64::MAX, f64::MAX, -f64::MAX, f64::MAX];
        assert!(mean(&data).is_finite());
        assert_relative_eq!(mean(&[1e308; 8]), 1e308, max_relative = 1e-12);
        assert_eq!(variance(&data), f64::MAX);
        assert!(std_dev(&data).is_finite());
        assert!(std_dev(&data) > 0.0);
        assert_eq!(median(&[1e308, 1e308]), 1e308);
        assert_eq!(growth_rate(&[1e-300, 1e300]), f64::MAX);
    }

    #[test]
    fn test_rescaled_leaves_ordinary_data_alone() {
        let (data, scale) = rescaled(&[1.0, -2.0]);
        assert_eq!(scale, 1.0);
        assert_eq!(&*data, &[1.0, -2.0][..]);

        let x = 1e200;
        let input = [x, -2.0 * x];
        let (data, scale) = rescaled(&input);
        assert_eq!(scale, 2.0 * x);
        assert_eq!(&*data, &[0.5, -1.0][..]);
    }

    #[test]
    fn test_growth_rate_degenerate() {
        assert_eq!(growth_rate(&[0.0, 5.0]), 0.0);
        assert_eq!(growth_rate(&[5.0]), 0.0);
        assert_eq!(growth_rate(&[]), 0.0);
    }
}
