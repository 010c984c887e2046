//! Helpers over Q-value rows

use ndarray::ArrayView1;

/// Index of the largest value. Ties go to the lowest index; an empty row
/// yields 0.
#[must_use]
pub fn argmax(values: ArrayView1<'_, f64>) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate().skip(1) {
        if v > values[best] {
            best = i;
        }
    }
    best
}

/// Largest value in the row, `-inf` for an empty row
#[must_use]
pub fn max_value(values: ArrayView1<'_, f64>) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr1;

    #[test]
    fn test_argmax_first_on_ties() {
        assert_eq!(argmax(arr1(&[0.0, 0.0, 0.0, 0.0]).view()), 0);
        assert_eq!(argmax(arr1(&[-1.0, 3.0, 3.0, 2.0]).view()), 1);
        assert_eq!(argmax(arr1(&[-5.0, -2.0, -3.0, -2.0]).view()), 1);
        assert_eq!(argmax(arr1(&[1.0, 2.0, 3.0, 4.0]).view()), 3);
    }

    #[test]
    fn test_max_value() {
        assert!((max_value(arr1(&[-5.0, -2.0, -3.0]).view()) + 2.0).abs() < 1e-12);
        assert_eq!(max_value(arr1(&[] as &[f64]).view()), f64::NEG_INFINITY);
    }
}
