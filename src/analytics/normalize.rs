// src/analytics/normalize.rs

/// Min-max scales a series to [0, 1], preserving length and order.
///
/// Degenerate cases:
/// * Empty input returns an empty vector.
/// * If all values are identical, every entry becomes 1.0 when the value is
///   positive and 0.0 otherwise. A uniformly absent signal must not read as
///   uniformly maximal.
pub fn min_max(values: &[f64]) -> Vec<f64> {
    let Some(first) = values.first().copied() else {
        return Vec::new();
    };

    let (min, max) = values
        .iter()
        .skip(1)
        .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v)));

    if max == min {
        values
            .iter()
            .map(|&v| if v > 0.0 { 1.0 } else { 0.0 })
            .collect()
    } else {
        values.iter().map(|&v| (v - min) / (max - min)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(min_max(&[]).is_empty());
    }

    #[test]
    fn scales_linearly_between_min_and_max() {
        assert_eq!(min_max(&[2.0, 4.0, 6.0]), vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn preserves_length_and_order() {
        assert_eq!(min_max(&[10.0, 0.0, 5.0]), vec![1.0, 0.0, 0.5]);
    }

    #[test]
    fn identical_positive_values_become_one() {
        assert_eq!(min_max(&[5.0, 5.0, 5.0]), vec![1.0, 1.0, 1.0]);
    }

    #[test]
    fn identical_zero_values_stay_zero() {
        assert_eq!(min_max(&[0.0, 0.0]), vec![0.0, 0.0]);
    }
}
