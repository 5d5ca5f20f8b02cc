use crate::data::error::{DataError, Result};

// ---------------------------------------------------------------------------
// Five-number summary
// ---------------------------------------------------------------------------

/// `{min, Q1, median, Q3, max}` of one group, as drawn by one box glyph.
///
/// Always satisfies `min <= q1 <= median <= q3 <= max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantileSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Summarize a non-empty set of values.
///
/// Quartiles use R-7 linear interpolation between the closest ranks
/// (the same convention as `d3.quantile`, NumPy and R's default).
pub fn summarize(values: &[f64]) -> Result<QuantileSummary> {
    if values.is_empty() {
        return Err(DataError::InvalidInput(
            "cannot summarize an empty group".into(),
        ));
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);

    Ok(QuantileSummary {
        min: sorted[0],
        q1: interpolate(&sorted, 0.25),
        median: interpolate(&sorted, 0.5),
        q3: interpolate(&sorted, 0.75),
        max: sorted[sorted.len() - 1],
    })
}

/// `p`-th quantile of **pre-sorted** data (R-7).
///
/// For sorted `x[0..n]`: `h = (n - 1) * p`, `j = floor(h)`,
/// result `x[j] + (h - j) * (x[j + 1] - x[j])`, clamped at the last element.
///
/// Returns `None` if `sorted_data` is empty or `p` is outside `[0, 1]`.
#[allow(dead_code)]
pub fn quantile_sorted(sorted_data: &[f64], p: f64) -> Option<f64> {
    if sorted_data.is_empty() || !(0.0..=1.0).contains(&p) {
        return None;
    }
    Some(interpolate(sorted_data, p))
}

/// R-7 interpolation. `sorted` must be non-empty and `p` within `[0, 1]`.
///
/// The result never leaves `[x[j], x[j + 1]]` and is non-decreasing in `p`.
fn interpolate(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    let h = (n - 1) as f64 * p;
    let j = h.floor() as usize;
    let lo = sorted[j];
    if j + 1 >= n {
        return lo;
    }
    let hi = sorted[j + 1];
    let g = h - h.floor();

    let gap = hi - lo;
    let v = if gap.is_finite() {
        lo + g * gap
    } else {
        // Neighbours of opposite sign near f64::MAX: the gap itself overflows.
        (1.0 - g) * lo + g * hi
    };
    v.max(lo).min(hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_ordered(s: &QuantileSummary) {
        assert!(
            s.min <= s.q1 && s.q1 <= s.median && s.median <= s.q3 && s.q3 <= s.max,
            "summary out of order: {s:?}"
        );
    }

    #[test]
    fn single_value_collapses_to_that_value() {
        let s = summarize(&[5.0]).unwrap();
        assert_eq!(
            s,
            QuantileSummary {
                min: 5.0,
                q1: 5.0,
                median: 5.0,
                q3: 5.0,
                max: 5.0,
            }
        );
    }

    #[test]
    fn even_length_median_interpolates() {
        let s = summarize(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(s.median, 2.5);
        assert_eq!(s.q1, 1.75);
        assert_eq!(s.q3, 3.25);
        assert_eq!(s.min, 1.0);
        assert_eq!(s.max, 4.0);
    }

    #[test]
    fn empty_input_is_invalid() {
        assert!(matches!(summarize(&[]), Err(DataError::InvalidInput(_))));
    }

    #[test]
    fn min_and_max_match_the_data() {
        let data = [4.7, 1.4, 6.0, 3.3, 1.4, 5.1, 2.2];
        let s = summarize(&data).unwrap();
        assert_eq!(s.min, 1.4);
        assert_eq!(s.max, 6.0);
        assert_ordered(&s);
    }

    #[test]
    fn result_does_not_depend_on_input_order() {
        let data = [5.1, 4.9, 4.7, 4.6, 5.0, 5.4, 4.6, 5.0, 4.4, 4.9];
        let expected = summarize(&data).unwrap();

        let mut reversed = data;
        reversed.reverse();
        assert_eq!(summarize(&reversed).unwrap(), expected);

        let mut rotated = data;
        rotated.rotate_left(3);
        assert_eq!(summarize(&rotated).unwrap(), expected);

        let mut sorted = data;
        sorted.sort_by(f64::total_cmp);
        assert_eq!(summarize(&sorted).unwrap(), expected);
    }

    #[test]
    fn ordering_holds_for_assorted_inputs() {
        let inputs: [&[f64]; 5] = [
            &[2.0, 2.0, 2.0],
            &[-1.0, 10.0],
            &[0.1, 0.3, 0.2, 0.5, 0.4, 0.6, 0.9],
            &[1e9, -1e9, 0.0, 3.0],
            &[1.3, 1.4, 1.4, 1.5, 1.4, 1.7, 1.4, 1.5, 1.4, 1.5, 1.5],
        ];
        for values in inputs {
            let s = summarize(values).unwrap();
            assert_ordered(&s);
        }
    }

    #[test]
    fn does_not_mutate_input() {
        let data = vec![3.0, 1.0, 2.0];
        let _ = summarize(&data).unwrap();
        assert_eq!(data, [3.0, 1.0, 2.0]);
    }

    #[test]
    fn extreme_magnitudes_do_not_overflow() {
        let s = summarize(&[-f64::MAX, f64::MAX]).unwrap();
        assert_eq!(s.min, -f64::MAX);
        assert_eq!(s.max, f64::MAX);
        assert_eq!(s.median, 0.0);
        assert!(s.q1.is_finite() && s.q3.is_finite(), "{s:?}");
        assert_ordered(&s);
    }

    #[test]
    fn parsed_extremes_keep_ordering() {
        use crate::data::loader::parse_numeric;

        let values = [
            parse_numeric("-1.7e308").unwrap(),
            parse_numeric("1.7e308").unwrap(),
            parse_numeric("1.6e308").unwrap(),
        ];
        assert_ordered(&summarize(&values).unwrap());
    }

    #[test]
    fn repeated_values_stay_exact() {
        let s = summarize(&[1.4; 7]).unwrap();
        assert_eq!((s.q1, s.median, s.q3), (1.4, 1.4, 1.4));
    }

    #[test]
    fn quantile_sorted_endpoints_and_bounds() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(quantile_sorted(&data, 0.0), Some(1.0));
        assert_eq!(quantile_sorted(&data, 0.5), Some(3.0));
        assert_eq!(quantile_sorted(&data, 1.0), Some(5.0));
        assert_eq!(quantile_sorted(&data, 1.5), None);
        assert_eq!(quantile_sorted(&data, -0.1), None);
        assert_eq!(quantile_sorted(&[], 0.5), None);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Finite values across the whole `f64` range, zero included.
    fn finite_vec(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
        proptest::collection::vec(
            prop::num::f64::POSITIVE
                | prop::num::f64::NEGATIVE
                | prop::num::f64::NORMAL
                | prop::num::f64::ZERO,
            min_len..=max_len,
        )
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn min_and_max_are_the_extremes(data in finite_vec(1, 100)) {
            let s = summarize(&data).unwrap();
            let mn = data.iter().copied().fold(f64::INFINITY, f64::min);
            let mx = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            prop_assert_eq!(s.min, mn);
            prop_assert_eq!(s.max, mx);
        }

        #[test]
        fn summary_is_ordered(data in finite_vec(1, 100)) {
            let s = summarize(&data).unwrap();
            prop_assert!(
                s.min <= s.q1 && s.q1 <= s.median && s.median <= s.q3 && s.q3 <= s.max,
                "summary out of order: {:?}", s
            );
        }

        #[test]
        fn summary_ignores_input_order(
            (data, shuffled) in finite_vec(1, 100)
                .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
        ) {
            prop_assert_eq!(summarize(&data).unwrap(), summarize(&shuffled).unwrap());
        }

        #[test]
        fn ordering_holds_for_bounded_values(
            data in proptest::collection::vec(-1e3..1e3f64, 1..100)
        ) {
            let s = summarize(&data).unwrap();
            prop_assert!(s.min <= s.q1 && s.q1 <= s.median);
            prop_assert!(s.median <= s.q3 && s.q3 <= s.max);
        }
    }
}
