/// Median of a set of values.
///
/// Odd counts return the middle element after an ascending sort; even counts
/// return the mean of the two middle elements. Returns `None` for an empty
/// slice. Ordering uses `f64::total_cmp`, so callers that care about NaN must
/// reject it beforehand.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_has_no_median() {
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn odd_count_takes_middle_element() {
        assert_eq!(median(&[3.0]), Some(3.0));
        assert_eq!(median(&[5.0, 1.0, 3.0]), Some(3.0));
        assert_eq!(
            median(&[9.0, 2.0, 7.0, 4.0, 5.0, 6.0, 3.0, 8.0, 1.0]),
            Some(5.0)
        );
    }

    #[test]
    fn even_count_averages_middle_pair() {
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
        assert_eq!(median(&[-1.0, 1.0]), Some(0.0));
    }

    #[test]
    fn ties_are_counted_by_value() {
        assert_eq!(median(&[1.0, 2.0, 2.0, 2.0, 9.0]), Some(2.0));
    }

    #[test]
    fn input_order_is_untouched() {
        let values = [3.0, 1.0, 2.0];
        assert_eq!(median(&values), Some(2.0));
        assert_eq!(values, [3.0, 1.0, 2.0]);
    }
}
