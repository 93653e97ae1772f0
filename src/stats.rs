// Descriptive statistics over count sequences. Empty input and zero denominators yield 0, never an error.

use crate::models::Statistics;

/// Count, total, mean, median, min and max of `values`.
pub fn statistics(values: &[f64]) -> Statistics {
    if values.is_empty() {
        return Statistics::default();
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let count = sorted.len();
    let total: f64 = sorted.iter().sum();
    Statistics {
        count,
        total,
        mean: total / count as f64,
        median: median_sorted(&sorted),
        min: sorted[0],
        max: sorted[count - 1],
    }
}

/// Same as [`statistics`] for integer counts.
pub fn count_statistics<I>(values: I) -> Statistics
where
    I: IntoIterator<Item = u64>,
{
    let values: Vec<f64> = values.into_iter().map(|v| v as f64).collect();
    statistics(&values)
}

/// Infractions per captured frame; 0 when no frames were captured.
pub fn efficiency(infractions_total: u64, frames_total: u64) -> f64 {
    if frames_total == 0 {
        return 0.0;
    }
    infractions_total as f64 / frames_total as f64
}

fn median_sorted(sorted: &[f64]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_of_unsorted_input() {
        assert_eq!(statistics(&[9.0, 1.0, 5.0]).median, 5.0);
        assert_eq!(statistics(&[4.0, 1.0, 3.0, 2.0]).median, 2.5);
    }

    #[test]
    fn single_value() {
        let s = statistics(&[7.0]);
        assert_eq!(s.count, 1);
        assert_eq!(s.mean, 7.0);
        assert_eq!(s.median, 7.0);
        assert_eq!(s.min, 7.0);
        assert_eq!(s.max, 7.0);
    }
}
