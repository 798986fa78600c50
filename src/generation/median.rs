// Mon Oct 19 2026 - Alex

pub struct MedianCalculator;

impl MedianCalculator {
    /// Median of `values` by sort-and-select on a copy. `None` for empty input.
    pub fn median(values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }

        let mut sorted = values.to_vec();
        sorted.sort_unstable_by(|a, b| a.total_cmp(b));

        let n = sorted.len();
        if n % 2 == 0 {
            Some((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
        } else {
            Some(sorted[n / 2])
        }
    }
}
