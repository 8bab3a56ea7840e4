//! Pure order-statistics helpers for the breakpoint threshold.
//!
//! The exact conventions matter: the splitter's output is sensitive to the
//! interpolation and half-splitting rules used here.

/// Interpolated percentile: the rank is `pct/100 · (n−1)` over the sorted
/// values, interpolating linearly between the surrounding elements.
/// Returns 0.0 for an empty slice.
#[must_use]
pub fn percentile(values: &[f64], pct: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sorted = sorted_copy(values);
    let max_rank = (sorted.len() - 1) as f64;
    let rank = ((pct / 100.0) * max_rank).clamp(0.0, max_rank);
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    if lower == upper {
        return sorted[lower];
    }
    let weight = rank - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * weight
}

/// Arithmetic mean; 0.0 for an empty slice
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divides by `n`, not `n−1`);
/// 0.0 for an empty slice
#[must_use]
pub fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let center = mean(values);
    let variance = values
        .iter()
        .map(|value| (value - center).powi(2))
        .sum::<f64>()
        / values.len() as f64;
    variance.sqrt()
}

/// Median: the middle element, or the average of the two middle elements
/// for an even count. 0.0 for an empty slice.
#[must_use]
pub fn median(values: &[f64]) -> f64 {
    median_of_sorted(&sorted_copy(values))
}

/// First and third quartile as the medians of the lower and upper halves of
/// the sorted values; the halves split exactly at `n/2` and `(n+1)/2`, which
/// excludes the middle element for odd counts.
#[must_use]
pub fn quartiles(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let sorted = sorted_copy(values);
    let n = sorted.len();
    let q1 = median_of_sorted(&sorted[..n / 2]);
    let q3 = median_of_sorted(&sorted[(n + 1) / 2..]);
    (q1, q3)
}

/// Interquartile range: `Q3 − Q1` via [`quartiles`]
#[must_use]
pub fn interquartile_range(values: &[f64]) -> f64 {
    let (q1, q3) = quartiles(values);
    q3 - q1
}

fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

fn median_of_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return 0.0;
    }
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}
