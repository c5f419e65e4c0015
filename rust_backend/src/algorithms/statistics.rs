//! Global moments, normal-distribution helpers and descriptive summaries.

use serde::{Deserialize, Serialize};
use statrs::function::erf::erfc;
use std::f64::consts::SQRT_2;

/// Mean and pooled (population) standard deviation of the analyzed attribute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlobalStats {
    pub n: usize,
    pub mean: f64,
    pub pooled_std: f64,
}

impl GlobalStats {
    /// Computes `mean = Σx/n` and `pooled_std = sqrt(Σx²/n − mean²)`.
    ///
    /// This is the population (no Bessel correction) deviation from raw
    /// moments. Constant input yields exactly zero, and rounding that would
    /// make the variance negative is clamped to zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use geo_hotspot::algorithms::statistics::GlobalStats;
    ///
    /// let stats = GlobalStats::compute(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    /// assert_eq!(stats.mean, 3.0);
    /// assert!((stats.pooled_std - 2.0_f64.sqrt()).abs() < 1e-12);
    /// ```
    pub fn compute(values: &[f64]) -> Self {
        let n = values.len();
        if n == 0 {
            return Self {
                n,
                mean: 0.0,
                pooled_std: 0.0,
            };
        }

        let count = n as f64;
        let (sum, sum_sq) = values
            .iter()
            .fold((0.0, 0.0), |(s, sq), &x| (s + x, sq + x * x));
        let mean = sum / count;

        let constant = values.iter().all(|&x| x == values[0]);
        let pooled_std = if constant {
            0.0
        } else {
            (sum_sq / count - mean * mean).max(0.0).sqrt()
        };

        Self {
            n,
            mean,
            pooled_std,
        }
    }
}

/// Standard normal cumulative distribution function Φ(x).
pub fn standard_normal_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}

/// Two-tailed p-value `2 · (1 − Φ(|z|))`, clamped to `[0, 1]`.
///
/// Evaluated as `2 · Φ(−|z|)` so the upper tail keeps its precision.
///
/// # Examples
///
/// ```
/// use geo_hotspot::algorithms::statistics::two_tailed_p_value;
///
/// assert_eq!(two_tailed_p_value(0.0), 1.0);
/// assert!((two_tailed_p_value(1.959964) - 0.05).abs() < 1e-6);
/// ```
pub fn two_tailed_p_value(z: f64) -> f64 {
    (2.0 * standard_normal_cdf(-z.abs())).clamp(0.0, 1.0)
}

/// Quantile with linear interpolation between closest ranks.
///
/// `sorted` must be ascending and non-empty; `q` is in `[0, 1]`.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let weight = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * weight
}

/// Percentiles reported by [`DistanceSummary`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Percentiles {
    #[serde(rename = "10")]
    pub p10: f64,
    #[serde(rename = "25")]
    pub p25: f64,
    #[serde(rename = "50")]
    pub p50: f64,
    #[serde(rename = "75")]
    pub p75: f64,
    #[serde(rename = "90")]
    pub p90: f64,
}

/// Descriptive statistics of a sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceSummary {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n − 1); zero for fewer than two values.
    pub std: f64,
    pub min: f64,
    pub max: f64,
    pub median: f64,
    pub q1: f64,
    pub q3: f64,
    pub percentiles: Percentiles,
}

impl DistanceSummary {
    /// Summarizes `values`, or returns `None` when there are none.
    pub fn compute(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let count = values.len();
        let mean = values.iter().sum::<f64>() / count as f64;
        let std = if count < 2 {
            0.0
        } else {
            let ss: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
            (ss / (count - 1) as f64).sqrt()
        };

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let q = |p: f64| quantile_sorted(&sorted, p);

        Some(Self {
            count,
            mean,
            std,
            min: sorted[0],
            max: sorted[count - 1],
            median: q(0.5),
            q1: q(0.25),
            q3: q(0.75),
            percentiles: Percentiles {
                p10: q(0.1),
                p25: q(0.25),
                p50: q(0.5),
                p75: q(0.75),
                p90: q(0.9),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_stats_population_std() {
        let stats = GlobalStats::compute(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert_eq!(stats.n, 8);
        assert_eq!(stats.mean, 5.0);
        assert!((stats.pooled_std - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_global_stats_constant_values_have_zero_std() {
        let stats = GlobalStats::compute(&[0.1; 10]);
        assert_eq!(stats.pooled_std, 0.0);
    }

    #[test]
    fn test_global_stats_empty() {
        let stats = GlobalStats::compute(&[]);
        assert_eq!(stats.n, 0);
        assert_eq!(stats.pooled_std, 0.0);
    }

    #[test]
    fn test_standard_normal_cdf_reference_points() {
        assert!((standard_normal_cdf(0.0) - 0.5).abs() < 1e-15);
        assert!((standard_normal_cdf(1.0) - 0.841_344_746_068_543).abs() < 1e-10);
        assert!((standard_normal_cdf(-2.58) - 0.004_940_015_757_77).abs() < 1e-9);
    }

    #[test]
    fn test_p_value_bounds_for_extreme_scores() {
        assert_eq!(two_tailed_p_value(50.0), 0.0);
        assert_eq!(two_tailed_p_value(-50.0), 0.0);
        assert!((two_tailed_p_value(2.58) - 0.009_880_031_515_5).abs() < 1e-8);
        assert_eq!(two_tailed_p_value(2.58), two_tailed_p_value(-2.58));
    }

    #[test]
    fn test_quantile_interpolates() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile_sorted(&sorted, 0.5), 2.5);
        assert_eq!(quantile_sorted(&sorted, 0.0), 1.0);
        assert_eq!(quantile_sorted(&sorted, 1.0), 4.0);
        assert!((quantile_sorted(&sorted, 0.1) - 1.3).abs() < 1e-12);
    }

    #[test]
    fn test_distance_summary() {
        let summary = DistanceSummary::compute(&[500.0, 100.0, 300.0, 200.0, 400.0]).unwrap();
        assert_eq!(summary.count, 5);
        assert_eq!(summary.mean, 300.0);
        assert_eq!(summary.min, 100.0);
        assert_eq!(summary.max, 500.0);
        assert_eq!(summary.median, 300.0);
        assert_eq!(summary.q1, 200.0);
        assert_eq!(summary.q3, 400.0);
        assert!((summary.std - 158.113_883_008_418_97).abs() < 1e-9);
        assert!((summary.percentiles.p90 - 460.0).abs() < 1e-9);
    }

    #[test]
    fn test_distance_summary_single_value() {
        let summary = DistanceSummary::compute(&[42.0]).unwrap();
        assert_eq!(summary.std, 0.0);
        assert_eq!(summary.median, 42.0);
        assert!(DistanceSummary::compute(&[]).is_none());
    }
}
