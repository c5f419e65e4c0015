//! Local Getis-Ord Gi* statistic over a binary weight matrix.
//!
//! For point `i` with weight row `w_i`:
//!
//! ```text
//! numerator = Σ_j w_ij·x_j − mean·Σ_j w_ij
//! denom     = pooled_std · sqrt((n·Σ_j w_ij² − (Σ_j w_ij)²) / (n − 1))
//! ```
//!
//! The ratio is already a standard-normal score, so `z_score == gi_star`.
//! A zero denominator (no neighbors, or no global variance) yields the fixed
//! output `gi_star = 0`, `z_score = 0`, `p_value = 1`.

use rayon::prelude::*;

use crate::algorithms::statistics::{two_tailed_p_value, GlobalStats};
use crate::algorithms::weights::WeightMatrix;

/// Gi* output for one point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalStatistic {
    pub gi_star: f64,
    pub z_score: f64,
    pub p_value: f64,
    pub neighbor_count: usize,
}

impl LocalStatistic {
    fn degenerate(neighbor_count: usize) -> Self {
        Self {
            gi_star: 0.0,
            z_score: 0.0,
            p_value: 1.0,
            neighbor_count,
        }
    }
}

/// Computes Gi* for a single weight row.
///
/// # Examples
///
/// ```
/// use geo_hotspot::algorithms::getis_ord::local_statistic;
/// use geo_hotspot::algorithms::statistics::GlobalStats;
///
/// let values = [1.0, 2.0, 3.0];
/// let stats = GlobalStats::compute(&values);
///
/// // isolated point: zero denominator
/// let isolated = local_statistic(&[0, 0, 0], &values, &stats);
/// assert_eq!(isolated.gi_star, 0.0);
/// assert_eq!(isolated.p_value, 1.0);
/// assert_eq!(isolated.neighbor_count, 0);
/// ```
pub fn local_statistic(weights: &[u8], values: &[f64], stats: &GlobalStats) -> LocalStatistic {
    let mut sum_w = 0.0;
    let mut sum_w_sq = 0.0;
    let mut weighted_sum = 0.0;
    let mut neighbor_count = 0;

    for (&w, &x) in weights.iter().zip(values) {
        if w != 0 {
            let w = f64::from(w);
            sum_w += w;
            sum_w_sq += w * w;
            weighted_sum += w * x;
            neighbor_count += 1;
        }
    }

    let n = stats.n as f64;
    let numerator = weighted_sum - stats.mean * sum_w;
    // with fewer than two points there is no variance to scale by
    let variance_term = if stats.n < 2 {
        0.0
    } else {
        (n * sum_w_sq - sum_w * sum_w) / (n - 1.0)
    };
    let denom = stats.pooled_std * variance_term.sqrt();

    if denom == 0.0 {
        return LocalStatistic::degenerate(neighbor_count);
    }

    let gi_star = numerator / denom;
    LocalStatistic {
        gi_star,
        z_score: gi_star,
        p_value: two_tailed_p_value(gi_star),
        neighbor_count,
    }
}

/// Computes Gi* for every point, in index order. Rows are evaluated in parallel.
pub fn compute_all(weights: &WeightMatrix, values: &[f64], stats: &GlobalStats) -> Vec<LocalStatistic> {
    (0..weights.len())
        .into_par_iter()
        .map(|i| local_statistic(weights.row(i), values, stats))
        .collect()
}
