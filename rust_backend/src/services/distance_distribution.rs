use log::info;
use serde::Serialize;

use crate::algorithms::statistics::DistanceSummary;
use crate::config::AnalysisConfig;
use crate::error::{AnalysisError, AnalysisResult};
use crate::io::table::ColumnTable;

/// Number of values falling in one distance range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeCount {
    pub label: String,
    pub count: usize,
}

/// Descriptive statistics and range histogram of a distance column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceDistribution {
    pub statistics: DistanceSummary,
    pub distance_ranges: Vec<RangeCount>,
}

/// Formats a bin edge in meters, or in kilometers for the upper ranges.
fn format_edge(meters: f64, in_km: bool) -> String {
    if in_km {
        format!("{}", meters / 1000.0)
    } else {
        format!("{}", meters)
    }
}

/// Labels for the right-closed bins over `edges` plus the open last bin.
///
/// The default edges give `0-100m`, `100-500m`, `500-1000m`, `1-2km`, `2-5km`, `>5km`.
pub fn range_labels(edges: &[f64]) -> Vec<String> {
    let mut labels: Vec<String> = edges
        .windows(2)
        .map(|w| {
            let in_km = w[1] > 1000.0;
            let unit = if in_km { "km" } else { "m" };
            format!(
                "{}-{}{}",
                format_edge(w[0], in_km),
                format_edge(w[1], in_km),
                unit
            )
        })
        .collect();

    if let Some(&last) = edges.last() {
        let in_km = last >= 1000.0;
        let unit = if in_km { "km" } else { "m" };
        labels.push(format!(">{}{}", format_edge(last, in_km), unit));
    }
    labels
}

/// Counts values per bin `(e_k, e_k+1]`, with a final bin `(e_last, ∞)`.
///
/// Values at or below the first edge, and NaN, fall in no bin.
pub fn histogram(values: &[f64], edges: &[f64]) -> Vec<usize> {
    let mut counts = vec![0; edges.len()];
    for &v in values {
        if edges.is_empty() || v.is_nan() || v <= edges[0] {
            continue;
        }
        // index of the first edge >= v; v belongs to the bin ending there
        let bin = edges.partition_point(|&e| e < v);
        counts[bin - 1] += 1;
    }
    counts
}

/// Summarizes a sample of distances.
///
/// Missing (NaN) and infinite entries are skipped before anything is computed.
pub fn describe_distances(values: &[f64], config: &AnalysisConfig) -> AnalysisResult<DistanceDistribution> {
    let values: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    let statistics = DistanceSummary::compute(&values)
        .ok_or_else(|| AnalysisError::EmptyInput("distance column has no values".to_string()))?;

    let edges = &config.distribution.range_edges;
    let distance_ranges = range_labels(edges)
        .into_iter()
        .zip(histogram(&values, edges))
        .map(|(label, count)| RangeCount { label, count })
        .collect();

    Ok(DistanceDistribution {
        statistics,
        distance_ranges,
    })
}

/// Reads `distance_column` from `table` and summarizes it.
pub fn analyze_distance_distribution(
    table: &ColumnTable,
    distance_column: &str,
    config: &AnalysisConfig,
) -> AnalysisResult<DistanceDistribution> {
    let values = table.numeric_column(distance_column)?;
    info!(
        "Distance distribution: column='{}', n={}",
        distance_column,
        values.len()
    );
    describe_distances(&values, config)
}
