use log::{debug, info};
use qtty::Meters;
use serde::Serialize;

use crate::algorithms::classification::classify;
use crate::algorithms::distance::DistanceMatrix;
use crate::algorithms::getis_ord::compute_all;
use crate::algorithms::statistics::GlobalStats;
use crate::algorithms::weights::{AppliedThreshold, ThresholdPolicy, WeightMatrix};
use crate::config::AnalysisConfig;
use crate::core::domain::{HotspotLabel, HotspotResult, PointSet};
use crate::error::AnalysisResult;
use crate::io::table::ColumnTable;

/// Column names and optional threshold for one hotspot request.
#[derive(Debug, Clone, PartialEq)]
pub struct HotspotRequest {
    pub latitude_column: String,
    pub longitude_column: String,
    pub value_column: String,
    /// Fixed neighborhood radius in meters. `None` lets the per-point
    /// distance column (if any) or the configured default decide.
    pub distance_threshold: Option<f64>,
}

impl HotspotRequest {
    pub fn new(
        latitude_column: impl Into<String>,
        longitude_column: impl Into<String>,
        value_column: impl Into<String>,
    ) -> Self {
        Self {
            latitude_column: latitude_column.into(),
            longitude_column: longitude_column.into(),
            value_column: value_column.into(),
            distance_threshold: None,
        }
    }

    pub fn with_threshold(mut self, meters: f64) -> Self {
        self.distance_threshold = Some(meters);
        self
    }
}

/// Complete outcome of one Gi* analysis run.
#[derive(Debug, Clone, Serialize)]
pub struct HotspotReport {
    pub count: usize,
    pub distance_threshold: AppliedThreshold,
    pub results: Vec<HotspotResult>,
    #[serde(skip)]
    pub global: GlobalStats,
}

impl HotspotReport {
    pub fn hotspot_count(&self) -> usize {
        self.count_label(HotspotLabel::Hotspot)
    }

    pub fn coldspot_count(&self) -> usize {
        self.count_label(HotspotLabel::Coldspot)
    }

    fn count_label(&self, label: HotspotLabel) -> usize {
        self.results.iter().filter(|r| r.label == label).count()
    }
}

/// Runs the Gi* pipeline on validated points under an already-resolved policy.
///
/// Stages run strictly in order: distance matrix, weight matrix, global
/// statistics, per-point Gi*, classification. Results keep input order.
pub fn run_hotspot_analysis(points: &PointSet, policy: &ThresholdPolicy) -> AnalysisResult<HotspotReport> {
    let n = points.len();
    let applied = policy.applied();
    info!("Gi* hotspot analysis: n={}, threshold={}", n, applied);

    let distances = DistanceMatrix::build(&points.locations())?;
    debug!("distance matrix built ({}x{})", n, n);

    let weights = WeightMatrix::build(&distances, policy)?;
    drop(distances);
    debug!("weight matrix built");

    let values = points.values();
    let global = GlobalStats::compute(&values);
    debug!(
        "global statistics: mean={}, pooled_std={}",
        global.mean, global.pooled_std
    );

    let local = compute_all(&weights, &values, &global);

    let results: Vec<HotspotResult> = points
        .records()
        .iter()
        .zip(local)
        .map(|(record, stat)| HotspotResult {
            index: record.index,
            latitude: record.location.latitude.value(),
            longitude: record.location.longitude.value(),
            value: record.value,
            gi_star: stat.gi_star,
            z_score: stat.z_score,
            p_value: stat.p_value,
            label: classify(stat.z_score),
            neighbor_count: stat.neighbor_count,
        })
        .collect();

    let report = HotspotReport {
        count: n,
        distance_threshold: applied,
        results,
        global,
    };
    info!(
        "Gi* hotspot analysis finished: {} hotspots, {} coldspots",
        report.hotspot_count(),
        report.coldspot_count()
    );
    Ok(report)
}

/// Resolves the threshold policy for `points` and runs the analysis.
///
/// An explicit `requested` threshold is used as a fixed radius. Otherwise
/// per-point radii carried by `points` select the variable policy, and
/// without them the configured default radius applies.
pub fn analyze_points(
    points: &PointSet,
    requested: Option<Meters>,
    config: &AnalysisConfig,
) -> AnalysisResult<HotspotReport> {
    let policy = ThresholdPolicy::resolve(requested, points.radii(), config.default_threshold());
    run_hotspot_analysis(points, &policy)
}

/// Validates the request columns in `table` and runs the analysis.
///
/// # Errors
///
/// Missing or non-numeric columns are reported before any computation starts.
/// The per-point distance column is only read when no threshold was requested.
pub fn analyze_table(
    table: &ColumnTable,
    request: &HotspotRequest,
    config: &AnalysisConfig,
) -> AnalysisResult<HotspotReport> {
    let radius_column = request
        .distance_threshold
        .is_none()
        .then_some(config.hotspot.distance_column.as_str());
    let points = table.point_set(
        &request.latitude_column,
        &request.longitude_column,
        &request.value_column,
        radius_column,
    )?;
    analyze_points(&points, request.distance_threshold.map(Meters::new), config)
}
