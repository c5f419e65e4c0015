#[cfg(test)]
mod tests {
    use qtty::Meters;

    use crate::algorithms::weights::{AppliedThreshold, ThresholdPolicy};
    use crate::config::AnalysisConfig;
    use crate::core::domain::{HotspotLabel, PointSet};
    use crate::error::AnalysisError;
    use crate::io::table::ColumnTable;
    use crate::services::hotspot::{
        analyze_points, analyze_table, run_hotspot_analysis, HotspotRequest,
    };

    /// Five high-value points within ~50 m, thirty low-value points ~11 km apart.
    fn cluster_and_background() -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        let mut lats = Vec::new();
        let mut lons = Vec::new();
        let mut values = Vec::new();

        for k in 0..5 {
            lats.push(30.0 + k as f64 * 0.0001);
            lons.push(120.0);
            values.push(100.0);
        }
        for k in 0..30 {
            lats.push(31.0 + k as f64 * 0.1);
            lons.push(121.0);
            values.push(1.0);
        }
        (lats, lons, values)
    }

    #[test]
    fn test_cluster_is_hotspot_and_background_is_not() {
        let (lats, lons, values) = cluster_and_background();
        let points = PointSet::from_columns(&lats, &lons, &values).unwrap();

        let report =
            run_hotspot_analysis(&points, &ThresholdPolicy::Fixed(Meters::new(500.0))).unwrap();

        assert_eq!(report.count, 35);
        assert_eq!(report.hotspot_count(), 5);
        assert_eq!(report.coldspot_count(), 0);

        for result in &report.results[..5] {
            assert_eq!(result.label, HotspotLabel::Hotspot);
            assert_eq!(result.neighbor_count, 4);
            assert!(result.z_score > 2.58);
            assert!(result.p_value < 0.01);
        }
        for result in &report.results[5..] {
            assert_eq!(result.label, HotspotLabel::NotSignificant);
            assert_eq!(result.neighbor_count, 0);
            assert_eq!(result.gi_star, 0.0);
            assert_eq!(result.p_value, 1.0);
        }
    }

    #[test]
    fn test_results_preserve_input_order() {
        let (mut lats, mut lons, mut values) = cluster_and_background();
        lats.rotate_left(7);
        lons.rotate_left(7);
        values.rotate_left(7);
        let points = PointSet::from_columns(&lats, &lons, &values).unwrap();

        let report = analyze_points(&points, None, &AnalysisConfig::default()).unwrap();

        for (i, result) in report.results.iter().enumerate() {
            assert_eq!(result.index, i);
            assert_eq!(result.latitude, lats[i]);
            assert_eq!(result.value, values[i]);
        }
    }

    #[test]
    fn test_identical_values_are_all_degenerate() {
        let points = PointSet::from_columns(
            &[30.0, 30.0001, 30.0002, 30.0003],
            &[120.0; 4],
            &[0.1; 4],
        )
        .unwrap();

        let report = analyze_points(&points, None, &AnalysisConfig::default()).unwrap();

        assert_eq!(report.global.pooled_std, 0.0);
        for result in &report.results {
            assert_eq!(result.neighbor_count, 3);
            assert_eq!(result.gi_star, 0.0);
            assert_eq!(result.z_score, 0.0);
            assert_eq!(result.p_value, 1.0);
            assert_eq!(result.label, HotspotLabel::NotSignificant);
        }
    }

    #[test]
    fn test_zero_radius_point_has_no_neighbors() {
        let points = PointSet::from_columns(
            &[30.0, 30.001, 30.002],
            &[120.0; 3],
            &[1.0, 5.0, 9.0],
        )
        .unwrap()
        .with_radii(&[1000.0, 0.0, 1000.0])
        .unwrap();

        let report = analyze_points(&points, None, &AnalysisConfig::default()).unwrap();

        assert_eq!(report.distance_threshold, AppliedThreshold::Variable);
        let isolated = &report.results[1];
        assert_eq!(isolated.neighbor_count, 0);
        assert_eq!(isolated.gi_star, 0.0);
        assert_eq!(isolated.p_value, 1.0);
        assert_eq!(report.results[0].neighbor_count, 2);
    }

    #[test]
    fn test_coincident_points_are_mutual_neighbors() {
        let points = PointSet::from_columns(&[30.0, 30.0], &[120.0, 120.0], &[2.0, 2.0]).unwrap();
        let report = analyze_points(&points, None, &AnalysisConfig::default()).unwrap();

        assert_eq!(report.distance_threshold, AppliedThreshold::Fixed(Meters::new(1000.0)));
        assert_eq!(report.results[0].neighbor_count, 1);
        assert_eq!(report.results[1].neighbor_count, 1);
    }

    #[test]
    fn test_empty_input_yields_empty_report() {
        let points = PointSet::from_columns(&[], &[], &[]).unwrap();
        let report = analyze_points(&points, None, &AnalysisConfig::default()).unwrap();
        assert_eq!(report.count, 0);
        assert!(report.results.is_empty());
    }

    #[test]
    fn test_analyze_table_uses_distance_column_without_threshold() {
        let table = ColumnTable::new()
            .with_numeric("lat", vec![30.0, 30.001, 30.002])
            .unwrap()
            .with_numeric("lon", vec![120.0; 3])
            .unwrap()
            .with_numeric("v", vec![1.0, 2.0, 3.0])
            .unwrap()
            .with_numeric("distance", vec![50.0, 50.0, 50.0])
            .unwrap();

        let request = HotspotRequest::new("lat", "lon", "v");
        let report = analyze_table(&table, &request, &AnalysisConfig::default()).unwrap();
        assert_eq!(report.distance_threshold, AppliedThreshold::Variable);
        assert!(report.results.iter().all(|r| r.neighbor_count == 0));

        let request = request.with_threshold(5000.0);
        let report = analyze_table(&table, &request, &AnalysisConfig::default()).unwrap();
        assert_eq!(report.distance_threshold, AppliedThreshold::Fixed(Meters::new(5000.0)));
        assert!(report.results.iter().all(|r| r.neighbor_count == 2));
    }

    #[test]
    fn test_explicit_threshold_ignores_malformed_distance_column() {
        let table = ColumnTable::new()
            .with_numeric("lat", vec![30.0, 30.001])
            .unwrap()
            .with_numeric("lon", vec![120.0; 2])
            .unwrap()
            .with_numeric("v", vec![1.0, 2.0])
            .unwrap()
            .with_text("distance", ["near", "far"])
            .unwrap();

        let request = HotspotRequest::new("lat", "lon", "v").with_threshold(100.0);
        assert!(analyze_table(&table, &request, &AnalysisConfig::default()).is_ok());

        let request = HotspotRequest::new("lat", "lon", "v");
        assert!(matches!(
            analyze_table(&table, &request, &AnalysisConfig::default()),
            Err(AnalysisError::NonNumeric { .. })
        ));
    }

    #[test]
    fn test_configured_default_threshold() {
        let config = AnalysisConfig::from_toml_str(
            "[hotspot]\ndefault_distance_threshold = 50.0\n",
        )
        .unwrap();
        let points =
            PointSet::from_columns(&[30.0, 30.001], &[120.0, 120.0], &[1.0, 2.0]).unwrap();

        let report = analyze_points(&points, None, &config).unwrap();
        assert_eq!(report.distance_threshold, AppliedThreshold::Fixed(Meters::new(50.0)));
        assert_eq!(report.results[0].neighbor_count, 0);
    }
}
