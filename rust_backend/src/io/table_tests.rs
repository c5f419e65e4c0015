#[cfg(test)]
mod tests {
    use crate::error::AnalysisError;
    use crate::io::table::{Column, ColumnTable};

    fn sample_table() -> ColumnTable {
        ColumnTable::new()
            .with_numeric("lat", vec![39.90, 39.91, 39.92])
            .unwrap()
            .with_numeric("lon", vec![116.39, 116.40, 116.41])
            .unwrap()
            .with_numeric("value", vec![1.0, 2.0, 3.0])
            .unwrap()
    }

    /// Test reading text cells as numbers
    #[test]
    fn test_numeric_column_parses_text() {
        let table = ColumnTable::new()
            .with_text("value", [" 1.5", "2", "-3e2 "])
            .unwrap();
        assert_eq!(table.numeric_column("value").unwrap(), vec![1.5, 2.0, -300.0]);
    }

    /// Test that the first unparsable cell is reported with its row
    #[test]
    fn test_numeric_column_reports_bad_cell() {
        let table = ColumnTable::new()
            .with_text("value", ["1", "n/a", "x"])
            .unwrap();
        match table.numeric_column("value") {
            Err(AnalysisError::NonNumeric { column, row, raw }) => {
                assert_eq!(column, "value");
                assert_eq!(row, 1);
                assert_eq!(raw, "n/a");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    /// Test missing columns
    #[test]
    fn test_missing_column() {
        let table = sample_table();
        assert!(matches!(
            table.numeric_column("sales"),
            Err(AnalysisError::MissingColumn(name)) if name == "sales"
        ));
        assert!(matches!(
            table.point_set("lat", "lon", "sales", None),
            Err(AnalysisError::MissingColumn(name)) if name == "sales"
        ));
    }

    /// Test that all columns must share a row count
    #[test]
    fn test_with_column_rejects_ragged_columns() {
        let result = sample_table().with_numeric("extra", vec![1.0]);
        assert!(matches!(
            result,
            Err(AnalysisError::LengthMismatch { expected: 3, found: 1, .. })
        ));
    }

    /// Test replacing an existing column keeps a single entry
    #[test]
    fn test_with_column_replaces_by_name() {
        let table = sample_table()
            .with_numeric("value", vec![9.0, 9.0, 9.0])
            .unwrap();
        assert_eq!(
            table.column("value"),
            Some(&Column::Numeric(vec![9.0, 9.0, 9.0]))
        );
        assert_eq!(table.rows(), 3);
    }

    /// Test that coordinates must be finite
    #[test]
    fn test_point_set_rejects_nan_coordinates() {
        let table = sample_table()
            .with_numeric("lat", vec![39.90, f64::NAN, 39.92])
            .unwrap();
        assert!(matches!(
            table.point_set("lat", "lon", "value", None),
            Err(AnalysisError::NonFinite { row: 1, .. })
        ));
    }

    /// Test that a present radius column is attached
    #[test]
    fn test_point_set_with_radius_column() {
        let table = sample_table()
            .with_text("distance", ["100", "250", "0"])
            .unwrap();
        let points = table
            .point_set("lat", "lon", "value", Some("distance"))
            .unwrap();
        let radii: Vec<f64> = points.radii().unwrap().iter().map(|r| r.value()).collect();
        assert_eq!(radii, vec![100.0, 250.0, 0.0]);
    }

    /// Test that an absent radius column is not an error
    #[test]
    fn test_point_set_without_radius_column() {
        let points = sample_table()
            .point_set("lat", "lon", "value", Some("distance"))
            .unwrap();
        assert_eq!(points.len(), 3);
        assert!(points.radii().is_none());
    }

    /// Test that a malformed radius column fails the request
    #[test]
    fn test_point_set_rejects_malformed_radius() {
        let table = sample_table()
            .with_text("distance", ["100", "far", "0"])
            .unwrap();
        assert!(matches!(
            table.point_set("lat", "lon", "value", Some("distance")),
            Err(AnalysisError::NonNumeric { row: 1, .. })
        ));
    }

    #[test]
    fn test_empty_table() {
        let table = ColumnTable::new();
        assert_eq!(table.rows(), 0);
        assert!(!table.has_column("lat"));
    }
}
