use celestial_globular::catalog::load_catalog;
use celestial_globular::{estimate_center, GlobularError, SkyChart, SurveyConfig};
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn sample_catalog() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/equatorial_coordinates.txt")
}

const EXPECTED_CHART: &str = "       12   14   16   18   20   22    0    2    4    6    8   10  
__________________________________________________________________
 75 |  0 |  0 |  0 |  0 |  0 |  0 |  0 |  0 |  0 |  0 |  0 |  0 |
__________________________________________________________________
 60 |  0 |  0 |  0 |  0 |  0 |  0 |  0 |  0 |  0 |  0 |  0 |  0 |
__________________________________________________________________
 45 |  0 |  0 |  0 |  0 |  0 |  0 |  0 |  0 |  0 |  0 |  0 |  0 |
__________________________________________________________________
 30 |  0 |  0 |  2 |  0 |  0 |  0 |  0 |  0 |  0 |  0 |  0 |  0 |
__________________________________________________________________
 15 |  0 |  0 |  0 |  0 |  0 |  0 |  0 |  0 |  0 |  0 |  0 |  0 |
__________________________________________________________________
  0 |  0 |  1 |  0 |  0 |  1 |  0 |  0 |  0 |  0 |  0 |  0 |  0 |
__________________________________________________________________
-15 |  0 |  0 |  0 |  0 |  0 |  0 |  0 |  0 |  0 |  0 |  0 |  0 |
__________________________________________________________________
-30 |  0 |  0 |  3 |  6 |  0 |  0 |  0 |  0 |  0 |  0 |  0 |  0 |
__________________________________________________________________
-45 |  0 |  0 |  2 |  1 |  0 |  0 |  0 |  0 |  0 |  0 |  0 |  0 |
__________________________________________________________________
-60 |  1 |  0 |  0 |  0 |  0 |  0 |  0 |  0 |  0 |  0 |  0 |  0 |
__________________________________________________________________
-75 |  0 |  0 |  0 |  0 |  0 |  0 |  1 |  0 |  0 |  0 |  0 |  0 |
__________________________________________________________________
-90 |  0 |  0 |  0 |  0 |  0 |  0 |  0 |  0 |  0 |  0 |  0 |  0 |
__________________________________________________________________
";

#[test]
fn test_sample_catalog_loads_in_file_order() {
    let clusters = load_catalog(sample_catalog()).expect("Failed to load sample catalog");
    assert_eq!(clusters.len(), 18);
    assert_eq!(clusters[0].ra_min(), 24.1);
    assert_eq!(clusters[0].dec_min(), -4.9);
    assert_eq!(clusters[17].ra_hour(), 21.0);
    assert_eq!(clusters[17].dec_min(), 10.0);
}

#[test]
fn test_sample_chart() {
    let config = SurveyConfig::default();
    let clusters = load_catalog(sample_catalog()).unwrap();
    let chart = SkyChart::build(&clusters, &config.grid).unwrap();

    assert_eq!(chart.total(), 18);
    assert_eq!(chart.off_grid(), 0);
    assert_eq!(chart.count(16, -30), Some(3));
    assert_eq!(chart.count(18, -30), Some(6));
    assert_eq!(chart.count(16, -45), Some(2));
    assert_eq!(chart.count(0, -75), Some(1));

    let output = chart.to_string();
    assert!(
        output.starts_with(EXPECTED_CHART),
        "chart layout changed:\n{}",
        output
    );
    assert!(output.contains("Total number of globular_clusters 18\n"));

    let mean = chart.mean().unwrap();
    assert!((mean.ra_hours - 16.640462962962964).abs() < 1e-9);
    assert!((mean.dec_degrees - (-21.80342592592593)).abs() < 1e-9);
}

#[test]
fn test_sample_center_estimate() {
    let config = SurveyConfig::default();
    let clusters = load_catalog(sample_catalog()).unwrap();
    let estimate = estimate_center(&clusters, &config.window).unwrap();

    assert_eq!(estimate.count, 7);
    assert!((estimate.ra_hours - 17.93285714285714).abs() < 1e-9);
    assert!((estimate.dec_degrees - (-29.15)).abs() < 1e-9);

    let report = estimate.to_string();
    assert!(report.contains("Total number of gcs in range: 7\n"));
    assert!(report.contains("Distance to center (simple mean of D): 24.857143 kly"));
    assert!(report.contains("Distance to center (D * cos(glat) * cos(glon)): 24.589177 kly"));
}

#[cfg(feature = "serde")]
#[test]
fn test_window_override_from_json() {
    let config = SurveyConfig::from_json_str(
        r#"{ "window": { "dec_low_deg": -45.0, "dec_high_deg": -36.0 } }"#,
    )
    .unwrap();
    let clusters = load_catalog(sample_catalog()).unwrap();
    let estimate = estimate_center(&clusters, &config.window).unwrap();

    // NGC 6388 (-44°) and NGC 6441 (-37°).
    assert_eq!(estimate.count, 2);
    assert!((estimate.mean_distance_kly - 35.3).abs() < 1e-9);
}

#[test]
fn test_catalog_without_center_clusters() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "10 0 -29 0 0 0 10").unwrap();
    writeln!(file, "5 30 -10 15 -60 200 40").unwrap();
    file.flush().unwrap();

    let config = SurveyConfig::default();
    let clusters = load_catalog(file.path()).unwrap();

    let chart = SkyChart::build(&clusters, &config.grid).unwrap();
    assert_eq!(chart.total(), 2);
    assert_eq!(chart.count(4, -15), Some(1));

    let err = estimate_center(&clusters, &config.window).unwrap_err();
    assert!(matches!(err, GlobularError::EmptySelection { .. }));
}
