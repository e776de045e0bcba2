use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use revenue_forecast::{
    DailySeries, ForecastConfig, ForecastError, ForecastPipeline, R2Score, TransactionRecord,
};
use std::io::Write;
use tempfile::NamedTempFile;

const SAMPLE_REVENUE: [f64; 10] = [100.0, 110.0, 90.0, 120.0, 130.0, 80.0, 95.0, 105.0, 115.0, 125.0];

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// Helper function to create a sample transactions file
fn create_sample_data() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();

    writeln!(file, "Order ID,Order Date,Category,Revenue").unwrap();
    let start = ymd(2023, 1, 1);
    for (i, (date, revenue)) in start.iter_days().zip(SAMPLE_REVENUE).enumerate() {
        // Split each day's revenue across two orders
        writeln!(file, "{},{},Shoes,{}", 2 * i, date, revenue * 0.25).unwrap();
        writeln!(file, "{},{} 15:30:00,Bags,{}", 2 * i + 1, date, revenue * 0.75).unwrap();
    }

    file
}

#[test]
fn test_ten_day_scenario() {
    let series = DailySeries::new(ymd(2023, 1, 1), SAMPLE_REVENUE.to_vec()).unwrap();
    let pipeline = ForecastPipeline::new(ForecastConfig::default()).unwrap();

    let report = pipeline.run_series(series).unwrap();

    assert_eq!(report.train().len(), 8);
    assert_eq!(report.test().len(), 2);
    assert_eq!(report.test_predictions.len(), 2);
    assert!(report.metrics.rmse.is_finite());
    assert!(report.metrics.mae.is_finite());
    assert!(report.metrics.rmse >= 0.0);
    assert!(report.metrics.r2.is_defined());

    assert_eq!(report.forecast.horizon(), 30);
    assert_eq!(report.forecast.dates()[0], ymd(2023, 1, 11));
    assert_eq!(report.forecast.dates()[29], ymd(2023, 2, 9));
    assert!(report.forecast.values().iter().all(|v| v.is_finite()));

    // Constant month and year columns carry no weight
    assert_eq!(report.model.coefficient("year"), Some(0.0));
    assert_eq!(report.model.coefficient("month"), Some(0.0));
    assert_eq!(report.model.rank(), 2);
}

#[test]
fn test_full_csv_workflow() {
    let data_file = create_sample_data();
    let pipeline = ForecastPipeline::new(ForecastConfig::new(0.8, 5).unwrap()).unwrap();

    let report = pipeline.run_csv(data_file.path()).unwrap();

    assert_eq!(report.series.len(), 10);
    for (got, expected) in report.series.revenues().iter().zip(SAMPLE_REVENUE) {
        assert!((got - expected).abs() < 1e-9);
    }
    assert_eq!(report.split_index, 8);
    assert_eq!(
        report.forecast.dates(),
        vec![
            ymd(2023, 1, 11),
            ymd(2023, 1, 12),
            ymd(2023, 1, 13),
            ymd(2023, 1, 14),
            ymd(2023, 1, 15)
        ]
    );
}

#[test]
fn test_gaps_are_zero_filled_before_fitting() {
    let records = vec![
        TransactionRecord::new(ymd(2023, 4, 1), 50.0).unwrap(),
        TransactionRecord::new(ymd(2023, 4, 5), 70.0).unwrap(),
        TransactionRecord::new(ymd(2023, 4, 3), 10.0).unwrap(),
    ];

    let report = ForecastPipeline::default().run(&records).unwrap();

    assert_eq!(report.series.revenues(), vec![50.0, 0.0, 10.0, 0.0, 70.0]);
    assert_eq!(report.train().len(), 4);
    assert_eq!(report.test().len(), 1);
    // One test day is constant by definition
    assert_eq!(report.metrics.r2, R2Score::Undefined);
}

#[test]
fn test_constant_test_segment() {
    let mut revenue: Vec<f64> = (0..16).map(|i| 10.0 * i as f64).collect();
    revenue.extend([40.0; 4]);
    let series = DailySeries::new(ymd(2023, 8, 1), revenue).unwrap();

    let report = ForecastPipeline::default().run_series(series).unwrap();

    assert_eq!(report.test().len(), 4);
    assert_eq!(report.metrics.r2, R2Score::Undefined);
    assert!(report.metrics.rmse > 0.0);
}

#[test]
fn test_empty_source_aborts() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Order Date,Revenue").unwrap();

    let err = ForecastPipeline::default()
        .run_csv(file.path())
        .unwrap_err();

    assert!(matches!(err, ForecastError::EmptySeries));
    assert_eq!(err.stage(), "aggregator");
}

#[test]
fn test_report_serializes() {
    let series = DailySeries::new(ymd(2023, 1, 1), SAMPLE_REVENUE.to_vec()).unwrap();
    let report = ForecastPipeline::new(ForecastConfig::new(0.8, 3).unwrap())
        .unwrap()
        .run_series(series)
        .unwrap();

    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["split_index"], 8);
    assert_eq!(json["series"]["points"].as_array().unwrap().len(), 10);
    assert_eq!(json["series"]["points"][0]["date"], "2023-01-01");
    assert_eq!(json["forecast"]["points"].as_array().unwrap().len(), 3);
    assert!(json["metrics"]["rmse"].is_number());
    assert_eq!(json["model"]["coefficients"].as_array().unwrap().len(), 4);
}
