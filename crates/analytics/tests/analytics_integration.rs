//! Integration tests for the analytics crate

use analytics::{
    aggregate, correlation, forecast, linear_trend, moving_average, outliers, seasonality,
    try_forecast, try_linear_trend, try_outliers, AnalyticsError, MetricSet,
};
use approx::assert_relative_eq;

fn wavy() -> Vec<f64> {
    vec![3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0, 5.0, 3.0, 5.0, 8.0]
}

#[test]
fn test_self_correlation_is_one() {
    let s = wavy();
    assert_relative_eq!(correlation(&s, &s), 1.0, epsilon = 1e-12);
}

#[test]
fn test_correlation_is_symmetric() {
    let a = wavy();
    let b: Vec<f64> = a.iter().rev().map(|x| x * 0.5 + 1.0).collect();
    assert_eq!(correlation(&a, &b), correlation(&b, &a));
}

#[test]
fn test_correlation_zero_variance_guard() {
    assert_eq!(correlation(&[1.0, 1.0, 1.0], &[2.0, 3.0, 4.0]), 0.0);
}

#[test]
fn test_linear_trend_perfect_line() {
    let trend = linear_trend(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    assert_relative_eq!(trend.slope, 1.0, epsilon = 1e-12);
    assert_relative_eq!(trend.intercept, 1.0, epsilon = 1e-12);
    assert_relative_eq!(trend.r2, 1.0, epsilon = 1e-12);
}

#[test]
fn test_linear_trend_short_input() {
    assert_eq!(linear_trend(&[5.0]).slope, 0.0);
    assert!(matches!(
        try_linear_trend(&[5.0]),
        Err(AnalyticsError::InsufficientData { required: 2, got: 1 })
    ));
}

#[test]
fn test_outliers_flag_extreme_value() {
    let result = outliers(&[1.0, 2.0, 3.0, 4.0, 100.0]);
    assert_eq!(result.outliers.len(), 1);
    assert_eq!(result.outliers[0].value, 100.0);
    assert_eq!(result.outliers[0].index, 4);
}

#[test]
fn test_outliers_short_input() {
    assert!(outliers(&[1.0, 2.0, 3.0]).outliers.is_empty());
    assert!(try_outliers(&[1.0, 2.0, 3.0])
        .unwrap_err()
        .is_insufficient_data());
}

#[test]
fn test_moving_average_shrinks_at_start() {
    assert_eq!(moving_average(&[1.0, 2.0, 3.0], 7), vec![1.0, 1.5, 2.0]);
}

#[test]
fn test_seasonality_needs_24_points() {
    let short: Vec<f64> = (0..23).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect();
    assert!(!seasonality(&short).has_seasonality);
}

#[test]
fn test_forecast_doubling() {
    let points = forecast(&[10.0, 20.0], 12);
    assert_eq!(points.len(), 12);
    for (k, value) in points.iter().enumerate() {
        assert_relative_eq!(*value, 20.0 * (1.0 + (k + 1) as f64), epsilon = 1e-9);
    }
}

#[test]
fn test_forecast_short_input() {
    assert!(forecast(&[10.0], 12).is_empty());
    assert!(try_forecast(&[], 12).is_err());
}

#[test]
fn test_aggregate_is_idempotent() {
    let set = MetricSet::new()
        .with_metric("sales", vec![10.0, 12.0, 11.0, 13.0, 50.0, 14.0, 15.0])
        .unwrap()
        .with_metric("costs", vec![7.0, 8.0, 8.0, 9.0, 20.0, 9.0, 10.0])
        .unwrap();

    let first = serde_json::to_string(&aggregate(&set)).unwrap();
    let second = serde_json::to_string(&aggregate(&set)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_aggregate_sales_scenario() {
    let set = MetricSet::new()
        .with_metric("sales", vec![10.0, 12.0, 11.0, 13.0, 50.0, 14.0, 15.0])
        .unwrap();

    let report = aggregate(&set);

    let sales_outliers = &report.anomalies.outliers["sales"];
    assert_eq!(sales_outliers.indices(), vec![4]);
    assert_eq!(sales_outliers.outliers[0].value, 50.0);

    // Seven points and a window of seven leave a single residual, whose
    // spread is zero, so nothing is flagged.
    let sales_anomalies = &report.anomalies.anomalies["sales"];
    assert_eq!(sales_anomalies.moving_average.len(), 7);
    assert!(sales_anomalies.anomalies.is_empty());

    assert!(report.correlations.positive.is_empty());
    assert!(report.trends.correlations.is_empty());
}

#[test]
fn test_metric_set_from_json_with_nulls() {
    let set: MetricSet = serde_json::from_str(r#"{"sales": [1.0, null, 3.0]}"#).unwrap();
    assert_eq!(set.get("sales"), Some(&[1.0, 0.0, 3.0][..]));
}
