//! Basic example: a dashboard report for a small metric set
//!
//! Run with: cargo run --example basic -p analytics

use analytics::{
    aggregate, forecast, moving_average, outliers, AnalyticsConfig, AnalyticsEngine, MetricSet,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== analytics Basic Examples ===\n");

    let sales = vec![10.0, 12.0, 11.0, 13.0, 50.0, 14.0, 15.0];
    let costs = vec![7.0, 8.0, 8.0, 9.0, 20.0, 9.0, 10.0];
    println!("Sales: {:?}", sales);
    println!("Costs: {:?}\n", costs);

    // 1. Individual computations
    println!("1. Single-series operations");
    let iqr = outliers(&sales);
    println!(
        "   Outliers: {:?} (fences {:.2} .. {:.2})",
        iqr.indices(),
        iqr.lower_threshold,
        iqr.upper_threshold
    );
    println!("   Moving average (7): {:?}", moving_average(&sales, 7));
    println!("   Forecast (3): {:?}\n", forecast(&sales, 3));

    // 2. Aggregate report with default thresholds
    println!("2. Aggregate report");
    let set = MetricSet::new()
        .with_metric("sales", sales)?
        .with_metric("costs", costs)?;
    let report = aggregate(&set);
    println!("{}\n", serde_json::to_string_pretty(&report)?);

    // 3. Configured engine
    println!("3. Engine with window 3, horizon 4");
    let config = AnalyticsConfig::builder().window(3).horizon(4).build()?;
    let engine = AnalyticsEngine::new(config)?;
    let series = engine.process_time_series(&set);
    for (name, points) in &series.forecasts {
        println!("   {} forecast: {:?}", name, points);
    }

    println!("\n=== Examples Complete ===");
    Ok(())
}
