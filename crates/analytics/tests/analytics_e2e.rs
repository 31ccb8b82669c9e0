//! End-to-end tests for the analytics crate
//!
//! Tests complete dashboard workflows using only this crate's API.

use analytics::{
    bucket_by_interval, entity_analytics, entity_time_series, group_statistics, scorecard,
    sector_analysis, AnalyticsConfig, AnalyticsEngine, AnalyticsError, CorrelationSign,
    DatedValue, EntiteBusiness, EntityRecord, GroupedValue, Interval, KpiStatus,
    LabelRecord, MetricSet, PatternType, ScoreGrade,
};
use approx::assert_relative_eq;
use chrono::{Duration, NaiveDate, NaiveDateTime};

fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}

fn entity(type_id: Option<i64>, secteur: &str, sous_secteur: &str, created: NaiveDateTime) -> EntityRecord {
    EntityRecord {
        type_entreprise_id: type_id,
        entite_business: Some(EntiteBusiness {
            secteur: Some(secteur.to_string()),
            sous_secteur: Some(sous_secteur.to_string()),
        }),
        created_at: Some(created),
        ..Default::default()
    }
}

/// Two years of monthly figures with a yearly cycle and a rising baseline.
fn monthly_metrics() -> MetricSet {
    let cycle = [0.0, 2.0, 5.0, 9.0, 12.0, 14.0, 13.0, 10.0, 6.0, 3.0, 1.0, 0.0];
    let revenue: Vec<f64> = (0..24).map(|i| 100.0 + cycle[i % 12] * 10.0).collect();
    let visitors: Vec<f64> = revenue.iter().map(|r| r * 3.0 + 5.0).collect();
    let returns: Vec<f64> = revenue.iter().map(|r| 500.0 - r).collect();

    MetricSet::new()
        .with_metric("revenue", revenue)
        .unwrap()
        .with_metric("visitors", visitors)
        .unwrap()
        .with_metric("returns", returns)
        .unwrap()
}

#[test]
fn e2e_dashboard_report() {
    let engine = AnalyticsEngine::default();
    let report = engine.aggregate(&monthly_metrics());

    let names: Vec<&str> = report.metric_names().collect();
    assert_eq!(names, vec!["returns", "revenue", "visitors"]);

    let revenue_season = report.trends.seasonality["revenue"];
    assert!(revenue_season.has_seasonality);
    assert_eq!(revenue_season.period, Some(12));

    let revenue_pattern = report.anomalies.patterns["revenue"];
    assert_eq!(revenue_pattern.pattern_type, Some(PatternType::Cyclic));

    let strong = &report.correlations.strong["revenue"]["visitors"];
    assert_eq!(strong.sign, CorrelationSign::Positive);
    assert_relative_eq!(strong.strength, 1.0, epsilon = 1e-9);

    let inverse = report.correlations.negative["returns"]["revenue"];
    assert_relative_eq!(inverse, -1.0, epsilon = 1e-9);
    assert_relative_eq!(
        report.trends.correlations["revenue"]["returns"],
        inverse,
        epsilon = 1e-12
    );
}

#[test]
fn e2e_report_serializes_with_dashboard_field_names() {
    let report = AnalyticsEngine::default().aggregate(&monthly_metrics());
    let json = serde_json::to_value(&report).unwrap();

    assert!(json["trends"]["seasonality"]["revenue"]["hasSeasonality"].is_boolean());
    assert!(json["anomalies"]["anomalies"]["revenue"]["movingAverage"].is_array());
    assert!(json["anomalies"]["outliers"]["revenue"]["lowerThreshold"].is_number());
    assert_eq!(
        json["anomalies"]["patterns"]["revenue"]["patternType"],
        serde_json::json!("cyclic")
    );
    assert_eq!(
        json["correlations"]["strong"]["revenue"]["visitors"]["type"],
        serde_json::json!("positive")
    );
}

#[test]
fn e2e_configured_engine() {
    let config = AnalyticsConfig::builder()
        .window(3)
        .sigma(1.5)
        .horizon(4)
        .build()
        .unwrap();
    let engine = AnalyticsEngine::new(config).unwrap();

    let set = MetricSet::new()
        .with_metric("orders", vec![4.0, 8.0])
        .unwrap();
    let report = engine.process_time_series(&set);

    assert_eq!(report.moving_averages["orders"], vec![4.0, 6.0]);
    assert_eq!(report.forecasts["orders"], vec![16.0, 24.0, 32.0, 40.0]);
    assert_eq!(report.time_series_data["orders"], vec![4.0, 8.0]);
}

#[test]
fn e2e_invalid_config_from_json() {
    let config: AnalyticsConfig =
        serde_json::from_str(r#"{"seasonality": {"threshold": 1.5}}"#).unwrap();
    assert!(AnalyticsEngine::new(config).is_err());
}

#[test]
fn e2e_bucketed_time_series() {
    let points = vec![
        DatedValue::new(at(2024, 1, 3), 10.0),
        DatedValue::new(at(2024, 1, 20), 12.0),
        DatedValue::new(at(2024, 2, 1), 7.0),
    ];

    let monthly = bucket_by_interval(&points, Interval::from_name("MONTHLY")).unwrap();
    assert_eq!(monthly.get("2024-01"), Some(&[10.0, 12.0][..]));
    assert_eq!(monthly.get("2024-02"), Some(&[7.0][..]));

    let report = AnalyticsEngine::default().process_time_series(&monthly);
    assert_eq!(report.moving_averages["2024-01"], vec![10.0, 11.0]);
    assert!(report.forecasts["2024-02"].is_empty());
}

#[test]
fn e2e_directory_breakdown() {
    let now = at(2024, 6, 30);
    let entities = vec![
        entity(Some(1), "Retail", "Food", now - Duration::days(3)),
        entity(Some(1), "Retail", "Clothing", now - Duration::days(90)),
        entity(Some(2), "Industry", "Steel", now - Duration::days(10)),
        entity(Some(9), "Industry", "Steel", now - Duration::days(400)),
        entity(None, "Retail", "Food", now - Duration::days(1)),
    ];
    let types = vec![LabelRecord::new(1, "SARL"), LabelRecord::new(2, "SA")];
    let secteurs = vec![
        LabelRecord::new(1, "Retail"),
        LabelRecord::new(2, "Industry"),
        LabelRecord::new(3, "Services"),
    ];
    let sous_secteurs = vec![LabelRecord::new(1, "Food"), LabelRecord::new(2, "Steel")];

    let by_type = entity_analytics(&entities, &types);
    assert_eq!(by_type.total_entities, 4);
    assert_eq!(by_type.entity_distribution.get("SARL"), 2);
    assert_eq!(by_type.entity_distribution.get("Unknown"), 1);
    assert_relative_eq!(by_type.performance["SARL"].percentage, 50.0, epsilon = 1e-9);

    let sectors = sector_analysis(&entities, &secteurs, &sous_secteurs, now);
    assert_eq!(sectors.secteurs.get("Retail"), 3);
    assert_eq!(sectors.secteurs.get("Services"), 0);
    assert_eq!(sectors.sous_secteurs.get("Clothing"), 1);
    assert!(!sectors.performance.contains_key("Services"));

    let retail = sectors.trends["Retail"];
    assert_eq!(retail.total, 3);
    assert_eq!(retail.recent, 2);
    assert_relative_eq!(retail.growth, 200.0 / 3.0, epsilon = 1e-9);

    let stats = group_statistics(&[
        GroupedValue::new("Retail", 10.0),
        GroupedValue::new("Retail", 30.0),
        GroupedValue::new("Industry", 5.0),
    ]);
    assert_relative_eq!(stats["Retail"].mean, 20.0);
    assert_relative_eq!(stats["Retail"].growth_rate, 200.0);
    assert_eq!(stats["Industry"].std_dev, 0.0);
}

#[test]
fn e2e_directory_scorecard_and_creations() {
    let json = r#"[
        {"id": 1, "entiteBusiness": {"secteur": "Retail"}, "entiteContact": {"email": "a@b.ma"},
         "region": "Rabat", "risk": 2, "createdAt": "2024-01-08T09:00:00"},
        {"id": 2, "entiteBusiness": {"secteur": "Industry"}, "entiteContact": {},
         "region": "Fes", "risk": 5, "createdAt": "2024-01-10T14:30:00"},
        {"id": 3, "entiteBusiness": {"secteur": "Retail"}, "region": "Rabat",
         "createdAt": "2024-04-02T08:00:00"},
        {"id": 4, "entiteBusiness": {"secteur": "Services"}, "entiteContact": {},
         "risk": 1, "createdAt": "2024-07-15T11:00:00"}
    ]"#;
    let entities: Vec<EntityRecord> = serde_json::from_str(json).unwrap();

    let card = scorecard(&entities).unwrap();
    assert_eq!(card.kpis.business_data_completeness, 100.0);
    assert_eq!(card.kpis.contact_data_completeness, 75.0);
    assert_eq!(card.kpis.contact_data_status, KpiStatus::Yellow);
    assert_eq!(card.kpis.sector_diversity, 3);
    assert_eq!(card.kpis.sector_diversity_status, KpiStatus::Yellow);
    assert_eq!(card.rankings.top_sectors[0].name, "Retail");
    assert_eq!(card.rankings.top_sectors[0].percentage, 50.0);
    assert_eq!(card.action_items.high_priority.len(), 1);
    assert_eq!(
        card.action_items.high_priority[0].description,
        "Current completeness: 75.0%. Target: 80%+"
    );
    // 30 + 15 + 3 + 2 + 1.5
    assert_relative_eq!(card.summary.overall_score, 51.5, epsilon = 1e-9);
    assert_eq!(card.summary.score_grade, ScoreGrade::D);

    let weekly = entity_time_series(&entities, Interval::Weekly, None, None);
    assert_eq!(weekly[0], ("2024-01-08".to_string(), 2));
    assert_eq!(weekly.len(), 3);

    let quarterly = entity_time_series(
        &entities,
        Interval::from_name("quarterly"),
        Some(at(2024, 1, 9)),
        None,
    );
    let quarters: Vec<(&str, u64)> = quarterly.iter().map(|(k, n)| (k.as_str(), *n)).collect();
    assert_eq!(quarters, vec![("2024-Q1", 1), ("2024-Q2", 1), ("2024-Q3", 1)]);

    assert_eq!(scorecard(&[]).unwrap_err(), AnalyticsError::NoEntities);
}
