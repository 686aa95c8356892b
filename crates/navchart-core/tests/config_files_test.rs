//! 설정/펀드 목록 파일 로드 통합 테스트

use std::fs;
use std::path::PathBuf;

use navchart_core::{AppConfig, ChartType, Frequency, FundRoster, LogFormat, NavError};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("navchart-{}-{}", std::process::id(), name))
}

#[test]
fn test_load_roster_file() {
    let path = temp_path("funds.json");
    fs::write(
        &path,
        r#"[
            {"name": "Alpha Bluechip", "code": "120586", "category": "Large Cap"},
            {"name": "Delta Flexi", "code": "122639", "category": "Flexi Cap"}
        ]"#,
    )
    .unwrap();

    let roster = FundRoster::load(&path).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(roster.len(), 2);
    assert_eq!(roster.categories(), vec!["Large Cap", "Flexi Cap"]);
}

#[test]
fn test_load_missing_roster_is_config_error() {
    let err = FundRoster::load(temp_path("missing.json")).unwrap_err();
    assert!(matches!(err, NavError::Config(_)));
}

#[test]
fn test_load_toml_config() {
    let path = temp_path("navchart.toml");
    fs::write(
        &path,
        r#"
funds_path = "data/funds.json"

[data]
base_url = "http://localhost:9000"
max_retries = 0

[chart]
comparison_frequency = "monthly"
chart_type = "bar"
span_gaps = false

[logging]
level = "debug"
format = "json"
"#,
    )
    .unwrap();

    let config = AppConfig::load(&path).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(config.data.base_url, "http://localhost:9000");
    assert_eq!(config.data.max_retries, 0);
    assert_eq!(config.data.request_timeout_secs, 15);
    assert_eq!(config.chart.comparison_frequency, Frequency::Monthly);
    assert_eq!(config.chart.default_frequency, Frequency::Daily);
    assert_eq!(config.chart.chart_type, ChartType::Bar);
    assert!(!config.chart.span_gaps);
    assert_eq!(config.logging.format, LogFormat::Json);
    assert_eq!(config.funds_path, PathBuf::from("data/funds.json"));
}
