//! 카테고리 변화율 비교 명령어.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use navchart_analytics::{palette_for, ChartData, ComparisonReport, NavChartService};
use navchart_core::{format_nav_date, ChartType, Frequency, PaletteKind};
use navchart_data::NavProvider;
use tracing::{info, warn};

use super::{fetch_spinner, truncate, OutputFormat};

/// 표에서 펀드 열 폭.
const COLUMN_WIDTH: usize = 16;

/// 비교 요청.
#[derive(Debug, Clone)]
pub struct CompareRequest {
    pub category: String,
    pub frequency: Frequency,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    /// 차트 데이터로 출력할 때의 차트 유형 (line/bar)
    pub chart: Option<ChartType>,
    /// 결측 구간을 선으로 이을지 여부
    pub span_gaps: bool,
    /// 데이터셋 색상 팔레트
    pub palette: PaletteKind,
    pub format: OutputFormat,
}

/// 카테고리 비교 결과를 출력 문자열로 만듭니다.
pub async fn compare_category<P: NavProvider>(
    service: &NavChartService<P>,
    request: &CompareRequest,
) -> Result<String> {
    let pb = fetch_spinner(format!("Fetching {} funds...", request.category));
    let report = service
        .compare_category(&request.category, request.frequency, request.start, request.end)
        .await;
    pb.finish_and_clear();

    let report = report.with_context(|| format!("Failed to compare {}", request.category))?;
    for failed in &report.failed {
        warn!(fund = %failed.code, reason = %failed.reason, "Fund skipped");
    }
    info!(
        category = %report.category,
        series = report.table.series.len(),
        "Comparison loaded"
    );

    if let Some(chart_type) = request.chart {
        let palette = palette_for(request.palette);
        let chart =
            ChartData::comparison(&report.table, chart_type, palette.as_ref(), request.span_gaps)?;
        return serde_json::to_string_pretty(&chart).context("Failed to serialize chart data");
    }

    match request.format {
        OutputFormat::Table => Ok(format_table(&report)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&report).context("Failed to serialize to JSON")
        }
    }
}

fn format_table(report: &ComparisonReport) -> String {
    let table = &report.table;
    let mut output = String::new();

    output.push_str(&format!(
        "{} ({}, % change)\n\n",
        report.category,
        report.frequency.display_name()
    ));

    output.push_str(&format!("{:<12}", "DATE"));
    for series in &table.series {
        output.push_str(&format!(
            " {:>width$}",
            truncate(&series.name, COLUMN_WIDTH),
            width = COLUMN_WIDTH
        ));
    }
    output.push('\n');
    output.push_str(&"-".repeat(12 + table.series.len() * (COLUMN_WIDTH + 1)));
    output.push('\n');

    for (row, label) in table.labels.iter().enumerate() {
        output.push_str(&format!("{:<12}", format_nav_date(*label)));
        for series in &table.series {
            let cell = match series.values.get(row).copied().flatten() {
                Some(value) => format!("{:.2}%", value),
                None => "-".to_string(),
            };
            output.push_str(&format!(" {:>width$}", cell, width = COLUMN_WIDTH));
        }
        output.push('\n');
    }

    if !table.excluded.is_empty() {
        output.push_str("\nExcluded:\n");
        for excluded in &table.excluded {
            output.push_str(&format!("  {}: {}\n", excluded.name, excluded.reason));
        }
    }

    if !report.failed.is_empty() {
        output.push_str("\nFailed:\n");
        for failed in &report.failed {
            output.push_str(&format!("  {} ({}): {}\n", failed.name, failed.code, failed.reason));
        }
    }

    output.push('\n');
    output.push_str(&format!(
        "Total: {} funds, {} dates",
        table.series.len(),
        table.labels.len()
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use navchart_core::{FundConfig, FundRoster, NavRecord};
    use navchart_data::{RetryPolicy, StaticNavProvider};
    use rust_decimal_macros::dec;

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, day).unwrap()
    }

    fn service() -> NavChartService<StaticNavProvider> {
        let provider = StaticNavProvider::new()
            .with_fund(
                "1",
                vec![
                    NavRecord::new("01-01-2024", dec!(100)),
                    NavRecord::new("08-01-2024", dec!(125)),
                ],
            )
            .with_fund("2", vec![NavRecord::new("08-01-2024", dec!(40))])
            .with_fund("3", vec![NavRecord::new("01-01-2024", dec!(0))]);
        let roster = FundRoster::new(vec![
            FundConfig::new("Alpha", "1", "Large Cap"),
            FundConfig::new("Beta", "2", "Large Cap"),
            FundConfig::new("Zero", "3", "Large Cap"),
            FundConfig::new("Missing", "4", "Large Cap"),
        ]);
        NavChartService::new(provider, roster).with_retry(RetryPolicy::none())
    }

    fn request() -> CompareRequest {
        CompareRequest {
            category: "Large Cap".to_string(),
            frequency: Frequency::Daily,
            start: Some(d(1, 1)),
            end: Some(d(1, 31)),
            chart: None,
            span_gaps: true,
            palette: PaletteKind::Hue,
            format: OutputFormat::Table,
        }
    }

    #[tokio::test]
    async fn test_compare_table_marks_gaps_and_exclusions() {
        let out = compare_category(&service(), &request())
            .await
            .unwrap();

        assert!(out.contains("25.00%"));
        assert!(out.contains("0.00%"));
        assert!(out.contains(" -"));
        assert!(out.contains("Excluded:\n  Zero:"));
        assert!(out.contains("Failed:\n  Missing (4):"));
        assert!(out.ends_with("Total: 2 funds, 2 dates"));
    }

    #[tokio::test]
    async fn test_compare_chart_output() {
        let mut req = request();
        req.chart = Some(ChartType::Line);
        req.span_gaps = false;

        let out = compare_category(&service(), &req)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(json["labels"], serde_json::json!(["01-01-2024", "08-01-2024"]));
        assert_eq!(json["datasets"][1]["data"], serde_json::json!([null, 0.0]));
        assert_eq!(json["datasets"][1]["spanGaps"], false);
        assert_eq!(json["datasets"][0]["borderColor"], "hsl(0,70%,50%)");
    }

    #[tokio::test]
    async fn test_compare_pie_chart_rejected() {
        let mut req = request();
        req.chart = Some(ChartType::Pie);
        assert!(compare_category(&service(), &req)
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_compare_unknown_category() {
        let mut req = request();
        req.category = "Small Cap".to_string();
        assert!(compare_category(&service(), &req)
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_compare_chart_uses_requested_palette() {
        let mut req = request();
        req.chart = Some(ChartType::Bar);
        req.palette = PaletteKind::Fixed;

        let out = compare_category(&service(), &req).await.unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(json["datasets"][0]["borderColor"], "rgb(54,162,235)");
        assert_eq!(json["datasets"][1]["borderColor"], "rgb(255,99,132)");
    }
}
