//! 단일 펀드 NAV 조회 명령어.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use navchart_analytics::{ChartData, ColorAssigner, FundSeries, NavChartService};
use navchart_core::{format_nav_date, ChartType, Frequency};
use navchart_data::NavProvider;
use tracing::info;

use super::{fetch_spinner, OutputFormat};

/// NAV 조회 요청.
#[derive(Debug, Clone)]
pub struct NavRequest {
    /// 펀드 코드
    pub code: String,
    /// 다운샘플링 주기
    pub frequency: Frequency,
    /// 시작일
    pub start: Option<NaiveDate>,
    /// 종료일
    pub end: Option<NaiveDate>,
    /// 차트 데이터로 출력할 때의 차트 유형
    pub chart: Option<ChartType>,
    /// 출력 형식 (차트 출력은 항상 JSON)
    pub format: OutputFormat,
}

/// 펀드 NAV를 조회해 출력 문자열로 만듭니다.
pub async fn show_nav<P: NavProvider>(
    service: &NavChartService<P>,
    request: &NavRequest,
    palette: &dyn ColorAssigner,
) -> Result<String> {
    let pb = fetch_spinner(format!("Fetching NAV for {}...", request.code));
    let series = service
        .fund_series(&request.code, request.frequency, request.start, request.end)
        .await;
    pb.finish_and_clear();

    let series = series.with_context(|| format!("Failed to load NAV for {}", request.code))?;
    info!(fund = %series.code, points = series.points.len(), "NAV loaded");

    if let Some(chart_type) = request.chart {
        let chart = ChartData::single_fund(&series.name, &series.points, chart_type, palette);
        return serde_json::to_string_pretty(&chart).context("Failed to serialize chart data");
    }

    match request.format {
        OutputFormat::Table => Ok(format_table(&series)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&series).context("Failed to serialize to JSON")
        }
    }
}

fn format_table(series: &FundSeries) -> String {
    let mut output = String::new();

    output.push_str(&format!("{} ({})\n\n", series.name, series.code));
    output.push_str(&format!("{:<12} {:>14}\n", "DATE", "NAV"));
    output.push_str(&"-".repeat(27));
    output.push('\n');

    for point in &series.points {
        output.push_str(&format!(
            "{:<12} {:>14}\n",
            format_nav_date(point.date),
            point.nav.to_string()
        ));
    }

    output.push('\n');
    output.push_str(&format!(
        "Total: {} points ({})",
        series.points.len(),
        series.frequency.display_name()
    ));
    output
}
