//! 뮤추얼 펀드 NAV 차트 CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # 등록된 펀드/카테고리 보기
//! navchart funds --category "Large Cap"
//! navchart categories
//!
//! # 주간 NAV 조회 (표)
//! navchart nav -c 120465 -q weekly -f 01-01-2024 -t 31-03-2024
//!
//! # 차트 데이터(JSON) 출력
//! navchart nav -c 120465 -f 01-01-2024 -t 31-03-2024 --chart bar
//!
//! # 카테고리 변화율 비교
//! navchart compare --category "Large Cap" -f 01-01-2024 -t 31-12-2024
//! navchart compare --category "Large Cap" -f 01-01-2024 -t 31-12-2024 --chart --palette hue
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use navchart_analytics::{FixedPalette, NavChartService};
use navchart_cli::commands::{
    compare::{compare_category, CompareRequest},
    funds::{list_categories, list_funds},
    nav::{show_nav, NavRequest},
    OutputFormat,
};
use navchart_core::{
    init_logging, parse_optional_nav_date, AppConfig, ChartType, Frequency, FundRoster, LogConfig,
    PaletteKind,
};
use navchart_data::{MfApiClient, RetryPolicy};
use tracing::{debug, error};

#[derive(Parser)]
#[command(name = "navchart")]
#[command(about = "Mutual fund NAV charts - 주기별 다운샘플링 및 카테고리 비교", long_about = None)]
#[command(version)]
struct Cli {
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = "config/default.toml")]
    config: String,

    /// 펀드 목록 JSON (기본: 설정의 funds_path)
    #[arg(long, global = true)]
    roster: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 등록된 펀드 목록 보기
    Funds {
        /// 카테고리 필터
        #[arg(long)]
        category: Option<String>,

        /// 출력 형식 (table, json)
        #[arg(long, default_value = "table")]
        format: OutputFormat,
    },

    /// 카테고리 목록 보기
    Categories {
        /// 출력 형식 (table, json)
        #[arg(long, default_value = "table")]
        format: OutputFormat,
    },

    /// 단일 펀드 NAV 조회
    Nav {
        /// 펀드 코드 (예: 120465)
        #[arg(short, long)]
        code: String,

        /// 주기 (daily, weekly, monthly / 1d, 1w, 1m)
        #[arg(short = 'q', long)]
        frequency: Option<Frequency>,

        /// 시작 날짜 (DD-MM-YYYY)
        #[arg(short = 'f', long)]
        from: Option<String>,

        /// 종료 날짜 (DD-MM-YYYY)
        #[arg(short, long)]
        to: Option<String>,

        /// 차트 데이터(JSON)로 출력 (line, bar, pie / 값 생략 시 설정의 chart_type)
        #[arg(long)]
        chart: Option<Option<ChartType>>,

        /// 출력 형식 (table, json)
        #[arg(long, default_value = "table")]
        format: OutputFormat,
    },

    /// 카테고리 펀드 변화율 비교
    Compare {
        /// 카테고리 (예: "Large Cap")
        #[arg(long)]
        category: String,

        /// 주기 (daily, weekly, monthly / 1d, 1w, 1m)
        #[arg(short = 'q', long)]
        frequency: Option<Frequency>,

        /// 시작 날짜 (DD-MM-YYYY)
        #[arg(short = 'f', long)]
        from: Option<String>,

        /// 종료 날짜 (DD-MM-YYYY)
        #[arg(short, long)]
        to: Option<String>,

        /// 차트 데이터(JSON)로 출력 (line, bar / 값 생략 시 설정의 chart_type)
        #[arg(long)]
        chart: Option<Option<ChartType>>,

        /// 데이터셋 팔레트 (fixed, hue / 기본: 설정의 comparison_palette)
        #[arg(long)]
        palette: Option<PaletteKind>,

        /// 출력 형식 (table, json)
        #[arg(long, default_value = "table")]
        format: OutputFormat,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = AppConfig::load(&cli.config)
        .with_context(|| format!("Failed to load config: {}", cli.config))?;
    if let Err(e) = init_logging(LogConfig::from(&config.logging)) {
        eprintln!("Failed to initialize logging: {}", e);
    }
    debug!(config = %cli.config, "Configuration loaded");

    let funds_path = cli
        .roster
        .clone()
        .unwrap_or_else(|| config.funds_path.display().to_string());
    let roster = FundRoster::load(&funds_path)
        .with_context(|| format!("Failed to load fund roster: {}", funds_path))?;

    let output = match run(cli.command, &config, roster).await {
        Ok(output) => output,
        Err(e) => {
            error!("Command failed: {:#}", e);
            return Err(e);
        }
    };

    println!("{}", output);
    Ok(())
}

async fn run(command: Commands, config: &AppConfig, roster: FundRoster) -> Result<String> {
    match command {
        Commands::Funds { category, format } => list_funds(&roster, category.as_deref(), format),

        Commands::Categories { format } => list_categories(&roster, format),

        Commands::Nav {
            code,
            frequency,
            from,
            to,
            chart,
            format,
        } => {
            let request = NavRequest {
                code,
                frequency: frequency.unwrap_or(config.chart.default_frequency),
                start: parse_optional_nav_date(from.as_deref())?,
                end: parse_optional_nav_date(to.as_deref())?,
                chart: chart.map(|c| c.unwrap_or(config.chart.chart_type)),
                format,
            };
            let service = build_service(config, roster)?;
            show_nav(&service, &request, &FixedPalette::default()).await
        }

        Commands::Compare {
            category,
            frequency,
            from,
            to,
            chart,
            palette,
            format,
        } => {
            let request = CompareRequest {
                category,
                frequency: frequency.unwrap_or(config.chart.comparison_frequency),
                start: parse_optional_nav_date(from.as_deref())?,
                end: parse_optional_nav_date(to.as_deref())?,
                chart: chart.map(|c| c.unwrap_or(config.chart.chart_type)),
                span_gaps: config.chart.span_gaps,
                palette: palette.unwrap_or(config.chart.comparison_palette),
                format,
            };
            let service = build_service(config, roster)?;
            compare_category(&service, &request).await
        }
    }
}

fn build_service(config: &AppConfig, roster: FundRoster) -> Result<NavChartService<MfApiClient>> {
    let client = MfApiClient::from_config(&config.data).context("Failed to build NAV client")?;
    Ok(NavChartService::new(client, roster)
        .with_retry(RetryPolicy::from_config(&config.data))
        .with_max_concurrent(config.data.max_concurrent_fetches))
}
