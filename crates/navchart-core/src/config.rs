//! 설정 관리.
//!
//! `config/default.toml` 파일과 `NAVCHART__` 접두사 환경 변수에서
//! 애플리케이션 설정을 로드합니다.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::logging::LogFormat;
use crate::types::{ChartType, Frequency, PaletteKind};

/// 애플리케이션 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// NAV 데이터 소스 설정
    #[serde(default)]
    pub data: DataConfig,
    /// 차트 기본값
    #[serde(default)]
    pub chart: ChartConfig,
    /// 로깅 설정
    #[serde(default)]
    pub logging: LoggingConfig,
    /// 펀드 목록 JSON 경로
    #[serde(default = "default_funds_path")]
    pub funds_path: PathBuf,
}

fn default_funds_path() -> PathBuf {
    PathBuf::from("config/funds.json")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            chart: ChartConfig::default(),
            logging: LoggingConfig::default(),
            funds_path: default_funds_path(),
        }
    }
}

/// NAV 데이터 소스 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataConfig {
    /// API 기본 URL
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// 요청 타임아웃 (초)
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    /// 실패 시 재시도 횟수 (첫 시도 제외)
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// 재시도 간 기본 대기 시간 (밀리초, 시도마다 두 배)
    #[serde(default = "default_retry_backoff")]
    pub retry_backoff_ms: u64,
    /// 동시에 진행할 최대 요청 수
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent_fetches: usize,
}

fn default_base_url() -> String {
    "https://api.mfapi.in".to_string()
}
fn default_request_timeout() -> u64 {
    15
}
fn default_max_retries() -> u32 {
    2
}
fn default_retry_backoff() -> u64 {
    500
}
fn default_max_concurrent() -> usize {
    8
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
            max_retries: default_max_retries(),
            retry_backoff_ms: default_retry_backoff(),
            max_concurrent_fetches: default_max_concurrent(),
        }
    }
}

/// 차트 기본값.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChartConfig {
    /// 단일 펀드 차트의 기본 주기
    #[serde(default = "default_frequency")]
    pub default_frequency: Frequency,
    /// 비교 차트의 기본 주기
    #[serde(default = "default_comparison_frequency")]
    pub comparison_frequency: Frequency,
    /// 기본 차트 유형
    #[serde(default)]
    pub chart_type: ChartType,
    /// 비교 차트에서 결측 구간을 선으로 잇는지 여부
    #[serde(default = "default_span_gaps")]
    pub span_gaps: bool,
    /// 비교 차트 팔레트 (fixed, hue)
    #[serde(default)]
    pub comparison_palette: PaletteKind,
}

fn default_frequency() -> Frequency {
    Frequency::Daily
}
fn default_comparison_frequency() -> Frequency {
    Frequency::Weekly
}
fn default_span_gaps() -> bool {
    true
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            default_frequency: default_frequency(),
            comparison_frequency: default_comparison_frequency(),
            chart_type: ChartType::default(),
            span_gaps: default_span_gaps(),
            comparison_palette: PaletteKind::default(),
        }
    }
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// 로그 레벨
    #[serde(default = "default_log_level")]
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::Pretty,
        }
    }
}

impl AppConfig {
    /// 파일과 환경 변수에서 설정을 로드합니다.
    ///
    /// 파일이 없으면 기본값과 환경 변수만 사용합니다.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::from(path.as_ref()).required(false))
            .add_source(
                config::Environment::with_prefix("NAVCHART")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }
}
