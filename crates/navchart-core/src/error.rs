//! NAV 차트 엔진의 에러 타입.
//!
//! 엔진은 잘못된 값을 조용히 만들어내지 않습니다. 실패는 빈 결과로
//! 흡수되거나(`InvalidWindow`) 호출자가 처리해야 하는 타입 있는 에러로
//! 전달됩니다.

use thiserror::Error;

/// 핵심 NAV 엔진 에러.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    /// 날짜 구간 불완전 (시작/종료 누락 또는 시작 > 종료)
    #[error("Invalid date window: {0}")]
    InvalidWindow(String),

    /// 기준 NAV가 0이라 변화율을 계산할 수 없음
    #[error("Degenerate baseline for series '{name}': first NAV is zero")]
    DegenerateBaseline {
        /// 시리즈 이름
        name: String,
    },

    /// `dd-mm-yyyy` 형식이 아닌 날짜 문자열
    #[error("Malformed date: {0}")]
    MalformedDate(String),

    /// Decimal 연산 오버플로우
    #[error("Arithmetic overflow: {0}")]
    Overflow(String),

    /// 설정 에러
    #[error("Configuration error: {0}")]
    Config(String),

    /// 잘못된 입력
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// 직렬화 에러
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// NAV 엔진 작업을 위한 Result 타입.
pub type NavResult<T> = Result<T, NavError>;

impl NavError {
    /// 시리즈 이름을 채워 넣은 에러를 반환합니다.
    pub fn with_series_name(self, series: &str) -> Self {
        match self {
            NavError::DegenerateBaseline { .. } => NavError::DegenerateBaseline {
                name: series.to_string(),
            },
            NavError::Overflow(msg) => NavError::Overflow(format!("{}: {}", series, msg)),
            other => other,
        }
    }
}

impl From<serde_json::Error> for NavError {
    fn from(err: serde_json::Error) -> Self {
        NavError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for NavError {
    fn from(err: config::ConfigError) -> Self {
        NavError::Config(err.to_string())
    }
}
