//! 데이터 모듈 오류 타입.

use thiserror::Error;

/// NAV 데이터 조회 오류.
#[derive(Debug, Clone, Error)]
pub enum DataError {
    /// HTTP 전송 오류 (연결 실패 등)
    #[error("HTTP error: {0}")]
    Http(String),

    /// 비정상 HTTP 상태 코드
    #[error("Unexpected status {status} for {url}")]
    Status {
        /// 상태 코드
        status: u16,
        /// 요청 URL
        url: String,
    },

    /// 요청 타임아웃
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// 응답 파싱 오류
    #[error("Parse error: {0}")]
    Parse(String),

    /// 해당 펀드 코드의 데이터 없음
    #[error("No NAV data for fund code: {0}")]
    NotFound(String),

    /// 잘못된 설정
    #[error("Configuration error: {0}")]
    Config(String),

    /// 동시 조회 슬롯이 닫혀 요청을 시작하지 못함
    #[error("Fetch aborted: {0}")]
    Aborted(String),
}

impl DataError {
    /// 재시도하면 성공할 수 있는 오류인지 확인합니다.
    pub fn is_retryable(&self) -> bool {
        match self {
            DataError::Http(_) | DataError::Timeout(_) => true,
            DataError::Status { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for DataError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            DataError::Timeout(err.to_string())
        } else if err.is_decode() {
            DataError::Parse(err.to_string())
        } else if let Some(status) = err.status() {
            DataError::Status {
                status: status.as_u16(),
                url: err.url().map(|u| u.to_string()).unwrap_or_default(),
            }
        } else {
            DataError::Http(err.to_string())
        }
    }
}

impl From<tokio::sync::AcquireError> for DataError {
    fn from(err: tokio::sync::AcquireError) -> Self {
        DataError::Aborted(err.to_string())
    }
}

impl From<serde_json::Error> for DataError {
    fn from(err: serde_json::Error) -> Self {
        DataError::Parse(err.to_string())
    }
}

impl From<navchart_core::NavError> for DataError {
    fn from(err: navchart_core::NavError) -> Self {
        DataError::Parse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DataError>;
