//! 분석 서비스 오류 타입.

use navchart_core::NavError;
use navchart_data::DataError;
use thiserror::Error;

/// NAV 차트 서비스 오류.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// 엔진 오류 (날짜 파싱, 차트 유형 등)
    #[error(transparent)]
    Nav(#[from] NavError),

    /// 데이터 조회 오류
    #[error(transparent)]
    Data(#[from] DataError),

    /// 펀드가 하나도 없는 카테고리
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

pub type Result<T> = std::result::Result<T, AnalyticsError>;
