//! NAV 데이터 조회.
//!
//! 이 crate는 다음을 제공합니다:
//! - NAV Provider trait 및 mfapi.in 클라이언트
//! - 메모리 기반 Provider (테스트/오프라인)
//! - 재시도 정책과 동시 조회 유틸리티

pub mod error;
pub mod fetch;
pub mod provider;

pub use error::{DataError, Result};
pub use fetch::{fetch_many, fetch_with_retry, RetryPolicy};
pub use provider::{MfApiClient, NavProvider, StaticNavProvider};
