//! NAV 데이터 Provider 모듈.
//!
//! ## mfapi.in
//! - `MfApiClient`: `GET {base_url}/mf/{code}` 응답을 `NavRecord`로 변환
//!
//! ## 메모리
//! - `StaticNavProvider`: 펀드 코드별 고정 레코드 (테스트/오프라인용)

pub mod mfapi;

pub use mfapi::MfApiClient;

use std::collections::HashMap;

use async_trait::async_trait;
use navchart_core::NavRecord;

use crate::error::{DataError, Result};

/// NAV 데이터 Provider trait.
///
/// 반환되는 레코드는 정렬/중복 제거되지 않은 원본 그대로입니다.
#[async_trait]
pub trait NavProvider: Send + Sync {
    /// Provider 이름.
    fn name(&self) -> &str;

    /// 펀드 코드의 전체 NAV 이력을 조회합니다.
    async fn fetch_nav(&self, code: &str) -> Result<Vec<NavRecord>>;
}

/// 메모리에 고정된 NAV 레코드를 돌려주는 Provider.
#[derive(Debug, Clone, Default)]
pub struct StaticNavProvider {
    data: HashMap<String, Vec<NavRecord>>,
}

impl StaticNavProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// 펀드 코드에 레코드를 등록합니다.
    pub fn with_fund(mut self, code: impl Into<String>, records: Vec<NavRecord>) -> Self {
        self.data.insert(code.into(), records);
        self
    }
}

#[async_trait]
impl NavProvider for StaticNavProvider {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_nav(&self, code: &str) -> Result<Vec<NavRecord>> {
        self.data
            .get(code)
            .cloned()
            .ok_or_else(|| DataError::NotFound(code.to_string()))
    }
}

#[async_trait]
impl<P: NavProvider + ?Sized> NavProvider for std::sync::Arc<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn fetch_nav(&self, code: &str) -> Result<Vec<NavRecord>> {
        (**self).fetch_nav(code).await
    }
}
