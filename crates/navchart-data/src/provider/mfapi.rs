//! mfapi.in 뮤추얼 펀드 NAV API 클라이언트.
//!
//! `GET {base_url}/mf/{code}` 응답 예:
//!
//! ```json
//! {
//!   "meta": { "scheme_code": 120465, "scheme_name": "..." },
//!   "data": [ { "date": "15-01-2024", "nav": "52.1230" } ],
//!   "status": "SUCCESS"
//! }
//! ```

use std::time::Duration;

use async_trait::async_trait;
use navchart_core::{DataConfig, NavRecord};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use super::NavProvider;
use crate::error::{DataError, Result};

/// mfapi.in 응답.
#[derive(Debug, Deserialize)]
struct MfApiResponse {
    #[serde(default)]
    meta: Option<MfApiMeta>,
    #[serde(default)]
    data: Vec<NavRecord>,
    #[serde(default)]
    status: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MfApiMeta {
    #[serde(default)]
    scheme_name: Option<String>,
}

/// mfapi.in HTTP 클라이언트.
#[derive(Debug, Clone)]
pub struct MfApiClient {
    client: Client,
    base_url: String,
}

impl MfApiClient {
    /// 기본 URL과 요청 타임아웃으로 클라이언트를 생성합니다.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("navchart/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DataError::Config(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// 설정에서 클라이언트를 생성합니다.
    pub fn from_config(config: &DataConfig) -> Result<Self> {
        Self::new(
            config.base_url.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// 펀드 코드의 요청 URL.
    pub fn fund_url(&self, code: &str) -> String {
        format!("{}/mf/{}", self.base_url, code)
    }
}

#[async_trait]
impl NavProvider for MfApiClient {
    fn name(&self) -> &str {
        "mfapi"
    }

    async fn fetch_nav(&self, code: &str) -> Result<Vec<NavRecord>> {
        let url = self.fund_url(code);
        debug!("Fetching NAV history: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DataError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        let parsed: MfApiResponse = serde_json::from_str(&body)?;

        if let Some(status) = parsed.status.as_deref() {
            if !status.eq_ignore_ascii_case("SUCCESS") {
                return Err(DataError::Parse(format!(
                    "mfapi status {} for fund {}",
                    status, code
                )));
            }
        }

        info!(
            fund = code,
            scheme = parsed
                .meta
                .as_ref()
                .and_then(|m| m.scheme_name.as_deref())
                .unwrap_or("-"),
            records = parsed.data.len(),
            "NAV history fetched"
        );

        Ok(parsed.data)
    }
}
