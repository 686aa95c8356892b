//! Provider 호출 재시도 및 동시 조회.
//!
//! 재시도/동시성 정책은 호출 계층의 관심사이므로 Provider 구현과 분리되어
//! 있습니다. 여러 펀드를 동시에 조회해도 결과는 요청한 코드 순서대로
//! 반환됩니다.

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use navchart_core::{DataConfig, NavRecord};
use tokio::sync::Semaphore;
use tracing::{debug, warn};

use crate::error::Result;
use crate::provider::NavProvider;

/// 재시도 정책.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// 첫 시도 이후 최대 재시도 횟수
    pub max_retries: u32,
    /// 첫 재시도 전 대기 시간 (이후 두 배씩 증가)
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            backoff: Duration::from_millis(500),
        }
    }
}

impl RetryPolicy {
    /// 재시도하지 않는 정책.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            backoff: Duration::ZERO,
        }
    }

    /// 설정에서 정책을 생성합니다.
    pub fn from_config(config: &DataConfig) -> Self {
        Self {
            max_retries: config.max_retries,
            backoff: Duration::from_millis(config.retry_backoff_ms),
        }
    }

    /// `attempt`번째 재시도(1부터) 전 대기 시간.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
        self.backoff.saturating_mul(factor)
    }
}

/// 재시도 가능한 오류에 한해 정책대로 다시 조회합니다.
pub async fn fetch_with_retry<P>(
    provider: &P,
    code: &str,
    policy: RetryPolicy,
) -> Result<Vec<NavRecord>>
where
    P: NavProvider + ?Sized,
{
    let mut attempt = 0;
    loop {
        match provider.fetch_nav(code).await {
            Ok(records) => return Ok(records),
            Err(e) if e.is_retryable() && attempt < policy.max_retries => {
                attempt += 1;
                let delay = policy.delay_for(attempt);
                warn!(
                    fund = code,
                    attempt,
                    delay_ms = delay.as_millis() as u64,
                    error = %e,
                    "Retrying NAV fetch"
                );
                tokio::time::sleep(delay).await;
            }
            Err(e) => return Err(e),
        }
    }
}

/// 여러 펀드를 동시에 조회합니다.
///
/// 결과는 `codes` 순서를 따르며, 동시에 진행되는 요청 수는
/// `max_concurrent`로 제한됩니다 (0이면 1로 취급).
pub async fn fetch_many<P>(
    provider: &P,
    codes: &[String],
    policy: RetryPolicy,
    max_concurrent: usize,
) -> Vec<(String, Result<Vec<NavRecord>>)>
where
    P: NavProvider + ?Sized,
{
    let semaphore = Arc::new(Semaphore::new(max_concurrent.max(1)));

    let tasks = codes.iter().map(|code| {
        let semaphore = Arc::clone(&semaphore);
        async move {
            let result = match semaphore.acquire().await {
                Ok(_permit) => fetch_with_retry(provider, code, policy).await,
                Err(e) => Err(e.into()),
            };
            (code.clone(), result)
        }
    });

    let results = join_all(tasks).await;
    debug!(
        requested = codes.len(),
        failed = results.iter().filter(|(_, r)| r.is_err()).count(),
        "Concurrent NAV fetch finished"
    );
    results
}
