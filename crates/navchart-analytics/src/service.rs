//! NAV 차트 서비스.
//!
//! Provider에서 원시 NAV를 가져와 파싱 → 다운샘플링 → (비교 시) 정렬까지
//! 이어지는 파이프라인입니다. 엔진 함수는 순수하고, 이 계층만 비동기
//! 조회와 재시도를 다룹니다.

use chrono::NaiveDate;
use navchart_core::{parse_records, DateWindow, Frequency, FundConfig, FundRoster, NavPoint};
use navchart_data::{fetch_many, fetch_with_retry, NavProvider, RetryPolicy};
use serde::Serialize;
use tracing::{debug, info, warn, Instrument};

use crate::alignment::{align, AlignedTable};
use crate::downsample::downsample_window;
use crate::error::{AnalyticsError, Result};

/// 기본 동시 조회 수.
const DEFAULT_MAX_CONCURRENT: usize = 8;

/// 단일 펀드 다운샘플링 결과.
#[derive(Debug, Clone, Serialize)]
pub struct FundSeries {
    /// 펀드 이름 (roster에 없으면 코드)
    pub name: String,
    /// 펀드 코드
    pub code: String,
    /// 적용된 주기
    pub frequency: Frequency,
    /// 다운샘플링된 NAV
    pub points: Vec<NavPoint>,
}

/// 조회/파싱에 실패한 펀드.
#[derive(Debug, Clone, Serialize)]
pub struct FailedFund {
    /// 펀드 이름
    pub name: String,
    /// 펀드 코드
    pub code: String,
    /// 실패 사유
    pub reason: String,
}

/// 카테고리 비교 결과.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    /// 카테고리
    pub category: String,
    /// 적용된 주기
    pub frequency: Frequency,
    /// 정렬된 변화율 테이블
    pub table: AlignedTable,
    /// 조회/파싱 실패로 비교에서 빠진 펀드
    pub failed: Vec<FailedFund>,
}

/// NAV 차트 서비스.
pub struct NavChartService<P> {
    provider: P,
    roster: FundRoster,
    retry: RetryPolicy,
    max_concurrent: usize,
}

impl<P: NavProvider> NavChartService<P> {
    /// 새 서비스를 생성합니다.
    pub fn new(provider: P, roster: FundRoster) -> Self {
        Self {
            provider,
            roster,
            retry: RetryPolicy::default(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
        }
    }

    /// 재시도 정책을 설정합니다.
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// 최대 동시 조회 수를 설정합니다.
    pub fn with_max_concurrent(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent = max_concurrent;
        self
    }

    /// 펀드 목록.
    pub fn roster(&self) -> &FundRoster {
        &self.roster
    }

    /// 한 펀드의 NAV를 조회해 다운샘플링합니다.
    ///
    /// 구간이 불완전하면 조회 없이 빈 시리즈를 반환합니다.
    pub async fn fund_series(
        &self,
        code: &str,
        frequency: Frequency,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<FundSeries> {
        let name = self
            .roster
            .find_by_code(code)
            .map(|f| f.name.clone())
            .unwrap_or_else(|| code.to_string());

        let mut series = FundSeries {
            name,
            code: code.to_string(),
            frequency,
            points: Vec::new(),
        };

        let window = match DateWindow::from_bounds(start, end) {
            Ok(window) => window,
            Err(e) => {
                debug!(fund = code, error = %e, "Skipping fetch for incomplete window");
                return Ok(series);
            }
        };

        let span = navchart_core::fund_span!("fund_series", code, frequency);
        async move {
            let records = fetch_with_retry(&self.provider, code, self.retry).await?;
            let points = parse_records(&records)?;
            series.points = downsample_window(&points, frequency, &window);
            info!(
                raw = records.len(),
                points = series.points.len(),
                "Fund series ready"
            );
            Ok::<_, AnalyticsError>(series)
        }
        .instrument(span)
        .await
    }

    /// 카테고리의 모든 펀드를 변화율로 비교합니다.
    ///
    /// 펀드는 동시에 조회되며 결과는 roster 순서로 정렬됩니다. 조회나 날짜
    /// 파싱에 실패한 펀드는 `failed`에 기록되고 나머지로 비교를 계속합니다.
    pub async fn compare_category(
        &self,
        category: &str,
        frequency: Frequency,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<ComparisonReport> {
        let funds: Vec<&FundConfig> = self.roster.in_category(category).collect();
        if funds.is_empty() {
            return Err(AnalyticsError::UnknownCategory(category.to_string()));
        }

        let mut report = ComparisonReport {
            category: category.to_string(),
            frequency,
            table: AlignedTable::default(),
            failed: Vec::new(),
        };

        let window = match DateWindow::from_bounds(start, end) {
            Ok(window) => window,
            Err(e) => {
                debug!(category, error = %e, "Skipping comparison for incomplete window");
                return Ok(report);
            }
        };

        let codes: Vec<String> = funds.iter().map(|f| f.code.clone()).collect();
        let fetched = fetch_many(&self.provider, &codes, self.retry, self.max_concurrent).await;

        let mut named: Vec<(String, Vec<NavPoint>)> = Vec::with_capacity(funds.len());
        for (fund, (_, result)) in funds.iter().zip(fetched) {
            let points = result
                .map_err(AnalyticsError::from)
                .and_then(|records| parse_records(&records).map_err(AnalyticsError::from));

            match points {
                Ok(points) => {
                    named.push((fund.name.clone(), downsample_window(&points, frequency, &window)))
                }
                Err(e) => {
                    warn!(fund = %fund.code, error = %e, "Fund dropped from comparison");
                    report.failed.push(FailedFund {
                        name: fund.name.clone(),
                        code: fund.code.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        report.table = align(named);
        info!(
            category,
            frequency = %frequency,
            series = report.table.series.len(),
            labels = report.table.labels.len(),
            failed = report.failed.len(),
            "Category comparison ready"
        );

        Ok(report)
    }
}
