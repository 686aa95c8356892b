//! 다중 펀드 변화율 정렬.
//!
//! 각 시리즈를 자신의 첫 포인트 대비 변화율(%)로 리베이스한 뒤, 모든
//! 시리즈에 등장한 날짜의 합집합을 공통 X축(label)으로 삼아 정렬합니다.
//! 어떤 시리즈에 해당 날짜의 값이 없으면 그 위치는 결측(`None`)입니다.
//! 결측은 0% 변화와 구별되며, 보간하지 않습니다.

use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;
use navchart_core::{format_nav_date, NavError, NavPoint, NavResult, PercentPoint};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// 시리즈를 첫 포인트 대비 변화율(%)로 변환합니다.
///
/// 기준은 날짜상 가장 이른 포인트의 NAV이며, 출력 순서는 입력 순서를
/// 따릅니다. 기준 NAV가 0이면 [`NavError::DegenerateBaseline`]을 반환합니다.
pub fn rebase(series: &[NavPoint]) -> NavResult<Vec<PercentPoint>> {
    // min_by_key는 같은 날짜 중 첫 번째를 반환
    let Some(base) = series.iter().min_by_key(|p| p.date) else {
        return Ok(Vec::new());
    };

    if base.nav.is_zero() {
        return Err(NavError::DegenerateBaseline {
            name: String::new(),
        });
    }

    series
        .iter()
        .map(|p| {
            let value = (p.nav - base.nav)
                .checked_div(base.nav)
                .and_then(|ratio| ratio.checked_mul(HUNDRED))
                .ok_or_else(|| {
                    NavError::Overflow(format!("percent change of {} on {}", p.nav, p.date))
                })?;
            Ok(PercentPoint {
                date: p.date,
                value,
            })
        })
        .collect()
}

/// 공통 날짜축에 맞춰진 한 시리즈.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignedSeries {
    /// 시리즈 이름 (펀드 이름)
    pub name: String,
    /// `labels`와 같은 길이의 값. `None`은 해당 날짜 데이터 없음
    pub values: Vec<Option<Decimal>>,
}

/// 정렬에서 제외된 시리즈.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcludedSeries {
    /// 시리즈 이름
    pub name: String,
    /// 제외 사유
    pub reason: String,
}

/// 여러 시리즈를 공통 날짜축에 정렬한 테이블.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignedTable {
    /// 모든 시리즈 날짜의 합집합 (오름차순, 중복 없음)
    pub labels: Vec<NaiveDate>,
    /// 입력 순서를 유지하는 정렬된 시리즈
    pub series: Vec<AlignedSeries>,
    /// 리베이스에 실패해 제외된 시리즈
    pub excluded: Vec<ExcludedSeries>,
}

impl AlignedTable {
    /// 이름으로 시리즈 값을 찾습니다.
    pub fn get(&self, name: &str) -> Option<&[Option<Decimal>]> {
        self.series
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.values.as_slice())
    }

    /// 이름으로 시리즈가 제외되었는지 확인합니다.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded.iter().any(|e| e.name == name)
    }

    /// `dd-mm-yyyy` 문자열 label.
    pub fn label_strings(&self) -> Vec<String> {
        self.labels.iter().copied().map(format_nav_date).collect()
    }

    /// 정렬된 시리즈가 없는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

/// 이름 있는 NAV 시리즈들을 변화율로 리베이스해 공통 날짜축에 정렬합니다.
///
/// - 시리즈 순서는 입력 순서를 따르며, 같은 이름이 다시 나오면 첫 위치를
///   유지한 채 나중 시리즈로 교체됩니다.
/// - 리베이스에 실패한 시리즈는 `excluded`에 기록되고 label에도 기여하지
///   않습니다. 나머지 시리즈는 그대로 정렬됩니다.
/// - 한 시리즈에 같은 날짜가 여러 번 있으면 먼저 나온 값을 사용합니다.
///   리베이스 기준과 같은 규칙이므로 각 시리즈의 첫 날짜 값은 항상 0입니다.
pub fn align<I, N, S>(named_series: I) -> AlignedTable
where
    I: IntoIterator<Item = (N, S)>,
    N: Into<String>,
    S: AsRef<[NavPoint]>,
{
    let mut rebased: Vec<(String, NavResult<Vec<PercentPoint>>)> = Vec::new();
    for (name, series) in named_series {
        let name = name.into();
        let result = rebase(series.as_ref()).map_err(|e| e.with_series_name(&name));
        match rebased.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = result,
            None => rebased.push((name, result)),
        }
    }

    let mut accepted: Vec<(String, Vec<PercentPoint>)> = Vec::with_capacity(rebased.len());
    let mut excluded = Vec::new();
    for (name, result) in rebased {
        match result {
            Ok(points) => accepted.push((name, points)),
            Err(e) => {
                warn!(series = %name, error = %e, "Series excluded from comparison");
                excluded.push(ExcludedSeries {
                    name,
                    reason: e.to_string(),
                });
            }
        }
    }

    let labels: Vec<NaiveDate> = accepted
        .iter()
        .flat_map(|(_, points)| points.iter().map(|p| p.date))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let series = accepted
        .into_iter()
        .map(|(name, points)| {
            let mut by_date: HashMap<NaiveDate, Decimal> = HashMap::with_capacity(points.len());
            for p in &points {
                by_date.entry(p.date).or_insert(p.value);
            }
            let values = labels.iter().map(|date| by_date.get(date).copied()).collect();
            AlignedSeries { name, values }
        })
        .collect::<Vec<_>>();

    debug!(
        labels = labels.len(),
        series = series.len(),
        excluded = excluded.len(),
        "Aligned comparison table"
    );

    AlignedTable {
        labels,
        series,
        excluded,
    }
}

// =============================================================================
// 테스트
// =============================================================================
