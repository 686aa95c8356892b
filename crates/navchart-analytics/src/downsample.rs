//! NAV 시계열 다운샘플링.
//!
//! 불규칙한 일별 NAV 시계열을 날짜 구간으로 자른 뒤, 주기별 구간(bucket)마다
//! 하나의 대표 포인트로 줄입니다.
//!
//! # 구간 규칙
//!
//! - **Daily**: 축소 없이 날짜 오름차순 정렬만 수행 (같은 날짜 중복 유지)
//! - **Weekly**: 시작일이 속한 주의 월요일부터 7일 단위. 각 주의 월~금
//!   (종료일로 잘림) 중 가장 늦은 날짜의 NAV
//! - **Monthly**: 시작일이 속한 달의 1일부터 한 달 단위. 해당 월 말일
//!   (종료일로 잘림)까지 중 가장 늦은 날짜의 NAV
//!
//! 데이터가 없는 구간은 건너뜁니다 (값을 채우지 않음).
//!
//! # 사용 예시
//!
//! ```rust
//! use chrono::NaiveDate;
//! use navchart_analytics::downsample::downsample;
//! use navchart_core::{Frequency, NavPoint};
//! use rust_decimal_macros::dec;
//!
//! let d = |day| NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
//! let series = vec![
//!     NavPoint::new(d(1), dec!(100)),
//!     NavPoint::new(d(3), dec!(101)),
//!     NavPoint::new(d(8), dec!(110)),
//! ];
//!
//! let weekly = downsample(&series, Frequency::Weekly, Some(d(1)), Some(d(14)));
//! assert_eq!(weekly.len(), 2);
//! assert_eq!(weekly[0].date, d(3));
//! ```

use chrono::{Datelike, Days, Months, NaiveDate};
use navchart_core::{DateWindow, Frequency, NavPoint};
use tracing::{debug, trace};

/// 월요일부터 금요일까지의 오프셋 (일).
const BUSINESS_DAYS_AFTER_MONDAY: u64 = 4;

/// 대표 포인트를 고르는 하나의 구간 `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// 후보 범위 시작일
    pub start: NaiveDate,
    /// 후보 범위 종료일 (전체 구간 종료일로 잘림)
    pub end: NaiveDate,
}

/// NAV 시계열을 구간과 주기에 맞게 다운샘플링합니다.
///
/// `start` 또는 `end`가 없거나 `start > end`이면 빈 시계열을 반환합니다.
/// 입력은 정렬되어 있거나 중복이 없을 필요가 없으며, 변경되지 않습니다.
pub fn downsample(
    series: &[NavPoint],
    frequency: Frequency,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Vec<NavPoint> {
    match DateWindow::from_bounds(start, end) {
        Ok(window) => downsample_window(series, frequency, &window),
        Err(e) => {
            debug!(error = %e, "Incomplete date window, returning empty series");
            Vec::new()
        }
    }
}

/// 유효한 구간이 이미 있을 때의 다운샘플링.
pub fn downsample_window(
    series: &[NavPoint],
    frequency: Frequency,
    window: &DateWindow,
) -> Vec<NavPoint> {
    let filtered = filter_sorted(series, window);

    let result = match frequency {
        Frequency::Daily => filtered,
        Frequency::Weekly => select_latest_per_bucket(&filtered, weekly_buckets(window)),
        Frequency::Monthly => select_latest_per_bucket(&filtered, monthly_buckets(window)),
    };

    debug!(
        frequency = %frequency,
        input = series.len(),
        output = result.len(),
        start = %window.start(),
        end = %window.end(),
        "Downsampled NAV series"
    );

    result
}

/// 구간 안의 포인트만 남기고 날짜 오름차순으로 안정 정렬합니다.
fn filter_sorted(series: &[NavPoint], window: &DateWindow) -> Vec<NavPoint> {
    let mut filtered: Vec<NavPoint> = series
        .iter()
        .filter(|p| window.contains(p.date))
        .copied()
        .collect();
    // 안정 정렬: 같은 날짜는 입력 순서 유지
    filtered.sort_by_key(|p| p.date);
    filtered
}

/// 구간마다 가장 늦은 날짜의 포인트를 고릅니다.
///
/// `sorted`는 날짜 오름차순이어야 합니다. 같은 날짜가 여러 개면 입력에서
/// 먼저 나온 포인트를 고릅니다.
fn select_latest_per_bucket(
    sorted: &[NavPoint],
    buckets: impl Iterator<Item = Bucket>,
) -> Vec<NavPoint> {
    buckets
        .filter_map(|bucket| {
            let lo = sorted.partition_point(|p| p.date < bucket.start);
            let hi = sorted.partition_point(|p| p.date <= bucket.end);
            if lo >= hi {
                trace!(start = %bucket.start, end = %bucket.end, "Empty bucket skipped");
                return None;
            }

            let latest = sorted[hi - 1].date;
            let first_of_latest = lo + sorted[lo..hi].partition_point(|p| p.date < latest);
            Some(sorted[first_of_latest])
        })
        .collect()
}

/// 시작일이 속한 주의 월요일.
pub fn monday_on_or_before(date: NaiveDate) -> NaiveDate {
    let offset = u64::from(date.weekday().num_days_from_monday());
    date - Days::new(offset)
}

/// 해당 월의 1일.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// 해당 월의 말일.
pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    first_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

/// 주별 구간: 각 주의 월요일 ~ min(금요일, 종료일).
pub fn weekly_buckets(window: &DateWindow) -> impl Iterator<Item = Bucket> + '_ {
    let first_monday = monday_on_or_before(window.start());

    std::iter::successors(Some(first_monday), |monday| {
        monday.checked_add_days(Days::new(7))
    })
    .take_while(move |monday| *monday <= window.end())
    .map(move |monday| Bucket {
        start: monday,
        end: window.clip_end(
            monday
                .checked_add_days(Days::new(BUSINESS_DAYS_AFTER_MONDAY))
                .unwrap_or(NaiveDate::MAX),
        ),
    })
}

/// 월별 구간: 각 월의 1일 ~ min(말일, 종료일).
pub fn monthly_buckets(window: &DateWindow) -> impl Iterator<Item = Bucket> + '_ {
    let first = first_of_month(window.start());

    std::iter::successors(Some(first), |month_start| {
        month_start.checked_add_months(Months::new(1))
    })
    .take_while(move |month_start| *month_start <= window.end())
    .map(move |month_start| Bucket {
        start: month_start,
        end: window.clip_end(last_of_month(month_start)),
    })
}

// =============================================================================
// 테스트
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn p(y: i32, m: u32, day: u32, nav: Decimal) -> NavPoint {
        NavPoint::new(d(y, m, day), nav)
    }

    #[test]
    fn test_missing_bound_returns_empty() {
        let series = vec![p(2024, 1, 2, dec!(10))];
        for freq in Frequency::ALL {
            assert!(downsample(&series, freq, None, Some(d(2024, 1, 10))).is_empty());
            assert!(downsample(&series, freq, Some(d(2024, 1, 1)), None).is_empty());
        }
    }

    #[test]
    fn test_reversed_window_returns_empty() {
        let series = vec![p(2024, 1, 2, dec!(10))];
        assert!(downsample(&series, Frequency::Daily, Some(d(2024, 1, 5)), Some(d(2024, 1, 1)))
            .is_empty());
    }

    #[test]
    fn test_daily_filters_and_sorts() {
        let series = vec![
            p(2024, 1, 5, dec!(13)),
            p(2023, 12, 29, dec!(9)),
            p(2024, 1, 2, dec!(10)),
            p(2024, 1, 3, dec!(11)),
        ];
        let daily = downsample(&series, Frequency::Daily, Some(d(2024, 1, 1)), Some(d(2024, 1, 4)));

        assert_eq!(daily, vec![p(2024, 1, 2, dec!(10)), p(2024, 1, 3, dec!(11))]);
    }

    #[test]
    fn test_daily_keeps_duplicates() {
        let series = vec![p(2024, 1, 2, dec!(10)), p(2024, 1, 2, dec!(10.5))];
        let daily = downsample(&series, Frequency::Daily, Some(d(2024, 1, 1)), Some(d(2024, 1, 4)));
        assert_eq!(daily.len(), 2);
        assert_eq!(daily[0].nav, dec!(10));
        assert_eq!(daily[1].nav, dec!(10.5));
    }

    #[test]
    fn test_weekly_one_point_per_week() {
        // 2024-01-01은 월요일
        let series = vec![
            p(2024, 1, 15, dec!(90)),
            p(2024, 1, 1, dec!(100)),
            p(2024, 1, 8, dec!(110)),
        ];
        let weekly = downsample(&series, Frequency::Weekly, Some(d(2024, 1, 1)), Some(d(2024, 1, 15)));

        assert_eq!(
            weekly,
            vec![
                p(2024, 1, 1, dec!(100)),
                p(2024, 1, 8, dec!(110)),
                p(2024, 1, 15, dec!(90)),
            ]
        );
    }

    #[test]
    fn test_weekly_picks_latest_weekday_and_ignores_weekend() {
        let series = vec![
            p(2024, 1, 2, dec!(10)),  // 화
            p(2024, 1, 4, dec!(11)),  // 목
            p(2024, 1, 6, dec!(12)),  // 토 - 월~금 범위 밖
            p(2024, 1, 12, dec!(13)), // 다음 주 금
        ];
        let weekly = downsample(&series, Frequency::Weekly, Some(d(2024, 1, 1)), Some(d(2024, 1, 31)));

        assert_eq!(weekly, vec![p(2024, 1, 4, dec!(11)), p(2024, 1, 12, dec!(13))]);
    }

    #[test]
    fn test_weekly_anchor_is_monday_before_start() {
        // 시작일 수요일: 월/화 포인트는 구간 필터에서 제외되고 수~금만 후보
        let series = vec![
            p(2024, 1, 1, dec!(10)),
            p(2024, 1, 3, dec!(11)),
            p(2024, 1, 5, dec!(12)),
        ];
        let weekly = downsample(&series, Frequency::Weekly, Some(d(2024, 1, 3)), Some(d(2024, 1, 7)));
        assert_eq!(weekly, vec![p(2024, 1, 5, dec!(12))]);
    }

    #[test]
    fn test_weekly_bucket_clipped_to_end() {
        let series = vec![p(2024, 1, 2, dec!(10)), p(2024, 1, 4, dec!(11))];
        let weekly = downsample(&series, Frequency::Weekly, Some(d(2024, 1, 1)), Some(d(2024, 1, 3)));
        assert_eq!(weekly, vec![p(2024, 1, 2, dec!(10))]);
    }

    #[test]
    fn test_weekly_skips_empty_weeks() {
        let series = vec![p(2024, 1, 2, dec!(10)), p(2024, 1, 23, dec!(12))];
        let weekly = downsample(&series, Frequency::Weekly, Some(d(2024, 1, 1)), Some(d(2024, 1, 31)));
        assert_eq!(weekly.len(), 2);
    }

    #[test]
    fn test_latest_tie_prefers_first_input() {
        let series = vec![
            p(2024, 1, 3, dec!(11)),
            p(2024, 1, 4, dec!(20)),
            p(2024, 1, 4, dec!(21)),
        ];
        let weekly = downsample(&series, Frequency::Weekly, Some(d(2024, 1, 1)), Some(d(2024, 1, 7)));
        assert_eq!(weekly, vec![p(2024, 1, 4, dec!(20))]);
    }

    #[test]
    fn test_monthly_only_middle_month_populated() {
        let series = vec![
            p(2024, 2, 5, dec!(101)),
            p(2024, 2, 28, dec!(104)),
            p(2024, 2, 14, dec!(102)),
        ];
        let monthly = downsample(&series, Frequency::Monthly, Some(d(2024, 1, 1)), Some(d(2024, 3, 31)));
        assert_eq!(monthly, vec![p(2024, 2, 28, dec!(104))]);
    }

    #[test]
    fn test_monthly_last_bucket_clipped_to_end() {
        let series = vec![
            p(2024, 1, 31, dec!(100)),
            p(2024, 2, 10, dec!(105)),
            p(2024, 2, 20, dec!(107)),
        ];
        let monthly = downsample(&series, Frequency::Monthly, Some(d(2024, 1, 15)), Some(d(2024, 2, 15)));
        assert_eq!(monthly, vec![p(2024, 1, 31, dec!(100)), p(2024, 2, 10, dec!(105))]);
    }

    #[test]
    fn test_single_day_window() {
        let series = vec![p(2024, 1, 2, dec!(10)), p(2024, 1, 3, dec!(11))];
        for freq in Frequency::ALL {
            let out = downsample(&series, freq, Some(d(2024, 1, 3)), Some(d(2024, 1, 3)));
            assert_eq!(out, vec![p(2024, 1, 3, dec!(11))], "frequency {}", freq);
        }
    }

    #[test]
    fn test_window_outside_data() {
        let series = vec![p(2024, 1, 2, dec!(10))];
        for freq in Frequency::ALL {
            assert!(downsample(&series, freq, Some(d(2025, 1, 1)), Some(d(2025, 6, 1))).is_empty());
        }
        assert!(downsample(&[], Frequency::Monthly, Some(d(2024, 1, 1)), Some(d(2024, 12, 31)))
            .is_empty());
    }

    #[test]
    fn test_input_not_mutated() {
        let series = vec![p(2024, 1, 5, dec!(2)), p(2024, 1, 2, dec!(1))];
        let before = series.clone();
        let _ = downsample(&series, Frequency::Daily, Some(d(2024, 1, 1)), Some(d(2024, 1, 31)));
        assert_eq!(series, before);
    }

    #[test]
    fn test_bucket_helpers() {
        assert_eq!(monday_on_or_before(d(2024, 1, 7)), d(2024, 1, 1)); // 일요일
        assert_eq!(monday_on_or_before(d(2024, 1, 1)), d(2024, 1, 1));
        assert_eq!(last_of_month(d(2024, 2, 10)), d(2024, 2, 29));
        assert_eq!(last_of_month(d(2023, 12, 1)), d(2023, 12, 31));

        let window = DateWindow::new(d(2024, 1, 31), d(2024, 3, 10)).unwrap();
        let months: Vec<Bucket> = monthly_buckets(&window).collect();
        assert_eq!(months.len(), 3);
        assert_eq!(months[0].start, d(2024, 1, 1));
        assert_eq!(months[2].end, d(2024, 3, 10));

        let weeks: Vec<Bucket> = weekly_buckets(&window).collect();
        assert_eq!(weeks[0].start, d(2024, 1, 29));
        assert_eq!(weeks[0].end, d(2024, 2, 2));
        assert_eq!(weeks.last().unwrap().start, d(2024, 3, 4));
        assert_eq!(weeks.last().unwrap().end, d(2024, 3, 8));
    }
}
