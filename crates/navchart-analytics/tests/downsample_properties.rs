//! 다운샘플링/정렬 속성 테스트 (proptest)

use std::collections::BTreeSet;

use chrono::{Datelike, Days, NaiveDate};
use navchart_analytics::downsample::{first_of_month, monday_on_or_before};
use navchart_analytics::{align, downsample, rebase};
use navchart_core::{Frequency, NavPoint};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 11, 20).unwrap()
}

fn date_at(offset: u64) -> NaiveDate {
    base_date() + Days::new(offset)
}

/// 최대 200일 범위의 정렬되지 않은(중복 가능) NAV 시계열.
fn series_strategy() -> impl Strategy<Value = Vec<NavPoint>> {
    prop::collection::vec((0u64..200, 1i64..100_000), 0..80).prop_map(|raw| {
        raw.into_iter()
            .map(|(offset, cents)| NavPoint::new(date_at(offset), Decimal::new(cents, 2)))
            .collect()
    })
}

fn window_strategy() -> impl Strategy<Value = (NaiveDate, NaiveDate)> {
    (0u64..220, 0u64..120).prop_map(|(start, len)| (date_at(start), date_at(start + len)))
}

fn frequency_strategy() -> impl Strategy<Value = Frequency> {
    prop_oneof![
        Just(Frequency::Daily),
        Just(Frequency::Weekly),
        Just(Frequency::Monthly),
    ]
}

fn bucket_key(frequency: Frequency, date: NaiveDate) -> NaiveDate {
    match frequency {
        Frequency::Daily => date,
        Frequency::Weekly => monday_on_or_before(date),
        Frequency::Monthly => first_of_month(date),
    }
}

proptest! {
    #[test]
    fn output_stays_inside_window(
        series in series_strategy(),
        (start, end) in window_strategy(),
        frequency in frequency_strategy(),
    ) {
        for point in downsample(&series, frequency, Some(start), Some(end)) {
            prop_assert!(start <= point.date && point.date <= end);
        }
    }

    #[test]
    fn output_sorted_ascending(
        series in series_strategy(),
        (start, end) in window_strategy(),
        frequency in frequency_strategy(),
    ) {
        let out = downsample(&series, frequency, Some(start), Some(end));
        prop_assert!(out.windows(2).all(|w| w[0].date <= w[1].date));
    }

    #[test]
    fn daily_is_sorted_filtered_subset(
        series in series_strategy(),
        (start, end) in window_strategy(),
    ) {
        let out = downsample(&series, Frequency::Daily, Some(start), Some(end));
        let expected = series.iter().filter(|p| start <= p.date && p.date <= end).count();
        prop_assert_eq!(out.len(), expected);
        for point in &out {
            prop_assert!(series.contains(point));
        }
    }

    #[test]
    fn daily_is_idempotent(
        series in series_strategy(),
        (start, end) in window_strategy(),
    ) {
        let once = downsample(&series, Frequency::Daily, Some(start), Some(end));
        let twice = downsample(&once, Frequency::Daily, Some(start), Some(end));
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn one_latest_point_per_bucket(
        series in series_strategy(),
        (start, end) in window_strategy(),
        frequency in prop_oneof![Just(Frequency::Weekly), Just(Frequency::Monthly)],
    ) {
        let out = downsample(&series, frequency, Some(start), Some(end));

        let mut keys: Vec<NaiveDate> = out.iter().map(|p| bucket_key(frequency, p.date)).collect();
        let before = keys.len();
        keys.dedup();
        prop_assert_eq!(before, keys.len());

        for point in &out {
            let key = bucket_key(frequency, point.date);
            let latest_candidate = series
                .iter()
                .filter(|p| start <= p.date && p.date <= end)
                .filter(|p| bucket_key(frequency, p.date) == key)
                .filter(|p| frequency != Frequency::Weekly || p.date.weekday().num_days_from_monday() < 5)
                .map(|p| p.date)
                .max();
            prop_assert_eq!(Some(point.date), latest_candidate);
        }

        // 후보가 있는 구간은 빠짐없이 하나씩 출력
        let candidate_keys: BTreeSet<NaiveDate> = series
            .iter()
            .filter(|p| start <= p.date && p.date <= end)
            .filter(|p| frequency != Frequency::Weekly || p.date.weekday().num_days_from_monday() < 5)
            .map(|p| bucket_key(frequency, p.date))
            .collect();
        let emitted_keys: BTreeSet<NaiveDate> = keys.into_iter().collect();
        prop_assert_eq!(candidate_keys, emitted_keys);
    }

    #[test]
    fn weekly_never_emits_weekends(
        series in series_strategy(),
        (start, end) in window_strategy(),
    ) {
        for point in downsample(&series, Frequency::Weekly, Some(start), Some(end)) {
            prop_assert!(point.date.weekday().num_days_from_monday() < 5);
        }
    }

    #[test]
    fn missing_bound_is_always_empty(
        series in series_strategy(),
        (start, end) in window_strategy(),
        frequency in frequency_strategy(),
    ) {
        prop_assert!(downsample(&series, frequency, None, Some(end)).is_empty());
        prop_assert!(downsample(&series, frequency, Some(start), None).is_empty());
    }

    #[test]
    fn rebased_first_value_is_zero(series in series_strategy()) {
        let mut sorted = series.clone();
        sorted.sort_by_key(|p| p.date);
        let rebased = rebase(&sorted).unwrap();
        if let Some(first) = rebased.first() {
            prop_assert_eq!(first.value, Decimal::ZERO);
        }
    }

    #[test]
    fn aligned_series_match_label_length(
        a in series_strategy(),
        b in series_strategy(),
        c in series_strategy(),
    ) {
        let table = align(vec![("a", a), ("b", b), ("c", c)]);
        prop_assert_eq!(table.series.len(), 3);
        for series in &table.series {
            prop_assert_eq!(series.values.len(), table.labels.len());
        }
        prop_assert!(table.labels.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn aligned_value_at_own_first_date_is_zero(
        series in series_strategy(),
        (start, end) in window_strategy(),
    ) {
        // daily 출력은 같은 날짜 중복을 그대로 유지
        let daily = downsample(&series, Frequency::Daily, Some(start), Some(end));
        let table = align(vec![("fund", daily.clone())]);

        if let Some(first) = daily.iter().map(|p| p.date).min() {
            let idx = table.labels.iter().position(|d| *d == first).unwrap();
            prop_assert_eq!(table.get("fund").unwrap()[idx], Some(Decimal::ZERO));
        }
    }
}
