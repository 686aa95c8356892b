//! NAV 시계열 타입.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::date::parse_nav_date;
use crate::error::NavResult;

/// 한 펀드의 특정 일자 NAV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavPoint {
    /// 기준일
    pub date: NaiveDate,
    /// 순자산가치
    pub nav: Decimal,
}

impl NavPoint {
    /// 새 NAV 포인트를 생성합니다.
    pub fn new(date: NaiveDate, nav: Decimal) -> Self {
        Self { date, nav }
    }
}

/// NAV 제공자가 돌려주는 원시 레코드 (`{date: "dd-mm-yyyy", nav}`).
///
/// `nav`는 숫자와 문자열 표현 모두 역직렬화됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavRecord {
    /// `dd-mm-yyyy` 날짜
    pub date: String,
    /// 순자산가치
    pub nav: Decimal,
}

impl NavRecord {
    /// 새 레코드를 생성합니다.
    pub fn new(date: impl Into<String>, nav: Decimal) -> Self {
        Self {
            date: date.into(),
            nav,
        }
    }

    /// 날짜를 파싱해 [`NavPoint`]로 변환합니다.
    pub fn to_point(&self) -> NavResult<NavPoint> {
        Ok(NavPoint::new(parse_nav_date(&self.date)?, self.nav))
    }
}

/// 원시 레코드 목록을 NAV 시계열로 변환합니다.
///
/// 입력 순서와 중복을 그대로 유지합니다. 잘못된 날짜가 하나라도 있으면
/// 첫 번째 에러를 반환합니다.
pub fn parse_records(records: &[NavRecord]) -> NavResult<Vec<NavPoint>> {
    records.iter().map(NavRecord::to_point).collect()
}

/// 첫 포인트 대비 변화율(%) 포인트.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PercentPoint {
    /// 기준일
    pub date: NaiveDate,
    /// 첫 포인트 대비 변화율 (%)
    pub value: Decimal,
}
