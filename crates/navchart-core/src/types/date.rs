//! `dd-mm-yyyy` 날짜 파싱/포맷.
//!
//! NAV 제공자는 날짜를 `dd-mm-yyyy` 문자열로 보냅니다. 파서는 `-`로 나눠
//! 일, 월(1부터 시작), 연도로 해석하며, 존재하지 않는 날짜는
//! [`NavError::MalformedDate`]로 돌려줍니다.

use chrono::{Datelike, NaiveDate};

use crate::error::{NavError, NavResult};

/// `dd-mm-yyyy` 문자열을 달력 날짜로 파싱합니다.
pub fn parse_nav_date(s: &str) -> NavResult<NaiveDate> {
    let malformed = || NavError::MalformedDate(s.to_string());

    let mut parts = s.trim().split('-');
    let (Some(dd), Some(mm), Some(yyyy), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(malformed());
    };

    let day: u32 = dd.parse().map_err(|_| malformed())?;
    let month: u32 = mm.parse().map_err(|_| malformed())?;
    let year: i32 = yyyy.parse().map_err(|_| malformed())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(malformed)
}

/// 날짜를 `dd-mm-yyyy` 문자열로 포맷합니다.
pub fn format_nav_date(date: NaiveDate) -> String {
    format!("{:02}-{:02}-{:04}", date.day(), date.month(), date.year())
}

/// 선택적 날짜 문자열을 파싱합니다. 빈 문자열은 `None`입니다.
pub fn parse_optional_nav_date(s: Option<&str>) -> NavResult<Option<NaiveDate>> {
    match s.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_nav_date(value).map(Some),
    }
}
