//! 포함 구간 `[start, end]` 날짜 윈도우.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{NavError, NavResult};

/// 양 끝을 포함하는 날짜 구간.
///
/// 생성 시 `start <= end`가 보장됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateWindow {
    /// 새 구간을 생성합니다. `start > end`이면 `InvalidWindow`입니다.
    pub fn new(start: NaiveDate, end: NaiveDate) -> NavResult<Self> {
        if start > end {
            return Err(NavError::InvalidWindow(format!(
                "start {} is after end {}",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    /// 선택적 경계에서 구간을 생성합니다.
    ///
    /// 사용자가 아직 구간을 다 고르지 않은 상태는 `InvalidWindow`로 표현됩니다.
    pub fn from_bounds(start: Option<NaiveDate>, end: Option<NaiveDate>) -> NavResult<Self> {
        match (start, end) {
            (Some(start), Some(end)) => Self::new(start, end),
            (None, _) => Err(NavError::InvalidWindow("missing start date".to_string())),
            (_, None) => Err(NavError::InvalidWindow("missing end date".to_string())),
        }
    }

    /// 시작일.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// 종료일.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// 날짜가 구간에 포함되는지 확인합니다.
    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// 주어진 날짜를 구간 종료일로 잘라냅니다.
    #[inline]
    pub fn clip_end(&self, date: NaiveDate) -> NaiveDate {
        date.min(self.end)
    }
}
