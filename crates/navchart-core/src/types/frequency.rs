//! 다운샘플링 주기와 차트 유형 정의.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// NAV 리포팅 주기.
///
/// 다운샘플러가 한 구간(bucket)에서 하나의 대표 포인트를 고르는 단위입니다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// 일별 (축소 없음)
    #[default]
    Daily,
    /// 주별 (월~금 중 마지막 NAV)
    Weekly,
    /// 월별 (해당 월의 마지막 NAV)
    Monthly,
}

impl Frequency {
    /// 모든 주기.
    pub const ALL: [Frequency; 3] = [Frequency::Daily, Frequency::Weekly, Frequency::Monthly];

    /// 설정/CLI에서 쓰는 이름을 반환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
        }
    }

    /// 표시용 이름.
    pub fn display_name(&self) -> &'static str {
        match self {
            Frequency::Daily => "Daily",
            Frequency::Weekly => "Weekly",
            Frequency::Monthly => "Monthly",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" | "d" | "1d" => Ok(Frequency::Daily),
            "weekly" | "w" | "1w" => Ok(Frequency::Weekly),
            "monthly" | "m" | "1m" => Ok(Frequency::Monthly),
            _ => Err(format!("Invalid frequency: {}", s)),
        }
    }
}

/// 차트 유형.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    /// 선 차트
    #[default]
    Line,
    /// 막대 차트
    Bar,
    /// 파이 차트 (단일 펀드 전용)
    Pie,
}

impl ChartType {
    /// 설정/CLI에서 쓰는 이름을 반환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartType::Line => "line",
            ChartType::Bar => "bar",
            ChartType::Pie => "pie",
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ChartType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "line" => Ok(ChartType::Line),
            "bar" => Ok(ChartType::Bar),
            "pie" => Ok(ChartType::Pie),
            _ => Err(format!("Invalid chart type: {}", s)),
        }
    }
}

/// 비교 차트 팔레트 종류.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteKind {
    /// 고정 RGB 팔레트 순환
    #[default]
    Fixed,
    /// 색상환 간격 HSL
    Hue,
}

impl PaletteKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaletteKind::Fixed => "fixed",
            PaletteKind::Hue => "hue",
        }
    }
}

impl fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PaletteKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fixed" => Ok(PaletteKind::Fixed),
            "hue" | "hsl" => Ok(PaletteKind::Hue),
            _ => Err(format!("Invalid palette: {}", s)),
        }
    }
}
