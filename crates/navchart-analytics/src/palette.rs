//! 차트 시리즈 색상 할당.
//!
//! 색상은 시리즈 인덱스만으로 결정됩니다. 같은 입력이면 렌더링마다 같은
//! 색이 나오므로 범례가 흔들리지 않습니다.

use std::fmt;

use navchart_core::PaletteKind;
use serde::{Serialize, Serializer};

/// 차트 색상.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    /// RGB (0-255)
    Rgb(u8, u8, u8),
    /// HSL (hue 0-359, saturation/lightness %)
    Hsl(u16, u8, u8),
}

impl Color {
    /// 알파 값을 적용한 CSS 색상 문자열.
    pub fn with_alpha(&self, alpha: f32) -> String {
        let alpha = alpha.clamp(0.0, 1.0);
        match self {
            Color::Rgb(r, g, b) => format!("rgba({},{},{},{})", r, g, b, alpha),
            Color::Hsl(h, s, l) => format!("hsla({},{}%,{}%,{})", h, s, l, alpha),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgb(r, g, b) => write!(f, "rgb({},{},{})", r, g, b),
            Color::Hsl(h, s, l) => write!(f, "hsl({},{}%,{}%)", h, s, l),
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// 인덱스 → 색상 할당 전략.
pub trait ColorAssigner: Send + Sync {
    /// `index`번째 시리즈(또는 조각)의 색상.
    fn color_for(&self, index: usize) -> Color;
}

/// 고정 팔레트를 인덱스 순서로 순환합니다.
#[derive(Debug, Clone)]
pub struct FixedPalette {
    colors: Vec<Color>,
}

impl FixedPalette {
    /// 팔레트를 생성합니다. 빈 목록이면 기본 팔레트를 사용합니다.
    pub fn new(colors: Vec<Color>) -> Self {
        if colors.is_empty() {
            return Self::default();
        }
        Self { colors }
    }
}

impl Default for FixedPalette {
    fn default() -> Self {
        Self {
            colors: vec![
                Color::Rgb(54, 162, 235),
                Color::Rgb(255, 99, 132),
                Color::Rgb(75, 192, 192),
                Color::Rgb(255, 159, 64),
                Color::Rgb(153, 102, 255),
                Color::Rgb(255, 205, 86),
                Color::Rgb(201, 203, 207),
                Color::Rgb(46, 204, 113),
            ],
        }
    }
}

impl ColorAssigner for FixedPalette {
    fn color_for(&self, index: usize) -> Color {
        self.colors[index % self.colors.len()]
    }
}

/// 색상환을 일정 간격으로 도는 HSL 팔레트.
#[derive(Debug, Clone, Copy)]
pub struct HuePalette {
    /// 인덱스당 hue 증가량 (도)
    pub step: u16,
    /// 채도 (%)
    pub saturation: u8,
    /// 명도 (%)
    pub lightness: u8,
}

impl Default for HuePalette {
    fn default() -> Self {
        Self {
            step: 70,
            saturation: 70,
            lightness: 50,
        }
    }
}

impl ColorAssigner for HuePalette {
    fn color_for(&self, index: usize) -> Color {
        let hue = (index as u64 * u64::from(self.step)) % 360;
        Color::Hsl(hue as u16, self.saturation, self.lightness)
    }
}

/// 설정의 팔레트 종류에 해당하는 기본 팔레트.
pub fn palette_for(kind: PaletteKind) -> Box<dyn ColorAssigner> {
    match kind {
        PaletteKind::Fixed => Box::new(FixedPalette::default()),
        PaletteKind::Hue => Box::new(HuePalette::default()),
    }
}
