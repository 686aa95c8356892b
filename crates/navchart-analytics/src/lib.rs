//! NAV 시계열 분석 및 차트 데이터.
//!
//! 이 crate는 다음 기능을 제공합니다:
//! - 주기별 다운샘플링 (일/주/월)
//! - 변화율 리베이스 및 다중 펀드 날짜축 정렬
//! - 렌더러용 차트 데이터와 결정적 색상 팔레트
//! - Provider 조회부터 정렬까지의 서비스 파이프라인

pub mod alignment;
pub mod chart;
pub mod downsample;
pub mod error;
pub mod palette;
pub mod service;

pub use alignment::{align, rebase, AlignedSeries, AlignedTable, ExcludedSeries};
pub use chart::{ChartData, ChartDataset, Paint};
pub use downsample::{downsample, downsample_window, Bucket};
pub use error::{AnalyticsError, Result};
pub use palette::{palette_for, Color, ColorAssigner, FixedPalette, HuePalette};
pub use service::{ComparisonReport, FailedFund, FundSeries, NavChartService};
