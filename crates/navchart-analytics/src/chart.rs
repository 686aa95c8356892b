//! 렌더러용 차트 데이터.
//!
//! 단일 펀드 NAV 시계열 또는 정렬된 비교 테이블을 Chart.js 형태의
//! `{labels, datasets}` 구조로 변환합니다. 결측은 JSON `null`로 나갑니다.

use navchart_core::{format_nav_date, ChartType, NavError, NavPoint, NavResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::alignment::AlignedTable;
use crate::palette::ColorAssigner;

/// 단일 펀드 차트의 배경 투명도.
const FILL_ALPHA: f32 = 0.2;

/// 데이터셋 색상 지정.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Paint {
    /// 데이터셋 전체에 한 색
    Single(String),
    /// 포인트(조각)마다 다른 색 (파이 차트)
    PerPoint(Vec<String>),
}

/// 하나의 데이터셋.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    /// 범례 이름
    pub label: String,
    /// `labels`와 같은 길이의 값 (`None` = 결측)
    pub data: Vec<Option<f64>>,
    /// 채우기 색
    pub background_color: Paint,
    /// 선 색
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    /// 선 두께
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    /// 영역 채우기 여부
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    /// 결측 구간을 선으로 이을지 여부
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span_gaps: Option<bool>,
}

/// 렌더러에 넘기는 차트 데이터.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    /// 차트 유형
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    /// X축 label (`dd-mm-yyyy`)
    pub labels: Vec<String>,
    /// 데이터셋
    pub datasets: Vec<ChartDataset>,
}

fn to_chart_value(value: Decimal) -> Option<f64> {
    value.to_f64()
}

impl ChartData {
    /// 단일 펀드 NAV 차트를 생성합니다.
    ///
    /// 파이 차트는 포인트마다 팔레트 색을 순서대로 입힙니다.
    pub fn single_fund(
        fund_name: &str,
        series: &[NavPoint],
        chart_type: ChartType,
        palette: &dyn ColorAssigner,
    ) -> Self {
        let labels = series.iter().map(|p| format_nav_date(p.date)).collect();
        let data = series.iter().map(|p| to_chart_value(p.nav)).collect();

        let dataset = match chart_type {
            ChartType::Pie => ChartDataset {
                label: fund_name.to_string(),
                data,
                background_color: Paint::PerPoint(
                    (0..series.len())
                        .map(|i| palette.color_for(i).to_string())
                        .collect(),
                ),
                border_color: None,
                border_width: None,
                fill: None,
                span_gaps: None,
            },
            ChartType::Line | ChartType::Bar => {
                let color = palette.color_for(0);
                ChartDataset {
                    label: fund_name.to_string(),
                    data,
                    background_color: Paint::Single(color.with_alpha(FILL_ALPHA)),
                    border_color: Some(color.with_alpha(1.0)),
                    border_width: Some(1),
                    fill: None,
                    span_gaps: None,
                }
            }
        };

        Self {
            chart_type,
            labels,
            datasets: vec![dataset],
        }
    }

    /// 변화율 비교 차트를 생성합니다.
    ///
    /// 파이 차트는 시간에 따른 비교에 의미가 없어 지원하지 않습니다.
    pub fn comparison(
        table: &AlignedTable,
        chart_type: ChartType,
        palette: &dyn ColorAssigner,
        span_gaps: bool,
    ) -> NavResult<Self> {
        if chart_type == ChartType::Pie {
            return Err(NavError::InvalidInput(
                "pie chart is not supported for percentage comparison".to_string(),
            ));
        }

        let datasets = table
            .series
            .iter()
            .enumerate()
            .map(|(idx, series)| {
                let color = palette.color_for(idx).to_string();
                ChartDataset {
                    label: series.name.clone(),
                    data: series
                        .values
                        .iter()
                        .map(|v| v.and_then(to_chart_value))
                        .collect(),
                    background_color: Paint::Single(color.clone()),
                    border_color: Some(color),
                    border_width: None,
                    fill: Some(false),
                    span_gaps: Some(span_gaps),
                }
            })
            .collect();

        Ok(Self {
            chart_type,
            labels: table.label_strings(),
            datasets,
        })
    }

    /// 데이터셋이 없는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty() || self.labels.is_empty()
    }
}
