//! 펀드 목록(roster).
//!
//! `[{ "name": ..., "code": ..., "category": ... }]` 형태의 JSON 파일에서
//! 로드되며, 카테고리별 비교 대상 펀드를 고르는 데 사용됩니다.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{NavError, NavResult};

/// 펀드 설정.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundConfig {
    /// 펀드 이름 (차트 범례에 사용)
    pub name: String,
    /// NAV 제공자의 스킴 코드
    pub code: String,
    /// 카테고리 (예: "Large Cap")
    pub category: String,
}

impl FundConfig {
    /// 새 펀드 설정을 생성합니다.
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            category: category.into(),
        }
    }
}

/// 입력 순서를 유지하는 펀드 목록.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FundRoster {
    funds: Vec<FundConfig>,
}

impl FundRoster {
    /// 펀드 목록으로 roster를 생성합니다.
    pub fn new(funds: Vec<FundConfig>) -> Self {
        Self { funds }
    }

    /// JSON 문자열에서 로드합니다.
    pub fn from_json(json: &str) -> NavResult<Self> {
        let funds: Vec<FundConfig> = serde_json::from_str(json)
            .map_err(|e| NavError::Config(format!("invalid fund roster JSON: {}", e)))?;
        Ok(Self::new(funds))
    }

    /// JSON 파일에서 로드합니다.
    pub fn load<P: AsRef<Path>>(path: P) -> NavResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            NavError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        let roster = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), funds = roster.len(), "Fund roster loaded");
        Ok(roster)
    }

    /// 전체 펀드.
    pub fn funds(&self) -> &[FundConfig] {
        &self.funds
    }

    /// 펀드 수.
    pub fn len(&self) -> usize {
        self.funds.len()
    }

    /// 비어 있는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.funds.is_empty()
    }

    /// 중복 없는 카테고리 목록 (처음 등장한 순서).
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for fund in &self.funds {
            if !seen.contains(&fund.category.as_str()) {
                seen.push(&fund.category);
            }
        }
        seen
    }

    /// 카테고리에 속한 펀드 (roster 순서).
    pub fn in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a FundConfig> {
        self.funds.iter().filter(move |f| f.category == category)
    }

    /// 코드로 펀드를 찾습니다.
    pub fn find_by_code(&self, code: &str) -> Option<&FundConfig> {
        self.funds.iter().find(|f| f.code == code)
    }
}
