//! # NAV Chart Core
//!
//! 뮤추얼 펀드 NAV(순자산가치) 차트의 핵심 도메인 모델 및 타입을 제공합니다.
//!
//! 이 크레이트는 차트 엔진 전반에서 사용되는 기본 타입을 제공합니다:
//! - NAV 포인트 및 원시 레코드
//! - 다운샘플링 주기와 날짜 구간
//! - `dd-mm-yyyy` 날짜 파싱
//! - 펀드 목록(roster)
//! - 설정 관리
//! - 로깅 인프라

pub mod config;
pub mod error;
pub mod logging;
pub mod roster;
pub mod types;

pub use config::*;
pub use error::*;
pub use logging::*;
pub use roster::{FundConfig, FundRoster};
pub use types::*;
