//! NAV 차트 CLI 도구.
//!
//! 이 crate는 다음 기능을 제공합니다:
//! - 펀드/카테고리 목록 조회
//! - 단일 펀드 NAV 조회 및 차트 데이터 출력
//! - 카테고리 변화율 비교

pub mod commands;

pub use commands::OutputFormat;
