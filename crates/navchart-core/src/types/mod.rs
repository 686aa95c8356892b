//! NAV 차트 엔진의 기본 타입.

pub mod date;
pub mod frequency;
pub mod nav;
pub mod window;

pub use date::*;
pub use frequency::*;
pub use nav::*;
pub use window::*;
