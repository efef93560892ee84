//! 본인확인 서비스 도입 ROI 계산 모듈 모음.
//! 입력 레코드 하나를 받아 결과 레코드 하나를 돌려주는 순수 함수로만 구성한다.

pub mod engine;
pub mod model;

pub use engine::*;
pub use model::*;
