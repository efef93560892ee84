//! 본인확인 서비스 도입 ROI 계산 로직을 라이브러리로 분리하여 CLI 외의 화면에서도 재사용한다.

pub mod app;
pub mod calculator;
pub mod config;
pub mod export;
pub mod i18n;
pub mod input;
pub mod rate_tables;
pub mod roi;
pub mod summary;
pub mod ui_cli;
