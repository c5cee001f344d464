//! 항공기 성능 계산 로직을 라이브러리로 분리하여 CLI와 GUI가 함께 사용한다.

pub mod app;
pub mod atmosphere;
pub mod calculation;
pub mod cli;
pub mod config;
pub mod export;
pub mod field;
pub mod i18n;
pub mod logging;
pub mod performance;
pub mod ui_cli;
