//! 아크플래시 계산 로직을 라이브러리로 분리하여 CLI 외의 화면(웹, GUI)에서도 그대로 호출할 수 있게 한다.

pub mod app;
pub mod arcflash;
pub mod cli;
pub mod config;
pub mod report;
pub mod telemetry;
pub mod ui_cli;
pub mod units;

pub use arcflash::{calculate_arc_flash, ArcFlashInputs, ArcFlashResult};
